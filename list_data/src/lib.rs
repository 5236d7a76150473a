//! Recursive directory listing rooted at the directory named by `PWD`.
//!
//! [`list_files`] is the entry point. It never fails: an unset root or any
//! directory that cannot be enumerated contributes no entries.
//!
//! Descent happens on each child's bare name, so it resolves against the
//! process working directory rather than the directory being scanned.
//! [`JoinedLister`] is the explicitly fixed alternative.

pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod formatter;
pub mod lister;
pub mod utils;

pub use env::{Environment, ROOT_VAR};
pub use error::{ListDataError, Result};
pub use lister::{
    list_files, list_files_in, read_names, DirectoryLister, JoinedLister, TraversalMode,
    UnjoinedLister,
};
