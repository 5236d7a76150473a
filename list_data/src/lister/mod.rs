use crate::env::{Environment, ROOT_VAR};
use crate::error::{ConfigErrorKind, ListDataError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait DirectoryLister {
    /// Names found under `path`: its immediate children first, then everything
    /// the recursion returned for each child in order. Never fails; a path that
    /// cannot be enumerated contributes nothing.
    fn traverse(&self, path: &str) -> Vec<String>;
}

mod basic;
mod joined;
mod recursive;

pub use basic::read_names;
pub use joined::JoinedLister;
pub use recursive::UnjoinedLister;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    #[default]
    Unjoined,
    Joined,
}

impl TraversalMode {
    pub const VALUES: [&'static str; 2] = ["unjoined", "joined"];

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalMode::Unjoined => "unjoined",
            TraversalMode::Joined => "joined",
        }
    }

    pub fn lister(self, max_depth: Option<usize>) -> Box<dyn DirectoryLister> {
        match self {
            TraversalMode::Unjoined => Box::new(UnjoinedLister::new(max_depth)),
            TraversalMode::Joined => Box::new(JoinedLister::new(max_depth)),
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalMode {
    type Err = ListDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unjoined" => Ok(TraversalMode::Unjoined),
            "joined" => Ok(TraversalMode::Joined),
            other => Err(ListDataError::Config(ConfigErrorKind::InvalidValue(
                "traversal".to_string(),
                format!(
                    "Invalid traversal value: {}. Must be one of: {}",
                    other,
                    Self::VALUES.join(", ")
                ),
            ))),
        }
    }
}

/// Recursively lists the directory named by `PWD`.
///
/// Returns an empty vector when `PWD` is unset or cannot be enumerated.
pub fn list_files() -> Vec<String> {
    list_files_in(&Environment::capture(), ROOT_VAR, &UnjoinedLister::default())
}

pub fn list_files_in(
    env: &Environment,
    root_var: &str,
    lister: &dyn DirectoryLister,
) -> Vec<String> {
    match env.get(root_var) {
        Some(root) => lister.traverse(root),
        None => Vec::new(),
    }
}
