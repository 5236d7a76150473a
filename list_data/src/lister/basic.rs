use crate::error::{ListDataError, Result};
use std::fs;
use std::path::Path;

/// Names of the immediate children of `path`, in the order the filesystem
/// yields them.
///
/// Fails when `path` cannot be opened as a directory, which keeps a missing
/// or unreadable path distinguishable from an empty directory.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(path)
        .map_err(|e| ListDataError::enumeration(path.display().to_string(), e))?;

    let mut names = Vec::with_capacity(16);
    // Entries that fail mid-iteration are dropped; only an unopenable
    // directory counts as an enumeration failure.
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        // Skip current and parent dir entries if the underlying FS yields them
        if name == "." || name == ".." {
            continue;
        }
        names.push(name);
    }

    Ok(names)
}
