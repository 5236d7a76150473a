use super::{read_names, DirectoryLister};
use std::path::Path;

/// Fixed variant of [`super::UnjoinedLister`]: each child is joined onto its
/// parent before recursing, so the whole tree under the root is visited.
///
/// Output keeps the same shape (bare names, immediate children first).
/// Symlinked directories are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinedLister {
    max_depth: Option<usize>,
}

impl JoinedLister {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    fn traverse_at(&self, path: &Path, depth: usize) -> Vec<String> {
        if self.max_depth.map_or(false, |max| depth > max) {
            return Vec::new();
        }

        let files = match read_names(path) {
            Ok(names) => names,
            Err(_) => return Vec::new(),
        };

        let mut children = Vec::new();
        for child in &files {
            children.extend(self.traverse_at(&path.join(child), depth + 1));
        }

        let mut entries = files;
        entries.extend(children);
        entries
    }
}

impl DirectoryLister for JoinedLister {
    fn traverse(&self, path: &str) -> Vec<String> {
        self.traverse_at(Path::new(path), 0)
    }
}
