use super::{read_names, DirectoryLister};
use std::path::Path;

/// Recursive lister that descends using each child's bare name.
///
/// Children are not joined onto their parent before recursing, so every
/// descent resolves the name against the process working directory instead
/// of the directory being scanned. An entry only pulls in more names when a
/// directory of the same name happens to exist under the working directory.
/// See [`super::JoinedLister`] for the variant that joins paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnjoinedLister {
    max_depth: Option<usize>,
}

impl UnjoinedLister {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    fn traverse_at(&self, path: &str, depth: usize) -> Vec<String> {
        if self.max_depth.map_or(false, |max| depth > max) {
            return Vec::new();
        }

        let files = match read_names(Path::new(path)) {
            Ok(names) => names,
            Err(_) => return Vec::new(),
        };

        let mut children = Vec::new();
        for child in &files {
            // Bare name on purpose: resolves relative to the working directory.
            children.extend(self.traverse_at(child, depth + 1));
        }

        let mut entries = files;
        entries.extend(children);
        entries
    }
}

impl DirectoryLister for UnjoinedLister {
    fn traverse(&self, path: &str) -> Vec<String> {
        self.traverse_at(path, 0)
    }
}
