//! Filesystem walker for traversing directory structures

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// A visited directory and the files found directly inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Directory path (prefixed by the walk root as given)
    pub path: PathBuf,
    /// Names of regular files directly inside, sorted
    pub files: Vec<OsString>,
}

/// Result of a walk: readable directories plus those whose entries could not be listed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub listings: Vec<DirectoryListing>,
    pub unreadable: Vec<PathBuf>,
}

/// Filesystem walker. Symlinked directories are never descended into.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the tree and group files by their parent directory.
    ///
    /// Directories come out in pre-order (a directory before its children,
    /// siblings sorted by name), the root first. A directory whose entries
    /// cannot be read is reported in `unreadable` and has no listing; other
    /// unreadable entries are logged and skipped. The walk itself never fails.
    pub fn walk(&self) -> WalkOutcome {
        let mut listings: Vec<DirectoryListing> = Vec::new();
        let mut index_by_dir: HashMap<PathBuf, usize> = HashMap::new();
        let mut unreadable: Vec<PathBuf> = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    if let Some(path) = e.path() {
                        if index_by_dir.contains_key(path) {
                            unreadable.push(path.to_path_buf());
                        }
                    }
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                index_by_dir.insert(entry.path().to_path_buf(), listings.len());
                listings.push(DirectoryListing {
                    path: entry.path().to_path_buf(),
                    files: Vec::new(),
                });
            } else if is_file_like(&entry) {
                let parent = entry.path().parent().map(Path::to_path_buf);
                if let Some(&index) = parent.as_ref().and_then(|p| index_by_dir.get(p)) {
                    listings[index].files.push(entry.file_name().to_os_string());
                }
            }
        }

        listings.retain(|listing| !unreadable.contains(&listing.path));
        WalkOutcome {
            listings,
            unreadable,
        }
    }
}

/// Regular files, plus symlinks that resolve to regular files.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink()
        && std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false)
}
