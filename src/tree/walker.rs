//! Local filesystem source

use crate::error::IndexError;
use crate::tree::path;
use crate::tree::source::{EntryKind, Source, SourceEntry};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Traversal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Segment names to skip along with their subtree
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum directory depth to descend into (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

impl WalkerConfig {
    pub fn is_ignored(&self, segment: impl AsRef<OsStr>) -> bool {
        let segment = segment.as_ref();
        self.ignore_patterns.iter().any(|p| OsStr::new(p) == segment)
    }
}

/// Source backed by the local filesystem
///
/// Directories are listed one level at a time in the order the OS yields
/// them. Without `follow_symlinks`, symlinks are skipped; with it, they are
/// resolved and indexed as whatever they point to.
pub struct LocalSource {
    root: PathBuf,
    follow_symlinks: bool,
}

impl LocalSource {
    /// Open a local tree; the root is canonicalized and must be a directory
    pub fn new(root: &Path, follow_symlinks: bool) -> Result<Self, IndexError> {
        let root = path::canonicalize_root(root)?;
        if !root.is_dir() {
            return Err(IndexError::InvalidRoot(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self {
            root,
            follow_symlinks,
        })
    }

    fn guard_symlink_loop(&self, dir: &Path, entry_path: &Path) -> Result<(), IndexError> {
        let target = dunce::canonicalize(entry_path).map_err(|e| IndexError::io(entry_path, e))?;
        let current = dunce::canonicalize(dir).map_err(|e| IndexError::io(dir, e))?;
        if current.starts_with(&target) {
            return Err(IndexError::io(
                entry_path,
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("symlink loop back to {}", target.display()),
                ),
            ));
        }
        Ok(())
    }
}

impl Source for LocalSource {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self, dir: &Path) -> Result<Vec<SourceEntry>, IndexError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_symlinks);

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "walk failed")
                });
                IndexError::io(path, source)
            })?;

            let entry_path = entry.path().to_path_buf();
            let file_type = entry.file_type();

            if entry.path_is_symlink() && !self.follow_symlinks {
                debug!(path = %entry_path.display(), "Skipping symlink");
                continue;
            }

            let kind = if file_type.is_dir() {
                if entry.path_is_symlink() {
                    self.guard_symlink_loop(dir, &entry_path)?;
                }
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                debug!(path = %entry_path.display(), "Skipping special file");
                continue;
            };

            entries.push(SourceEntry {
                name: entry.file_name().to_os_string(),
                path: entry_path,
                kind,
            });
        }

        Ok(entries)
    }

    fn read(&self, file: &Path) -> Result<Vec<u8>, IndexError> {
        std::fs::read(file).map_err(|e| IndexError::io(file, e))
    }
}
