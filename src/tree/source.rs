//! Filesystem sources
//!
//! The builder only needs two capabilities from whatever backs the tree:
//! list a directory's immediate entries, and read a file's bytes. Anything
//! implementing [`Source`] can be indexed.

use crate::error::IndexError;
use crate::tree::path;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate entry of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Bare segment name, as the store spells it
    pub name: OsString,
    /// Location to pass back to [`Source::list`] or [`Source::read`]
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Backing store that can be indexed
pub trait Source {
    /// Location of the tree root
    fn root(&self) -> &Path;

    /// Immediate entries of `dir`, in the order the store yields them
    fn list(&self, dir: &Path) -> Result<Vec<SourceEntry>, IndexError>;

    /// Full content of `file`
    fn read(&self, file: &Path) -> Result<Vec<u8>, IndexError>;

    /// Segment name of the root
    fn root_name(&self) -> OsString {
        path::segment_os_name(self.root())
    }
}

/// In-memory tree
///
/// Listing order is insertion order. Files can be marked unreadable to
/// exercise build failure.
#[derive(Debug, Clone)]
pub struct MemorySource {
    root: PathBuf,
    dirs: HashMap<PathBuf, Vec<SourceEntry>>,
    files: HashMap<PathBuf, Option<Vec<u8>>>,
}

impl MemorySource {
    /// Create an empty tree whose root is called `root_name`
    pub fn new(root_name: impl Into<PathBuf>) -> Self {
        let root = root_name.into();
        let mut dirs = HashMap::new();
        dirs.insert(root.clone(), Vec::new());
        Self {
            root,
            dirs,
            files: HashMap::new(),
        }
    }

    /// Add a file at a `/`-separated path relative to the root
    ///
    /// Missing parent directories are created.
    pub fn with_file(mut self, relative: &str, content: impl Into<Vec<u8>>) -> Self {
        let path = self.insert(relative, EntryKind::File);
        self.files.insert(path, Some(content.into()));
        self
    }

    /// Add a file whose read always fails
    pub fn with_unreadable_file(mut self, relative: &str) -> Self {
        let path = self.insert(relative, EntryKind::File);
        self.files.insert(path, None);
        self
    }

    /// Add a directory (and any missing parents)
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.insert(relative, EntryKind::Directory);
        self
    }

    fn insert(&mut self, relative: &str, kind: EntryKind) -> PathBuf {
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let mut parent = self.root.clone();

        for (i, segment) in segments.iter().enumerate() {
            let child = parent.join(segment);
            let is_last = i + 1 == segments.len();
            let child_kind = if is_last { kind } else { EntryKind::Directory };

            let known = self.dirs.contains_key(&child) || self.files.contains_key(&child);
            if !known {
                self.dirs.entry(parent.clone()).or_default().push(SourceEntry {
                    name: OsString::from(segment),
                    path: child.clone(),
                    kind: child_kind,
                });
            }
            if child_kind == EntryKind::Directory {
                self.dirs.entry(child.clone()).or_default();
            }
            parent = child;
        }

        parent
    }
}

impl Source for MemorySource {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self, dir: &Path) -> Result<Vec<SourceEntry>, IndexError> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            IndexError::io(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            )
        })
    }

    fn read(&self, file: &Path) -> Result<Vec<u8>, IndexError> {
        match self.files.get(file) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(IndexError::io(
                file,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "unreadable"),
            )),
            None => Err(IndexError::io(
                file,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }
}
