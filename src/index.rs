//! Index store and query interface
//!
//! The index owns every node in a single arena. Two flat tables map a node's
//! full key to its arena slot, one for directories and one for files. A
//! query turns a top-down identifier path into a full key and does one table
//! lookup; child lists are only walked when enumerating.

use crate::tree::id::{KEY_SEPARATOR, ROOT_ID};
use crate::tree::node::{DirectoryNode, FileNode, Node, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena slot of the root; the builder always registers it first.
const ROOT_INDEX: NodeIndex = NodeIndex(0);

/// Read-only index of a directory tree
#[derive(Debug, Clone)]
pub struct Index {
    nodes: Vec<Node>,
    directories: HashMap<String, NodeIndex>,
    files: HashMap<String, NodeIndex>,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// The entry's own segment identifier; append it to the listed path to
    /// address the entry
    pub id: String,
    pub is_dir: bool,
}

/// Name and content of a looked-up file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileView<'a> {
    pub name: &'a str,
    pub content: &'a [u8],
}

/// Aggregate counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub directories: u64,
    pub files: u64,
    pub total_bytes: u64,
    pub max_depth: u64,
}

impl Index {
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        directories: HashMap<String, NodeIndex>,
        files: HashMap<String, NodeIndex>,
    ) -> Self {
        Self {
            nodes,
            directories,
            files,
        }
    }

    /// Full key addressed by a top-down identifier path
    ///
    /// The path is reversed into nearest-first order and terminated with the
    /// root sentinel, so `[]` maps to `"root"`.
    pub fn query_key<S: AsRef<str>>(path: &[S]) -> String {
        let mut key = String::new();
        for id in path.iter().rev() {
            key.push_str(id.as_ref());
            key.push_str(KEY_SEPARATOR);
        }
        key.push_str(ROOT_ID);
        key
    }

    /// Directory at `path`, or `None`
    pub fn lookup_directory<S: AsRef<str>>(&self, path: &[S]) -> Option<&DirectoryNode> {
        if !is_well_formed(path) {
            return None;
        }
        self.directory_by_key(&Self::query_key(path))
    }

    /// File at `path`, or `None`
    pub fn lookup_file<S: AsRef<str>>(&self, path: &[S]) -> Option<&FileNode> {
        if !is_well_formed(path) {
            return None;
        }
        self.file_by_key(&Self::query_key(path))
    }

    pub fn directory_by_key(&self, key: &str) -> Option<&DirectoryNode> {
        let index = self.directories.get(key)?;
        self.nodes.get(index.0)?.as_directory()
    }

    pub fn file_by_key(&self, key: &str) -> Option<&FileNode> {
        let index = self.files.get(key)?;
        self.nodes.get(index.0)?.as_file()
    }

    /// Entries of the directory at `path`, in traversal order
    pub fn list<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<Listing>> {
        let dir = self.lookup_directory(path)?;
        Some(
            self.children(dir)
                .map(|node| Listing {
                    name: node.name().to_string(),
                    id: node.id().self_id().to_string(),
                    is_dir: node.is_dir(),
                })
                .collect(),
        )
    }

    /// Name and content of the file at `path`
    pub fn read<S: AsRef<str>>(&self, path: &[S]) -> Option<FileView<'_>> {
        self.lookup_file(path).map(|file| FileView {
            name: file.name(),
            content: file.content(),
        })
    }

    /// The tree root
    pub fn root(&self) -> &DirectoryNode {
        match &self.nodes[ROOT_INDEX.0] {
            Node::Directory(dir) => dir,
            Node::File(_) => unreachable!("index root is always a directory"),
        }
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    /// Children of `dir`, resolved through the arena
    pub fn children<'a>(&'a self, dir: &'a DirectoryNode) -> impl Iterator<Item = &'a Node> + 'a {
        dir.child_indices()
            .iter()
            .filter_map(move |index| self.nodes.get(index.0))
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            directories: self.directories.len() as u64,
            files: self.files.len() as u64,
            ..Default::default()
        };
        for node in &self.nodes {
            if let Node::File(file) = node {
                stats.total_bytes += file.size();
            }
            stats.max_depth = stats.max_depth.max(node.id().depth() as u64);
        }
        stats
    }

    /// Depth-first walk over the child lists, starting at the root
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            index: self,
            stack: vec![(0, ROOT_INDEX)],
        }
    }
}

/// Depth-first iterator yielding `(depth, node)` in traversal order
pub struct Walk<'a> {
    index: &'a Index,
    stack: Vec<(usize, NodeIndex)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, current) = self.stack.pop()?;
        let node = self.index.node(current)?;
        if let Node::Directory(dir) = node {
            for child in dir.child_indices().iter().rev() {
                self.stack.push((depth + 1, *child));
            }
        }
        Some((depth, node))
    }
}

/// Path elements must be single identifiers
fn is_well_formed<S: AsRef<str>>(path: &[S]) -> bool {
    path.iter().all(|id| {
        let id = id.as_ref();
        !id.is_empty() && !id.contains(KEY_SEPARATOR)
    })
}
