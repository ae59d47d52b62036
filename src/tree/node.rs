//! Index node types

use crate::tree::id::ItemId;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};

/// Handle to a node in the index arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// A file and its full content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub(crate) name: String,
    pub(crate) os_name: OsString,
    pub(crate) id: ItemId,
    pub(crate) content: Vec<u8>,
}

impl FileNode {
    /// Printable name; invalid UTF-8 is replaced
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name exactly as the source listed it
    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8, lossily
    pub fn content_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A directory and its children in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub(crate) name: String,
    pub(crate) os_name: OsString,
    pub(crate) id: ItemId,
    pub(crate) children: Vec<NodeIndex>,
}

impl DirectoryNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Arena handles of the children; resolve them through the index
    pub fn child_indices(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Any indexed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Directory(d) => &d.name,
        }
    }

    pub fn os_name(&self) -> &OsStr {
        match self {
            Node::File(f) => &f.os_name,
            Node::Directory(d) => &d.os_name,
        }
    }

    pub fn id(&self) -> &ItemId {
        match self {
            Node::File(f) => &f.id,
            Node::Directory(d) => &d.id,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }
}
