//! vfs-index: key-addressed directory tree index
//!
//! Indexes a directory tree once into two flat tables, one for directories
//! and one for files, keyed by a composite identifier built from per-segment
//! hashes. Any node can then be fetched in constant time from the chain of
//! identifiers leading to it, without walking the tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod tree;

pub use error::{ApiError, IndexError};
pub use index::{FileView, Index, IndexStats, Listing};
pub use tree::builder::TreeBuilder;
pub use tree::id::{ItemId, ROOT_ID};
pub use tree::node::{DirectoryNode, FileNode, Node, NodeIndex};
pub use tree::source::{EntryKind, MemorySource, Source, SourceEntry};
pub use tree::walker::{LocalSource, WalkerConfig};
