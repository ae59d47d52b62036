//! Tree builder: one depth-first pass from a source into an [`Index`]

use crate::error::IndexError;
use crate::index::Index;
use crate::tree::id::{identify, ItemId};
use crate::tree::node::{DirectoryNode, FileNode, Node, NodeIndex};
use crate::tree::path;
use crate::tree::source::{EntryKind, Source};
use crate::tree::walker::{LocalSource, WalkerConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Builds an index of a local directory tree
pub struct TreeBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (symlinks, ignore patterns, depth). When unset the
    /// default config is used.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Index the local tree under the builder's root
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Index, IndexError> {
        let config = self.walker_config.clone().unwrap_or_default();
        let source = LocalSource::new(&self.root, config.follow_symlinks)?;
        Self::build_from(&source, &config)
    }

    /// Index any source
    ///
    /// Either the whole tree is indexed or an error is returned; nothing
    /// partial escapes.
    pub fn build_from<S: Source + ?Sized>(
        source: &S,
        config: &WalkerConfig,
    ) -> Result<Index, IndexError> {
        let start = Instant::now();
        info!(root = %source.root().display(), "Starting index build");

        let index = match Traversal::new(source, config).run() {
            Ok(index) => index,
            Err(e) => {
                error!("Index build failed: {}", e);
                return Err(e);
            }
        };

        let stats = index.stats();
        info!(
            directories = stats.directories,
            files = stats.files,
            total_bytes = stats.total_bytes,
            duration_ms = start.elapsed().as_millis(),
            "Index build completed"
        );

        Ok(index)
    }
}

/// Private build state; becomes an [`Index`] only on success
struct Traversal<'a, S: Source + ?Sized> {
    source: &'a S,
    config: &'a WalkerConfig,
    nodes: Vec<Node>,
    directories: HashMap<String, NodeIndex>,
    files: HashMap<String, NodeIndex>,
}

impl<'a, S: Source + ?Sized> Traversal<'a, S> {
    fn new(source: &'a S, config: &'a WalkerConfig) -> Self {
        Self {
            source,
            config,
            nodes: Vec::new(),
            directories: HashMap::new(),
            files: HashMap::new(),
        }
    }

    fn run(mut self) -> Result<Index, IndexError> {
        let root_path = self.source.root().to_path_buf();
        let root_name = self.source.root_name();
        let root_id = ItemId::new(identify(&root_name, true)?, Vec::new());

        self.register(Node::Directory(DirectoryNode {
            name: path::display_name(&root_name),
            os_name: root_name,
            id: root_id.clone(),
            children: Vec::new(),
        }))?;

        self.visit_directory(&root_path, &root_id, 0)?;

        Ok(Index::from_parts(self.nodes, self.directories, self.files))
    }

    fn visit_directory(
        &mut self,
        dir_path: &Path,
        dir_id: &ItemId,
        depth: usize,
    ) -> Result<(), IndexError> {
        if let Some(max_depth) = self.config.max_depth {
            if depth >= max_depth {
                debug!(path = %dir_path.display(), depth, "Max depth reached, not descending");
                return Ok(());
            }
        }

        for entry in self.source.list(dir_path)? {
            if self.config.is_ignored(&entry.name) {
                debug!(path = %entry.path.display(), "Ignoring entry");
                continue;
            }
            let id = dir_id.child(&entry.name)?;
            let name = path::display_name(&entry.name);
            trace!(path = %entry.path.display(), key = %id, "Visiting entry");

            match entry.kind {
                EntryKind::Directory => {
                    let index = self.register(Node::Directory(DirectoryNode {
                        name,
                        os_name: entry.name,
                        id: id.clone(),
                        children: Vec::new(),
                    }))?;
                    self.link(&id, index)?;
                    self.visit_directory(&entry.path, &id, depth + 1)?;
                }
                EntryKind::File => {
                    let content = self.source.read(&entry.path)?;
                    let index = self.register(Node::File(FileNode {
                        name,
                        os_name: entry.name,
                        id: id.clone(),
                        content,
                    }))?;
                    self.link(&id, index)?;
                }
            }
        }

        Ok(())
    }

    /// Store a node in the arena and its table, refusing to overwrite
    fn register(&mut self, node: Node) -> Result<NodeIndex, IndexError> {
        let key = node.id().full_key();

        let existing = self
            .directories
            .get(&key)
            .or_else(|| self.files.get(&key))
            .copied();
        if let Some(existing) = existing {
            return Err(IndexError::IdentifierCollision {
                key,
                existing: self.nodes[existing.0].name().to_string(),
                incoming: node.name().to_string(),
            });
        }

        let index = NodeIndex(self.nodes.len());
        if node.is_dir() {
            self.directories.insert(key, index);
        } else {
            self.files.insert(key, index);
        }
        self.nodes.push(node);
        Ok(index)
    }

    /// Append a registered node to the child list of the directory stored
    /// under its ancestor key
    fn link(&mut self, id: &ItemId, child: NodeIndex) -> Result<(), IndexError> {
        if id.is_root() {
            return Ok(());
        }

        let parent_key = id.ancestor_key();
        let parent = self
            .directories
            .get(&parent_key)
            .copied()
            .ok_or_else(|| IndexError::ParentNotFound(parent_key.clone()))?;

        match &mut self.nodes[parent.0] {
            Node::Directory(dir) => {
                dir.children.push(child);
                Ok(())
            }
            Node::File(_) => Err(IndexError::ParentNotFound(parent_key)),
        }
    }
}
