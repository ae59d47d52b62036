//! Composite identifiers
//!
//! Every node carries its own segment identifier plus the identifiers of all
//! of its ancestors, nearest first. Joining the two gives the node's full key;
//! joining just the ancestors gives the parent's full key. That equality is
//! what lets a flat table double as the parent lookup during the build.

use crate::error::IndexError;
use crate::tree::{hasher, path};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;

/// Reserved identifier of the tree root, whatever the root directory is called
pub const ROOT_ID: &str = "root";

/// Separator between identifiers inside a composite key
pub const KEY_SEPARATOR: &str = ".";

/// Identifier of a single segment
///
/// Returns [`ROOT_ID`] for the tree root, otherwise the segment hash.
/// A non-root segment must be a single path component.
pub fn identify<S: AsRef<OsStr> + ?Sized>(
    segment: &S,
    is_tree_root: bool,
) -> Result<String, IndexError> {
    if is_tree_root {
        return Ok(ROOT_ID.to_string());
    }
    let segment = segment.as_ref();
    path::validate_os_segment(segment)?;
    Ok(hasher::os_segment_id(segment))
}

/// Build an ancestor chain from ancestor identifiers, nearest ancestor first
pub fn compose_chain<I, S>(ancestor_ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ancestor_ids.into_iter().map(Into::into).collect()
}

/// Join an ancestor chain into a key
pub fn ancestor_key<S: AsRef<str>>(chain: &[S]) -> String {
    let mut key = String::new();
    for (i, id) in chain.iter().enumerate() {
        if i > 0 {
            key.push_str(KEY_SEPARATOR);
        }
        key.push_str(id.as_ref());
    }
    key
}

/// Join a segment identifier with its ancestor chain
pub fn full_key<S: AsRef<str>>(self_id: &str, chain: &[S]) -> String {
    let ancestors = ancestor_key(chain);
    if ancestors.is_empty() {
        self_id.to_string()
    } else {
        format!("{}{}{}", self_id, KEY_SEPARATOR, ancestors)
    }
}

/// Identifier of one node: its own segment id and its ancestry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId {
    self_id: String,
    ancestors: Vec<String>,
}

impl ItemId {
    /// Identifier of the tree root
    pub fn root() -> Self {
        Self {
            self_id: ROOT_ID.to_string(),
            ancestors: Vec::new(),
        }
    }

    pub fn new(self_id: String, ancestors: Vec<String>) -> Self {
        Self { self_id, ancestors }
    }

    /// Identifier of a child segment of this node
    ///
    /// The child's chain is this node's own id followed by this node's chain.
    /// Fails with [`IndexError::InvalidSegment`] unless `segment` is a single
    /// path component.
    pub fn child(&self, segment: impl AsRef<OsStr>) -> Result<Self, IndexError> {
        let self_id = identify(segment.as_ref(), false)?;

        let mut ancestors = Vec::with_capacity(self.ancestors.len() + 1);
        ancestors.push(self.self_id.clone());
        ancestors.extend(self.ancestors.iter().cloned());

        Ok(Self {
            self_id,
            ancestors: compose_chain(ancestors),
        })
    }

    pub fn self_id(&self) -> &str {
        &self.self_id
    }

    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty() && self.self_id == ROOT_ID
    }

    /// Number of ancestors; zero for the root
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn ancestor_key(&self) -> String {
        ancestor_key(&self.ancestors)
    }

    pub fn full_key(&self) -> String {
        full_key(&self.self_id, &self.ancestors)
    }

    /// Top-down identifier path from the root's child to this node
    ///
    /// This is the form the query interface accepts.
    pub fn query_path(&self) -> Vec<String> {
        if self.is_root() {
            return Vec::new();
        }
        let mut path: Vec<String> = self
            .ancestors
            .iter()
            .rev()
            .skip(1) // root sentinel
            .cloned()
            .collect();
        path.push(self.self_id.clone());
        path
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_key())
    }
}
