//! Directory tree model
//!
//! Identifier derivation, node types, sources, and the builder that turns a
//! source into an [`Index`](crate::index::Index).

pub mod builder;
pub mod hasher;
pub mod id;
pub mod node;
pub mod path;
pub mod source;
pub mod walker;
