//! Integration tests for the directory index

mod build_failure;
mod lookup_roundtrip;
mod symlinks;
mod tree_determinism;
mod tree_structure;
