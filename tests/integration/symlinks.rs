//! Symlink handling follows the walker config

#![cfg(unix)]

use super::test_utils::write_tree;
use std::os::unix::fs::symlink;
use tempfile::TempDir;
use vfs_index::tree::hasher::segment_id;
use vfs_index::{IndexError, TreeBuilder, WalkerConfig};

fn following() -> WalkerConfig {
    WalkerConfig {
        follow_symlinks: true,
        ..Default::default()
    }
}

#[test]
fn test_symlinks_skipped_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("real/data.txt", "data")]);
    symlink(root.join("real"), root.join("alias")).unwrap();

    let index = TreeBuilder::new(root.to_path_buf()).build().unwrap();
    assert!(index.lookup_directory(&[segment_id("alias")]).is_none());
    assert_eq!(index.file_count(), 1);
}

#[test]
fn test_followed_symlink_indexed_as_target_kind() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("real/data.txt", "data")]);
    symlink(root.join("real"), root.join("alias")).unwrap();

    let index = TreeBuilder::new(root.to_path_buf())
        .with_walker_config(following())
        .build()
        .unwrap();

    let file = index
        .lookup_file(&[segment_id("alias"), segment_id("data.txt")])
        .unwrap();
    assert_eq!(file.content(), b"data");
    assert_eq!(index.file_count(), 2);
}

#[test]
fn test_dangling_symlink_fails_when_following() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    symlink(root.join("gone"), root.join("dangling")).unwrap();

    let result = TreeBuilder::new(root.to_path_buf())
        .with_walker_config(following())
        .build();
    assert!(matches!(result, Err(IndexError::Io { .. })));
}

#[test]
fn test_symlink_loop_fails_when_following() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("sub/", "")]);
    symlink(root, root.join("sub").join("up")).unwrap();

    let result = TreeBuilder::new(root.to_path_buf())
        .with_walker_config(following())
        .build();
    assert!(result.is_err());
}
