//! Integration tests for identifier determinism

use super::test_utils::write_tree;
use tempfile::TempDir;
use vfs_index::{Index, TreeBuilder};

const FIXTURE: &[(&str, &str)] = &[
    ("file1.txt", "content1"),
    ("file2.txt", "content2"),
    ("dir1/file3.txt", "content3"),
    ("dir1/dir2/file4.txt", "content4"),
    ("empty/", ""),
];

fn sorted_keys(index: &Index) -> Vec<String> {
    let mut keys: Vec<_> = index.walk().map(|(_, n)| n.id().full_key()).collect();
    keys.sort();
    keys
}

#[test]
fn test_same_filesystem_same_keys() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), FIXTURE);

    let builder = TreeBuilder::new(temp_dir.path().to_path_buf());
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(sorted_keys(&first), sorted_keys(&second));
}

#[test]
fn test_keys_independent_of_root_location() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let root_a = a.path().join("alpha");
    let root_b = b.path().join("nested").join("beta");
    write_tree(&root_a, FIXTURE);
    write_tree(&root_b, FIXTURE);

    let index_a = TreeBuilder::new(root_a).build().unwrap();
    let index_b = TreeBuilder::new(root_b).build().unwrap();

    assert_eq!(sorted_keys(&index_a), sorted_keys(&index_b));
}

#[test]
fn test_content_does_not_affect_keys() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), FIXTURE);
    let builder = TreeBuilder::new(temp_dir.path().to_path_buf());
    let before = builder.build().unwrap();

    write_tree(temp_dir.path(), &[("file1.txt", "changed")]);
    let after = builder.build().unwrap();

    assert_eq!(sorted_keys(&before), sorted_keys(&after));
    let path = vec![vfs_index::tree::hasher::segment_id("file1.txt")];
    assert_eq!(after.read(&path).unwrap().content, b"changed");
}
