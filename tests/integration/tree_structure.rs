//! Integration tests for index structure and key linkage

use super::test_utils::{write_scenario, write_tree};
use std::fs;
use tempfile::TempDir;
use vfs_index::tree::hasher::segment_id;
use vfs_index::{Index, Node, TreeBuilder, ROOT_ID};

#[test]
fn test_scenario_lookups() {
    let temp_dir = TempDir::new().unwrap();
    write_scenario(temp_dir.path());

    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    let mut root_entries: Vec<_> = index
        .list::<&str>(&[])
        .unwrap()
        .into_iter()
        .map(|e| (e.name, e.is_dir))
        .collect();
    root_entries.sort();
    assert_eq!(
        root_entries,
        vec![("a.txt".to_string(), false), ("sub".to_string(), true)]
    );

    let sub = index.lookup_directory(&[segment_id("sub")]).unwrap();
    let sub_names: Vec<_> = index.children(sub).map(|n| n.name()).collect();
    assert_eq!(sub_names, vec!["b.txt"]);

    let b = index
        .lookup_file(&[segment_id("sub"), segment_id("b.txt")])
        .unwrap();
    assert_eq!(b.content(), b"yo");

    let a = index.read(&[segment_id("a.txt")]).unwrap();
    assert_eq!(a.content, b"hi");
}

#[test]
fn test_empty_root() {
    let temp_dir = TempDir::new().unwrap();

    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    let root = index.lookup_directory::<&str>(&[]).unwrap();
    assert!(root.is_empty());
    assert_eq!(index.directory_count(), 1);
    assert_eq!(index.file_count(), 0);
    assert_eq!(index.list::<&str>(&[]).unwrap(), vec![]);
}

#[test]
fn test_root_key_is_sentinel_for_any_root_name() {
    let temp_dir = TempDir::new().unwrap();
    // A root several separators deep, with a name unrelated to the sentinel
    let root = temp_dir.path().join("srv").join("share").join("media");
    write_scenario(&root);

    let index = TreeBuilder::new(root.clone()).build().unwrap();

    assert_eq!(index.root().name(), "media");
    assert_eq!(index.root().id().full_key(), ROOT_ID);
    assert_eq!(index.root().child_indices().len(), 2);
    assert!(index
        .lookup_file(&[segment_id("sub"), segment_id("b.txt")])
        .is_some());
}

#[test]
fn test_root_spelled_with_dot_segments() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_scenario(&root);
    fs::create_dir(temp_dir.path().join("other")).unwrap();

    let odd = temp_dir.path().join("other").join("..").join("tree").join(".");
    let index = TreeBuilder::new(odd).build().unwrap();

    assert_eq!(index.root().name(), "tree");
    assert_eq!(index.file_count(), 2);
}

#[test]
fn test_ancestor_key_equals_parent_full_key() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("a.txt", "a"),
            ("x/y/z/deep.txt", "deep"),
            ("x/y/sibling.txt", "s"),
            ("x/empty/", ""),
            ("w/file", "w"),
        ],
    );

    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    let mut checked = 0;
    for (_, node) in index.walk() {
        if let Node::Directory(dir) = node {
            for child in index.children(dir) {
                assert_eq!(child.id().ancestor_key(), dir.id().full_key());
                checked += 1;
            }
        }
    }
    // every node but the root is some directory's child
    assert_eq!(checked, index.directory_count() + index.file_count() - 1);
}

#[test]
fn test_missing_paths_are_absent() {
    let temp_dir = TempDir::new().unwrap();
    write_scenario(temp_dir.path());
    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    assert!(index.lookup_directory(&[segment_id("nope")]).is_none());
    assert!(index.lookup_file(&[segment_id("b.txt")]).is_none());
    assert!(index
        .lookup_file(&[segment_id("sub"), segment_id("b.txt"), segment_id("x")])
        .is_none());
    assert!(index.list(&[segment_id("a.txt")]).is_none());
    assert!(index.read::<&str>(&[]).is_none());
    assert!(index.directory_by_key("garbage").is_none());
    assert_eq!(Index::query_key::<&str>(&[]), ROOT_ID);
}
