//! Every node discovered by walking child lists is reachable by key

use super::test_utils::write_tree;
use tempfile::TempDir;
use vfs_index::{Node, TreeBuilder};

#[test]
fn test_walk_and_lookup_agree() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("readme.md", "# hi"),
            ("src/main.rs", "fn main() {}"),
            ("src/lib/mod.rs", "pub mod x;"),
            ("src/lib/x.rs", ""),
            ("assets/img/", ""),
            ("assets/logo.svg", "<svg/>"),
        ],
    );

    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    let mut visited = 0;
    for (depth, node) in index.walk() {
        let path = node.id().query_path();
        assert_eq!(path.len(), depth);

        match node {
            Node::Directory(dir) => {
                let found = index.lookup_directory(&path).unwrap();
                assert!(std::ptr::eq(found, dir));
            }
            Node::File(file) => {
                let found = index.lookup_file(&path).unwrap();
                assert!(std::ptr::eq(found, file));
            }
        }
        visited += 1;
    }

    assert_eq!(visited, index.directory_count() + index.file_count());
}

#[test]
fn test_listing_ids_extend_paths() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a/b/c/d.txt", "leaf")]);

    let index = TreeBuilder::new(temp_dir.path().to_path_buf()).build().unwrap();

    // Browse one level at a time using only listing ids, like a remote client
    let mut path: Vec<String> = Vec::new();
    loop {
        let entries = index.list(&path).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        path.push(entry.id.clone());
        if !entry.is_dir {
            break;
        }
    }

    assert_eq!(path.len(), 4);
    assert_eq!(index.read(&path).unwrap().content, b"leaf");
}
