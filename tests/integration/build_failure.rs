//! A build either indexes everything or fails

use super::test_utils::write_tree;
use tempfile::TempDir;
use vfs_index::{IndexError, MemorySource, TreeBuilder, WalkerConfig};

#[test]
fn test_unreadable_sibling_fails_build() {
    let source = MemorySource::new("root")
        .with_file("ok1.txt", "fine")
        .with_unreadable_file("locked.txt")
        .with_file("ok2.txt", "fine");

    let result = TreeBuilder::build_from(&source, &WalkerConfig::default());
    assert!(matches!(result, Err(IndexError::Io { .. })));
}

#[cfg(unix)]
#[test]
fn test_permission_denied_fails_build() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("a.txt", "hi"), ("secret.txt", "shh")]);
    let secret = temp_dir.path().join("secret.txt");
    std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode bits
    if std::fs::read(&secret).is_ok() {
        return;
    }

    let result = TreeBuilder::new(temp_dir.path().to_path_buf()).build();
    std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o644)).unwrap();

    match result {
        Err(IndexError::Io { path, .. }) => assert!(path.ends_with("secret.txt")),
        other => panic!("expected I/O failure, got {other:?}"),
    }
}

#[test]
fn test_missing_root_fails_build() {
    let temp_dir = TempDir::new().unwrap();
    let result = TreeBuilder::new(temp_dir.path().join("does-not-exist")).build();
    assert!(matches!(result, Err(IndexError::Io { .. })));
}

#[test]
fn test_file_root_fails_build() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("plain.txt", "x")]);
    let result = TreeBuilder::new(temp_dir.path().join("plain.txt")).build();
    assert!(matches!(result, Err(IndexError::InvalidRoot(_))));
}

#[test]
fn test_collision_fails_build() {
    let source = MemorySource::new("root")
        .with_dir("caf\u{e9}")
        .with_file("cafe\u{0301}", "decomposed");

    let result = TreeBuilder::build_from(&source, &WalkerConfig::default());
    assert!(matches!(
        result,
        Err(IndexError::IdentifierCollision { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_siblings_do_not_collide() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use vfs_index::tree::hasher;

    let temp_dir = TempDir::new().unwrap();
    let ff = OsStr::from_bytes(b"report\xff.txt");
    let fe = OsStr::from_bytes(b"report\xfe.txt");
    let written = std::fs::write(temp_dir.path().join(ff), "ff")
        .and_then(|_| std::fs::write(temp_dir.path().join(fe), "fe"));
    if written.is_err() {
        // Filesystem insists on UTF-8 names
        return;
    }

    let index = TreeBuilder::new(temp_dir.path().to_path_buf())
        .build()
        .unwrap();
    assert_eq!(index.file_count(), 2);

    for (raw, content) in [(ff, "ff"), (fe, "fe")] {
        let file = index.lookup_file(&[hasher::os_segment_id(raw)]).unwrap();
        assert_eq!(file.os_name(), raw);
        assert_eq!(file.content(), content.as_bytes());
        assert_eq!(file.name(), "report\u{FFFD}.txt");
    }
}
