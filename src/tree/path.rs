//! Path and segment-name normalization

use crate::error::IndexError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize the traversal root
///
/// Resolves `..`, `.`, and symlinks so the root's own segment name is stable
/// regardless of how the caller spelled the path.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, IndexError> {
    dunce::canonicalize(path).map_err(|e| IndexError::io(path, e))
}

/// Bare segment name of a path (its last component), as the OS spells it
///
/// Filesystem roots such as `/` have no file name; the whole path is used.
pub fn segment_os_name(path: &Path) -> OsString {
    match path.file_name() {
        Some(name) => name.to_os_string(),
        None => path.as_os_str().to_os_string(),
    }
}

/// Printable form of [`segment_os_name`]
pub fn segment_name(path: &Path) -> String {
    display_name(&segment_os_name(path))
}

/// Printable form of a segment name; invalid UTF-8 is replaced
pub fn display_name(segment: &OsStr) -> String {
    segment.to_string_lossy().into_owned()
}

/// Normalize a segment name to Unicode NFC
pub fn normalize_segment(segment: &str) -> String {
    segment.nfc().collect()
}

/// Reject anything that is not a single path segment
pub fn validate_segment(segment: &str) -> Result<(), IndexError> {
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(IndexError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

/// [`validate_segment`] for OS-native names
pub fn validate_os_segment(segment: &OsStr) -> Result<(), IndexError> {
    validate_segment(&segment.to_string_lossy())
}
