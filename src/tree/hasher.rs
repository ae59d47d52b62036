//! Segment hashing using BLAKE3

use crate::tree::path;
use blake3::Hasher;
use std::ffi::OsStr;

/// Raw 32-byte BLAKE3 digest
pub type Hash = [u8; 32];

/// Hash a segment name
///
/// The name is NFC-normalized first, so composed and decomposed spellings
/// hash identically. This is the raw primitive and hashes whatever it is
/// given; [`crate::tree::id::identify`] is the checked entry point that
/// rejects multi-segment names.
pub fn hash_segment(segment: &str) -> Hash {
    let normalized = path::normalize_segment(segment);
    hash_bytes(normalized.as_bytes())
}

/// Hash an OS-native segment name
///
/// UTF-8 names hash exactly as [`hash_segment`]. Other names hash their raw
/// encoded bytes, so distinct names never meet through lossy conversion.
pub fn hash_os_segment(segment: &OsStr) -> Hash {
    match segment.to_str() {
        Some(name) => hash_segment(name),
        None => hash_bytes(segment.as_encoded_bytes()),
    }
}

fn hash_bytes(bytes: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    *hasher.finalize().as_bytes()
}

/// Hex-encoded segment hash, the form used inside composite keys
pub fn segment_id(segment: &str) -> String {
    hex::encode(hash_segment(segment))
}

/// Hex-encoded hash of an OS-native segment name
pub fn os_segment_id(segment: &OsStr) -> String {
    hex::encode(hash_os_segment(segment))
}
