//! Magic-byte classification of recovered payloads.
//!
//! Purely advisory: a misclassification changes the suggested file
//! extension, never the recovered bytes.

use crate::config::DEFAULT_EXTENSION;

/// Ordered signature table, tested in sequence; first match wins.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"PK\x03\x04", "zip"),
    (b"\x89PNG", "png"),
    (b"\xFF\xD8\xFF", "jpg"),
    (b"%PDF", "pdf"),
    (b"PK", "zip"),
];

/// Pick an output extension from the payload's leading bytes.
pub fn classify(data: &[u8]) -> &'static str {
    SIGNATURES
        .iter()
        .find(|(prefix, _)| data.starts_with(prefix))
        .map(|&(_, ext)| ext)
        .unwrap_or(DEFAULT_EXTENSION)
}
