//! Content-based storage keys for graph ids.

use sha2::{Digest, Sha256};

/// Directory-safe key for a graph id.
///
/// Graph ids are arbitrary strings, so they are hashed rather than used as
/// path components directly.
pub fn graph_key(graph_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(graph_id.as_bytes());
    format!("{:x}", hasher.finalize())
}
