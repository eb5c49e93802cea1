//! Content Digests - SHA-256 of Rendered Markup
//!
//! Rendering is deterministic, so the digest of the markup identifies a
//! picture. The server uses it as the `ETag`.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Quoted entity tag for a rendered document.
pub fn etag(markup: &str) -> String {
    format!("\"{}\"", sha256_hex(markup.as_bytes()))
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
