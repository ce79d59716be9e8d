//! Content hashing with domain separation.
//!
//! Every digest in the workspace is `sha256(domain_prefix || data)`, rendered
//! as `"sha256:<hex>"`. Domain prefixes are null-terminated so that no prefix
//! is a prefix of another.

use sha2::{Digest, Sha256};

/// Domain prefix for grid fingerprints.
pub const DOMAIN_GRID: &[u8] = b"WAYFINDER::GRID::V1\0";

const ALGORITHM: &str = "sha256";

/// A domain-separated content hash, formatted `"sha256:<hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("{ALGORITHM}:{}", hex::encode(hasher.finalize())))
}
