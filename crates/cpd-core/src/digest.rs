//! # Content Digest
//!
//! SHA-256 digests over the JSON serialization of engine values. The audit
//! report footer carries the digest of the reported record set so that a
//! submitted report can be matched against the data it was produced from.
//!
//! Struct fields serialize in declaration order and timestamps serialize in
//! a single fixed form, so equal record sets always produce equal digests.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CpdResult;

/// A SHA-256 content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 digest of raw bytes.
pub fn sha256_digest(data: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest { bytes }
}

/// Serialize `value` to compact JSON and digest the bytes.
pub fn digest_json<T: Serialize + ?Sized>(value: &T) -> CpdResult<ContentDigest> {
    let bytes = serde_json::to_vec(value)?;
    Ok(sha256_digest(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sha256_vector() {
        // SHA256("{}")
        let digest = sha256_digest(b"{}");
        assert_eq!(
            digest.to_hex(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn display_is_prefixed() {
        let s = sha256_digest(b"abc").to_string();
        assert!(s.starts_with("sha256:"));
        assert_eq!(s.len(), 7 + 64);
    }

    #[test]
    fn json_digest_deterministic() {
        let value = serde_json::json!({"id": "r1", "hours": 1.5});
        assert_eq!(digest_json(&value).unwrap(), digest_json(&value).unwrap());
        let other = serde_json::json!({"id": "r1", "hours": 2.0});
        assert_ne!(digest_json(&value).unwrap(), digest_json(&other).unwrap());
    }
}
