//! Content fingerprints
//!
//! Provides [`ContentHash`], a 32-byte Blake3 digest used to identify the
//! exact file set a preview was rendered from.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte content hash (Blake3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash a single byte string
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Short representation (first 16 hex chars), used in log lines
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ContentHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| HashError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl serde::Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ContentHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Incremental fingerprint over an ordered sequence of `(path, content)` pairs
///
/// Each field is length-prefixed so that `("ab", "c")` and `("a", "bc")`
/// never collide.
#[derive(Debug, Default)]
pub struct FingerprintBuilder {
    hasher: blake3::Hasher,
}

impl FingerprintBuilder {
    /// Start an empty fingerprint
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one file entry
    pub fn entry(&mut self, path: &str, content: &str) -> &mut Self {
        for field in [path, content] {
            self.hasher.update(&(field.len() as u64).to_le_bytes());
            self.hasher.update(field.as_bytes());
        }
        self
    }

    /// Finish and return the digest
    #[must_use]
    pub fn finish(&self) -> ContentHash {
        ContentHash(*self.hasher.finalize().as_bytes())
    }
}

/// Errors that can occur when decoding content hashes
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Invalid hash length
    #[error("invalid hash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required byte length
        expected: usize,
        /// Decoded byte length
        actual: usize,
    },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        assert_eq!(ContentHash::compute(b"index.html"), ContentHash::compute(b"index.html"));
        assert_ne!(ContentHash::compute(b"a"), ContentHash::compute(b"b"));
    }

    #[test]
    fn display_and_parse() {
        let hash = ContentHash::compute(b"src/App.jsx");
        let parsed: ContentHash = hash.to_string().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let result = "abcd".parse::<ContentHash>();
        assert!(matches!(result, Err(HashError::InvalidLength { expected: 32, actual: 2 })));
    }

    #[test]
    fn short_is_prefix() {
        let hash = ContentHash::compute(b"x");
        assert_eq!(hash.short().len(), 16);
        assert!(hash.to_string().starts_with(&hash.short()));
    }

    #[test]
    fn fingerprint_is_boundary_sensitive() {
        let a = FingerprintBuilder::new().entry("ab", "c").finish();
        let b = FingerprintBuilder::new().entry("a", "bc").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_is_order_sensitive() {
        let a = FingerprintBuilder::new().entry("a", "1").entry("b", "2").finish();
        let b = FingerprintBuilder::new().entry("b", "2").entry("a", "1").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn serde_uses_hex_string() {
        let hash = ContentHash::compute(b"test");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json.len(), 66);
        let decoded: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, decoded);
    }
}
