//! # Content Hashing
//!
//! The digest function used for transaction ids, block ids and the state
//! digest. SHA-256 is treated as an opaque black box: callers only rely on
//! determinism and collision resistance.
//!
//! Structured values are never hashed through an ad hoc string join. They are
//! fed through [`CanonicalEncoder`], which length-prefixes every variable
//! sized field so that two different field sequences cannot produce the same
//! byte stream.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use std::fmt;
use thiserror::Error;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte content digest, rendered as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest([u8; DIGEST_LEN]);

/// Error returned when a hex string is not a valid digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestParseError {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Digest {
    /// All-zero sentinel used as the previous digest of the genesis block.
    pub const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from its 64-character hex rendering.
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        let bytes = hex::decode(s).map_err(|e| DigestParseError::InvalidHex(e.to_string()))?;
        let actual = bytes.len();
        let array: [u8; DIGEST_LEN] =
            bytes
                .try_into()
                .map_err(|_| DigestParseError::InvalidLength {
                    expected: DIGEST_LEN,
                    actual,
                })?;
        Ok(Self(array))
    }

    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 digest of a byte sequence.
#[inline]
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest(hasher.finalize().into())
}

/// Streaming canonical encoder feeding a SHA-256 hasher.
///
/// Integers are written little-endian at fixed width. Strings and byte
/// slices are prefixed with their length as a `u64`.
pub struct CanonicalEncoder {
    hasher: Sha256,
}

impl CanonicalEncoder {
    /// Create an encoder bound to a domain tag, so that a transaction and a
    /// block can never share an encoding.
    pub fn new(domain: &str) -> Self {
        let mut encoder = Self {
            hasher: Sha256::new(),
        };
        encoder.put_str(domain);
        encoder
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.hasher.update([value]);
        self
    }

    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.hasher.update(value.to_le_bytes());
        self
    }

    pub fn put_u128(&mut self, value: u128) -> &mut Self {
        self.hasher.update(value.to_le_bytes());
        self
    }

    pub fn put_bytes(&mut self, value: &[u8]) -> &mut Self {
        self.put_u64(value.len() as u64);
        self.hasher.update(value);
        self
    }

    pub fn put_str(&mut self, value: &str) -> &mut Self {
        self.put_bytes(value.as_bytes())
    }

    pub fn put_opt_str(&mut self, value: Option<&str>) -> &mut Self {
        match value {
            Some(s) => self.put_u8(1).put_str(s),
            None => self.put_u8(0),
        }
    }

    pub fn put_digest(&mut self, value: &Digest) -> &mut Self {
        self.hasher.update(value.0);
        self
    }

    pub fn put<T: CanonicalEncode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    pub fn finish(self) -> Digest {
        Digest(self.hasher.finalize().into())
    }
}

/// Types with a canonical byte encoding for content addressing.
pub trait CanonicalEncode {
    fn encode(&self, encoder: &mut CanonicalEncoder);
}
