use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// 28-byte hash used for policy ids and payment/stake credentials.
///
/// Cardano identifies minting policies, key holders, and scripts by a
/// 28-byte (224-bit) hash. The wrapper keeps the length invariant in the
/// type so downstream encoders never need to re-validate it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash28([u8; 28]);

/// Minting policy identifier.
pub type PolicyId = Hash28;
/// Payment key hash.
pub type KeyHash = Hash28;
/// Script hash.
pub type ScriptHash = Hash28;

impl Hash28 {
    pub const LEN: usize = 28;

    /// Create from raw bytes.
    pub fn from_raw(bytes: [u8; 28]) -> Self {
        Self(bytes)
    }

    /// Parse from a 56-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Create from a byte slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != Self::LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 28];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// The raw 28 bytes.
    pub fn as_bytes(&self) -> &[u8; 28] {
        &self.0
    }

    /// Full hex-encoded string (56 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Hash28 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash28({})", self.to_hex())
    }
}

impl fmt::Display for Hash28 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// 32-byte transaction hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxHash([u8; 32]);

impl TxHash {
    pub const LEN: usize = 32;

    /// Create from raw bytes.
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Create from a byte slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != Self::LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full hex-encoded string (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", self.to_hex())
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
