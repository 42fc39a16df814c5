use thiserror::Error;

/// Errors produced by type constructors and parsers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("asset name too long: {len} bytes exceeds the 32-byte limit")]
    AssetNameTooLong { len: usize },

    #[error("invalid asset unit: {0}")]
    InvalidUnit(String),
}
