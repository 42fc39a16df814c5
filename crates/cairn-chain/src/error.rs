use cairn_plutus::DataError;
use cairn_types::TypeError;
use thiserror::Error;

/// Errors from the chain boundary.
///
/// Provider and wallet failures pass through as [`ChainError::Provider`]
/// with the backend's own message; nothing is retried at this level.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("no UTxO holds unit {unit}")]
    UnitNotFound { unit: String },

    #[error("no UTxOs found at {address}")]
    NoUtxosAt { address: String },

    #[error("datum decode failed: {0}")]
    Data(#[from] DataError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("provider failure: {0}")]
    Provider(String),
}

impl ChainError {
    /// Wrap an arbitrary backend failure.
    pub fn provider(err: impl std::fmt::Display) -> Self {
        ChainError::Provider(err.to_string())
    }
}
