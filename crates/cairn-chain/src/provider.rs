use async_trait::async_trait;
use cairn_types::{Unit, Utxo};
use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Read boundary over a chain-indexing backend.
///
/// Every method is a single-shot request. The chain itself is the system
/// of record, so implementations should not cache across calls.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// All UTxOs sitting at an address.
    async fn utxos_at(&self, address: &str) -> Result<Vec<Utxo>, ChainError>;

    /// UTxOs at an address that hold at least one of `unit`.
    async fn utxos_at_with_unit(&self, address: &str, unit: &Unit)
        -> Result<Vec<Utxo>, ChainError>;

    /// The unique UTxO holding `unit`. Fails with [`ChainError::UnitNotFound`]
    /// when no UTxO carries it; units with supply above one are a caller bug.
    async fn utxo_by_unit(&self, unit: &Unit) -> Result<Utxo, ChainError>;
}

/// A CIP-8 signed message as returned by wallet backends: COSE key and
/// signature, both hex. Opaque to this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub key: String,
    pub signature: String,
}

/// Signing boundary over an external wallet.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// The wallet's own address.
    async fn address(&self) -> Result<String, ChainError>;

    /// Sign an arbitrary hex payload on behalf of `address`.
    async fn sign_message(&self, address: &str, payload: &str)
        -> Result<SignedMessage, ChainError>;
}
