use std::sync::RwLock;

use async_trait::async_trait;
use cairn_types::{Unit, Utxo};

use crate::error::ChainError;
use crate::provider::{ChainProvider, SignedMessage, Wallet};

/// In-memory chain state for tests, local demos, and embedding.
///
/// Holds a flat UTxO set behind a lock; address and unit queries scan it.
/// There is no ledger validation here, callers place whatever UTxOs the
/// scenario needs.
#[derive(Default)]
pub struct MemoryProvider {
    inner: RwLock<Vec<Utxo>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a UTxO to the set.
    pub fn put(&self, utxo: Utxo) {
        self.inner.write().expect("utxo set lock poisoned").push(utxo);
    }

    /// Remove a UTxO by out ref, as a spend would. Returns whether it
    /// was present.
    pub fn spend(&self, utxo: &Utxo) -> bool {
        let mut set = self.inner.write().expect("utxo set lock poisoned");
        let before = set.len();
        set.retain(|held| held.out_ref != utxo.out_ref);
        set.len() < before
    }

    fn snapshot(&self) -> Vec<Utxo> {
        self.inner.read().expect("utxo set lock poisoned").clone()
    }
}

#[async_trait]
impl ChainProvider for MemoryProvider {
    async fn utxos_at(&self, address: &str) -> Result<Vec<Utxo>, ChainError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|utxo| utxo.address == address)
            .collect())
    }

    async fn utxos_at_with_unit(
        &self,
        address: &str,
        unit: &Unit,
    ) -> Result<Vec<Utxo>, ChainError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|utxo| utxo.address == address && utxo.assets.get(unit) > 0)
            .collect())
    }

    async fn utxo_by_unit(&self, unit: &Unit) -> Result<Utxo, ChainError> {
        self.snapshot()
            .into_iter()
            .find(|utxo| utxo.assets.get(unit) > 0)
            .ok_or_else(|| ChainError::UnitNotFound {
                unit: unit.to_string(),
            })
    }
}

/// A wallet that signs by echoing the payload. The signature carries no
/// cryptographic weight; it only lets tests assert the signing flow.
pub struct MemoryWallet {
    address: String,
}

impl MemoryWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl Wallet for MemoryWallet {
    async fn address(&self) -> Result<String, ChainError> {
        Ok(self.address.clone())
    }

    async fn sign_message(
        &self,
        address: &str,
        payload: &str,
    ) -> Result<SignedMessage, ChainError> {
        Ok(SignedMessage {
            key: hex::encode(address.as_bytes()),
            signature: payload.to_string(),
        })
    }
}
