use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset::Assets;
use crate::error::TypeError;
use crate::hash::TxHash;

/// Transaction output reference: originating transaction hash plus output
/// index.
///
/// The derived ordering (hash bytes lexicographic, then index) is the
/// canonical input ordering used by the ledger when finalizing a
/// transaction. Index computations in `cairn-utxo` rely on it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OutRef {
    pub tx_hash: TxHash,
    pub index: u64,
}

impl OutRef {
    pub fn new(tx_hash: TxHash, index: u64) -> Self {
        Self { tx_hash, index }
    }

    /// Parse from the `txhash#index` form.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let (hash, index) = s
            .split_once('#')
            .ok_or_else(|| TypeError::InvalidHex(format!("missing '#' in out ref: {s}")))?;
        let tx_hash = TxHash::from_hex(hash)?;
        let index = index
            .parse()
            .map_err(|_| TypeError::InvalidHex(format!("bad output index: {index}")))?;
        Ok(Self { tx_hash, index })
    }
}

impl fmt::Display for OutRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tx_hash, self.index)
    }
}

/// A spendable transaction output as returned by a chain provider.
///
/// The address stays in the provider's bech32 form; Cairn never needs to
/// deconstruct it. `datum` holds the raw inline datum CBOR when present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub out_ref: OutRef,
    pub address: String,
    pub assets: Assets,
    pub datum: Option<Vec<u8>>,
}

impl Utxo {
    pub fn new(out_ref: OutRef, address: impl Into<String>, assets: Assets) -> Self {
        Self {
            out_ref,
            address: address.into(),
            assets,
            datum: None,
        }
    }

    pub fn with_datum(mut self, datum: Vec<u8>) -> Self {
        self.datum = Some(datum);
        self
    }
}

/// A UTxO whose datum has been decoded as `T`.
///
/// Owned transiently per query; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadableUtxo<T> {
    pub out_ref: OutRef,
    pub assets: Assets,
    pub datum: T,
}
