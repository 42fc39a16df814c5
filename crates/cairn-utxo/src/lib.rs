//! UTxO selection and aggregation for Cairn.
//!
//! On-chain scripts reason about transaction inputs by position, and the
//! ledger orders inputs canonically by `(transaction hash, output index)`
//! before finalizing. This crate keeps the offchain view consistent with
//! that rule: selection, summing, sorting, and the position-index
//! computations that redeemers embed.

pub mod error;
pub mod order;
pub mod redeemer;
pub mod select;

pub use error::UtxoError;
pub use order::{input_utxo_indices, sort_utxos_by_out_ref};
pub use redeemer::{freeze_redeemer, transfer_redeemer, SelectionCriteria, TransferRedeemerParams};
pub use select::{select_utxos, sum_utxo_assets};
