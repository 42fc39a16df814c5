//! Foundation types for Cairn.
//!
//! This crate provides the value types shared by every other Cairn crate:
//! fixed-length chain hashes, native credentials, multi-asset values, and
//! UTxO records. Everything here is a plain value reconstructed fresh from
//! chain state on every read; there is no cache and no persisted store.
//!
//! # Key Types
//!
//! - [`Hash28`] — 28-byte hash (policy ids, key hashes, script hashes)
//! - [`TxHash`] — 32-byte transaction hash
//! - [`Credential`] — key or script credential
//! - [`Unit`] — asset unit identifier (lovelace or policy + name)
//! - [`Assets`] — ordered unit → quantity map with set-style arithmetic
//! - [`OutRef`] / [`Utxo`] — transaction output identity and contents
//! - [`ReadableUtxo`] — a UTxO paired with its decoded datum

pub mod asset;
pub mod credential;
pub mod error;
pub mod hash;
pub mod utxo;

pub use asset::{AssetClass, AssetName, Assets, Unit};
pub use credential::Credential;
pub use error::TypeError;
pub use hash::{Hash28, KeyHash, PolicyId, ScriptHash, TxHash};
pub use utxo::{OutRef, ReadableUtxo, Utxo};
