//! CIP-68 token naming for Cairn.
//!
//! CIP-68 pairs every minted asset with a reference token that carries its
//! on-chain metadata. Both names share a content-derived 32-byte body and
//! differ only in a reserved 4-byte label prefix. The body hashes the
//! minting UTxO's identity, so names are unguessable before the UTxO
//! exists — which is what prevents name-collision attacks on the policy.
//!
//! - [`unique_asset_name`] / [`cip68_token_names`] — derivation
//! - [`find_cip68_token_names`] / [`token_name_from_utxos`] — discovery in
//!   a fetched UTxO set

pub mod error;
pub mod find;
pub mod name;

pub use error::TokenError;
pub use find::{find_cip68_token_names, token_name_from_utxos};
pub use name::{cip68_token_names, unique_asset_name, Label, TokenNamePair};
