//! Async boundary between Cairn and the chain.
//!
//! Offchain code consumes two external capabilities: a chain-indexing
//! backend ([`ChainProvider`]) and a signing wallet ([`Wallet`]). Both are
//! trait objects so deployments can plug in whatever backend they run
//! against; [`MemoryProvider`] and [`MemoryWallet`] cover tests and
//! emulator-style embedding. On top of the provider sit the script-address
//! queries and the oracle signing flow.

pub mod constants;
pub mod error;
pub mod memory;
pub mod oracle;
pub mod provider;
pub mod query;

pub use error::ChainError;
pub use memory::{MemoryProvider, MemoryWallet};
pub use oracle::{oracle_token_name, sign_oracle_data, OracleSignature};
pub use provider::{ChainProvider, SignedMessage, Wallet};
pub use query::{parse_utxos_at_script, utxos_at_address_with_policy_id};
