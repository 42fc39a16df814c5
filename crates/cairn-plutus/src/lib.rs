//! Plutus Data model and on-chain datum schemas.
//!
//! On-chain validators see every datum and redeemer as a value of the
//! ledger's `Data` type: constructor-tagged records, maps, lists, integers,
//! and byte strings, carried over the wire as CBOR. This crate provides:
//!
//! - [`PlutusData`] — the data model plus a CBOR codec (encoding is total
//!   over in-range values; decoding is partial and reports which invariant
//!   was violated);
//! - [`ToPlutusData`] / [`FromPlutusData`] — the schema seam every domain
//!   record implements;
//! - the concrete datum schemas: credentials, addresses, asset classes,
//!   value maps, output references, directory nodes, protocol parameters,
//!   and the oracle record;
//! - [`parse_safe_datum`] — the defensive decode used when scanning chain
//!   UTxOs that may hold unrelated or corrupt datums.

pub mod data;
pub mod error;
pub mod oracle;
pub mod parse;
pub mod schema;

pub use data::PlutusData;
pub use error::DataError;
pub use oracle::OracleDatum;
pub use parse::parse_safe_datum;
pub use schema::{
    AddressDatum, DirectoryNodeDatum, FromPlutusData, OutputReference, ProtocolParametersDatum,
    StakeReference, ToPlutusData,
};
