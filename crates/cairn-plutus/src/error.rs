use cairn_types::TypeError;
use thiserror::Error;

/// Decode failures for Plutus Data and datum schemas.
///
/// These are ordinary error values, never panics: scanning chain state
/// routinely encounters datums that belong to other protocols, and callers
/// decide whether a failed decode means "skip" or "abort".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("no datum attached to the output")]
    AbsentDatum,

    #[error("malformed CBOR: {0}")]
    Cbor(String),

    #[error("unsupported CBOR item for Plutus Data: {0}")]
    UnsupportedItem(String),

    #[error("integer out of CBOR range: {0}")]
    IntegerOutOfRange(i128),

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unexpected constructor tag: expected {expected}, found {found}")]
    UnexpectedTag { expected: u64, found: u64 },

    #[error("constructor tag {0} matches no known variant")]
    UnknownVariant(u64),

    #[error("wrong field count: expected {expected}, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("wrong byte length: expected {expected}, found {found}")]
    WrongByteLength { expected: usize, found: usize },

    #[error(transparent)]
    Type(#[from] TypeError),
}
