use cairn_types::Assets;
use thiserror::Error;

/// Errors from UTxO selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtxoError {
    #[error("insufficient assets in the available UTxOs; still missing {missing:?}")]
    InsufficientAssets { missing: Assets },
}
