use cairn_types::{Assets, Utxo};

use crate::error::UtxoError;

/// Select UTxOs whose combined assets cover `min_assets`.
///
/// First-fit in input order: UTxOs are accumulated until the running sum
/// covers every required quantity, then the selection stops. No attempt
/// is made at a minimal subset — optimal selection is a subset-sum
/// problem, and downstream change handling depends on this exact
/// accumulation behavior.
pub fn select_utxos(utxos: &[Utxo], min_assets: &Assets) -> Result<Vec<Utxo>, UtxoError> {
    let mut selected = Vec::new();
    let mut total = Assets::new();

    if total.covers(min_assets) {
        return Ok(selected);
    }
    for utxo in utxos {
        total = total.union(&utxo.assets);
        selected.push(utxo.clone());
        if total.covers(min_assets) {
            return Ok(selected);
        }
    }
    Err(UtxoError::InsufficientAssets {
        missing: min_assets.remove(&total),
    })
}

/// Combined assets of a UTxO set.
pub fn sum_utxo_assets(utxos: &[Utxo]) -> Assets {
    utxos
        .iter()
        .fold(Assets::new(), |acc, utxo| acc.union(&utxo.assets))
}
