use cairn_types::{AssetName, PolicyId, Utxo};

use crate::error::TokenError;
use crate::name::{Label, TokenNamePair};

/// Locate the CIP-68 reference/user token names under `policy` within a
/// UTxO set.
///
/// Scans every asset entry whose unit is under the policy and classifies
/// it by label prefix. The scan stops as soon as both names are found;
/// if either is still missing after all UTxOs have been examined, the
/// pair is reported as absent.
pub fn find_cip68_token_names(
    utxos: &[Utxo],
    policy: &PolicyId,
) -> Result<TokenNamePair, TokenError> {
    let mut reference: Option<AssetName> = None;
    let mut user: Option<AssetName> = None;

    for utxo in utxos {
        for (unit, _) in utxo.assets.iter() {
            if unit.policy() != Some(policy) {
                continue;
            }
            let Some(name) = unit.name() else { continue };
            if name.has_prefix(Label::REFERENCE.as_bytes()) {
                reference = Some(name.clone());
            } else if name.has_prefix(Label::USER.as_bytes()) {
                user = Some(name.clone());
            }
        }
        if reference.is_some() && user.is_some() {
            break;
        }
    }

    match (reference, user) {
        (Some(reference), Some(user)) => Ok(TokenNamePair { reference, user }),
        _ => Err(TokenError::PairNotFound {
            policy: policy.to_hex(),
        }),
    }
}

/// The name of the first asset under `policy` held with quantity exactly
/// one — the NFT heuristic.
///
/// This is a query, not an assertion: `None` simply means no such asset
/// is present in the given UTxOs.
pub fn token_name_from_utxos(utxos: &[Utxo], policy: &PolicyId) -> Option<AssetName> {
    for utxo in utxos {
        for (unit, quantity) in utxo.assets.iter() {
            if *quantity == 1 && unit.policy() == Some(policy) {
                return unit.name().cloned();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use cairn_types::{Assets, Hash28, OutRef, TxHash, Unit};

    use super::*;
    use crate::name::cip68_token_names;

    fn policy(byte: u8) -> PolicyId {
        Hash28::from_raw([byte; 28])
    }

    fn utxo_with(assets: Assets) -> Utxo {
        Utxo::new(
            OutRef::new(TxHash::from_raw([0u8; 32]), 0),
            "addr_test1example",
            assets,
        )
    }

    #[test]
    fn finds_both_names_across_utxos() {
        let p = policy(1);
        let pair = cip68_token_names(&OutRef::new(TxHash::from_raw([9u8; 32]), 1));

        let holding_ref = utxo_with(Assets::from_iter([(
            Unit::asset(p, pair.reference.clone()),
            1,
        )]));
        let holding_user = utxo_with(Assets::from_iter([(Unit::asset(p, pair.user.clone()), 1)]));

        let found = find_cip68_token_names(&[holding_ref, holding_user], &p).unwrap();
        assert_eq!(found, pair);
    }

    #[test]
    fn fails_when_user_token_is_missing() {
        let p = policy(1);
        let pair = cip68_token_names(&OutRef::new(TxHash::from_raw([9u8; 32]), 1));
        let holding_ref = utxo_with(Assets::from_iter([(Unit::asset(p, pair.reference), 1)]));

        assert!(matches!(
            find_cip68_token_names(&[holding_ref], &p),
            Err(TokenError::PairNotFound { .. })
        ));
    }

    #[test]
    fn ignores_foreign_policies() {
        let p = policy(1);
        let foreign = policy(2);
        let pair = cip68_token_names(&OutRef::new(TxHash::from_raw([9u8; 32]), 1));
        let utxo = utxo_with(Assets::from_iter([
            (Unit::asset(foreign, pair.reference), 1),
            (Unit::asset(foreign, pair.user), 1),
        ]));

        assert!(find_cip68_token_names(&[utxo], &p).is_err());
    }

    #[test]
    fn nft_heuristic_skips_fungible_quantities() {
        let p = policy(1);
        let nft_name = AssetName::from_text("unique").unwrap();
        let utxo = utxo_with(Assets::from_iter([
            (Unit::asset(p, AssetName::from_text("supply").unwrap()), 500),
            (Unit::asset(p, nft_name.clone()), 1),
        ]));

        assert_eq!(token_name_from_utxos(&[utxo], &p), Some(nft_name));
    }

    #[test]
    fn nft_heuristic_returns_none_when_absent() {
        let p = policy(1);
        let utxo = utxo_with(Assets::from_lovelace(5_000_000));
        assert_eq!(token_name_from_utxos(&[utxo], &p), None);
    }
}
