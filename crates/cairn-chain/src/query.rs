use cairn_plutus::{parse_safe_datum, FromPlutusData};
use cairn_types::{PolicyId, ReadableUtxo, Utxo};
use tracing::debug;

use crate::error::ChainError;
use crate::provider::ChainProvider;

/// Fetch every UTxO at a script address and decode each datum as `T`.
///
/// A script address can accumulate UTxOs with foreign or malformed datums;
/// those are dropped rather than failing the whole query. Each drop is
/// logged at debug level with its out ref.
pub async fn parse_utxos_at_script<T: FromPlutusData>(
    provider: &dyn ChainProvider,
    address: &str,
) -> Result<Vec<ReadableUtxo<T>>, ChainError> {
    let utxos = provider.utxos_at(address).await?;
    debug!(address, count = utxos.len(), "scanning script UTxOs");

    let mut readable = Vec::new();
    for utxo in utxos {
        match parse_safe_datum::<T>(utxo.datum.as_deref()) {
            Ok(datum) => readable.push(ReadableUtxo {
                out_ref: utxo.out_ref,
                assets: utxo.assets,
                datum,
            }),
            Err(err) => {
                debug!(out_ref = %utxo.out_ref, %err, "dropping UTxO with undecodable datum");
            }
        }
    }
    Ok(readable)
}

/// UTxOs at an address that carry at least one asset under `policy`.
pub async fn utxos_at_address_with_policy_id(
    provider: &dyn ChainProvider,
    address: &str,
    policy: &PolicyId,
) -> Result<Vec<Utxo>, ChainError> {
    let utxos = provider.utxos_at(address).await?;
    Ok(utxos
        .into_iter()
        .filter(|utxo| !utxo.assets.filter_policy(policy).is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use cairn_plutus::{DirectoryNodeDatum, PlutusData, ToPlutusData};
    use cairn_types::{AssetName, Assets, Credential, Hash28, OutRef, TxHash, Unit};

    use super::*;
    use crate::memory::MemoryProvider;

    const SCRIPT_ADDR: &str = "addr_test1directory";

    fn node_utxo(index: u64, key: &[u8], next_key: &[u8]) -> Utxo {
        let datum = DirectoryNodeDatum {
            key: key.to_vec(),
            next_key: next_key.to_vec(),
            transfer_logic: Credential::Script(Hash28::from_raw([1; 28])),
            issuer_logic: Credential::Script(Hash28::from_raw([2; 28])),
        };
        Utxo::new(
            OutRef::new(TxHash::from_raw([0xaa; 32]), index),
            SCRIPT_ADDR,
            Assets::from_lovelace(2_000_000),
        )
        .with_datum(datum.to_plutus_data().to_bytes().unwrap())
    }

    #[tokio::test]
    async fn decodes_script_datums_and_drops_the_rest() {
        let provider = MemoryProvider::new();
        provider.put(node_utxo(0, b"a", b"b"));
        provider.put(node_utxo(1, b"b", b"c"));
        // Foreign datum, bare UTxO, and a datum that is not even CBOR.
        provider.put(
            Utxo::new(
                OutRef::new(TxHash::from_raw([0xbb; 32]), 0),
                SCRIPT_ADDR,
                Assets::from_lovelace(1),
            )
            .with_datum(PlutusData::int(42).to_bytes().unwrap()),
        );
        provider.put(Utxo::new(
            OutRef::new(TxHash::from_raw([0xcc; 32]), 0),
            SCRIPT_ADDR,
            Assets::from_lovelace(1),
        ));
        provider.put(
            Utxo::new(
                OutRef::new(TxHash::from_raw([0xdd; 32]), 0),
                SCRIPT_ADDR,
                Assets::from_lovelace(1),
            )
            .with_datum(vec![0xff]),
        );

        let nodes = parse_utxos_at_script::<DirectoryNodeDatum>(&provider, SCRIPT_ADDR)
            .await
            .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].datum.key, b"a");
        assert_eq!(nodes[1].datum.key, b"b");
    }

    #[tokio::test]
    async fn policy_filter_keeps_only_carrying_utxos() {
        let policy = Hash28::from_raw([9; 28]);
        let unit = Unit::asset(policy, AssetName::from_text("tok").unwrap());

        let provider = MemoryProvider::new();
        let mut carrying = Utxo::new(
            OutRef::new(TxHash::from_raw([1; 32]), 0),
            SCRIPT_ADDR,
            Assets::from_lovelace(1),
        );
        carrying.assets.add(unit, 1);
        provider.put(carrying.clone());
        provider.put(Utxo::new(
            OutRef::new(TxHash::from_raw([2; 32]), 0),
            SCRIPT_ADDR,
            Assets::from_lovelace(1),
        ));

        let found = utxos_at_address_with_policy_id(&provider, SCRIPT_ADDR, &policy)
            .await
            .unwrap();
        assert_eq!(found, vec![carrying]);
    }
}
