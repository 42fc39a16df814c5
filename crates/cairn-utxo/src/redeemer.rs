use cairn_plutus::PlutusData;
use cairn_types::Utxo;

use crate::order::sort_utxos_by_out_ref;

/// Criteria over a UTxO, used to pick which entries a redeemer indexes.
pub type SelectionCriteria<'a> = &'a dyn Fn(&Utxo) -> bool;

/// Redeemer for the freeze validator: a constructor carrying the
/// positions of the blacklist reference inputs.
pub fn freeze_redeemer(ref_indices: &[u64]) -> PlutusData {
    PlutusData::constr(
        0,
        vec![PlutusData::List(
            ref_indices.iter().map(|i| PlutusData::int(*i)).collect(),
        )],
    )
}

/// Inputs to [`transfer_redeemer`].
///
/// Reference inputs are mandatory; spend inputs and outputs are indexed
/// only when provided. A missing criteria selects everything in its list.
pub struct TransferRedeemerParams<'a> {
    pub reference_inputs: &'a [Utxo],
    pub inputs: Option<&'a [Utxo]>,
    pub outputs: Option<&'a [Utxo]>,
    pub ref_input_criteria: SelectionCriteria<'a>,
    pub input_criteria: Option<SelectionCriteria<'a>>,
    pub output_criteria: Option<SelectionCriteria<'a>>,
}

/// Build a transfer-logic redeemer from position indices.
///
/// Reference inputs and spend inputs are sorted into the canonical input
/// order before indexing (the ledger will do the same); outputs keep
/// their construction order, since output indices are positional. The
/// `make` closure assembles the final redeemer from the selected index
/// lists.
pub fn transfer_redeemer(
    params: TransferRedeemerParams<'_>,
    make: impl FnOnce(Vec<u64>, Option<Vec<u64>>, Option<Vec<u64>>) -> PlutusData,
) -> PlutusData {
    let sorted_refs = sort_utxos_by_out_ref(params.reference_inputs.to_vec());
    let ref_indices = indices_matching(&sorted_refs, Some(params.ref_input_criteria));

    let input_indices = params.inputs.map(|inputs| {
        let sorted = sort_utxos_by_out_ref(inputs.to_vec());
        indices_matching(&sorted, params.input_criteria)
    });
    let output_indices = params
        .outputs
        .map(|outputs| indices_matching(outputs, params.output_criteria));

    make(ref_indices, input_indices, output_indices)
}

fn indices_matching(utxos: &[Utxo], criteria: Option<SelectionCriteria<'_>>) -> Vec<u64> {
    utxos
        .iter()
        .enumerate()
        .filter(|(_, utxo)| criteria.map(|keep| keep(utxo)).unwrap_or(true))
        .map(|(i, _)| i as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use cairn_types::{Assets, OutRef, TxHash};

    use super::*;

    fn utxo(byte: u8, lovelace: i128) -> Utxo {
        Utxo::new(
            OutRef::new(TxHash::from_raw([byte; 32]), 0),
            "addr_test1example",
            Assets::from_lovelace(lovelace),
        )
    }

    #[test]
    fn freeze_redeemer_wraps_indices() {
        assert_eq!(
            freeze_redeemer(&[0, 3]),
            PlutusData::constr(
                0,
                vec![PlutusData::List(vec![
                    PlutusData::int(0),
                    PlutusData::int(3)
                ])]
            )
        );
    }

    #[test]
    fn reference_indices_follow_canonical_order() {
        // Given unsorted, the 1-hash UTxO sorts to position 0.
        let refs = vec![utxo(3, 10), utxo(1, 20)];
        let redeemer = transfer_redeemer(
            TransferRedeemerParams {
                reference_inputs: &refs,
                inputs: None,
                outputs: None,
                ref_input_criteria: &|u| u.assets.lovelace() == 20,
                input_criteria: None,
                output_criteria: None,
            },
            |ref_indices, input_indices, output_indices| {
                assert_eq!(ref_indices, vec![0]);
                assert_eq!(input_indices, None);
                assert_eq!(output_indices, None);
                freeze_redeemer(&ref_indices)
            },
        );
        assert_eq!(redeemer, freeze_redeemer(&[0]));
    }

    #[test]
    fn outputs_keep_construction_order() {
        let outputs = vec![utxo(9, 1), utxo(2, 2), utxo(5, 3)];
        transfer_redeemer(
            TransferRedeemerParams {
                reference_inputs: &[],
                inputs: None,
                outputs: Some(&outputs),
                ref_input_criteria: &|_| true,
                input_criteria: None,
                output_criteria: Some(&|u| u.assets.lovelace() >= 2),
            },
            |_, _, output_indices| {
                // Positions 1 and 2 in the given order, not sorted order.
                assert_eq!(output_indices, Some(vec![1, 2]));
                PlutusData::unit()
            },
        );
    }

    #[test]
    fn missing_criteria_selects_everything() {
        let inputs = vec![utxo(1, 1), utxo(2, 2)];
        transfer_redeemer(
            TransferRedeemerParams {
                reference_inputs: &[],
                inputs: Some(&inputs),
                outputs: None,
                ref_input_criteria: &|_| true,
                input_criteria: None,
                output_criteria: None,
            },
            |_, input_indices, _| {
                assert_eq!(input_indices, Some(vec![0, 1]));
                PlutusData::unit()
            },
        );
    }
}
