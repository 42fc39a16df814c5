use cairn_types::{OutRef, Utxo};

/// Sort UTxOs into the ledger's canonical input order: transaction hash
/// bytes lexicographic, then output index.
///
/// Callers that predict input positions (redeemer index lists) must use
/// exactly this ordering, since the ledger applies the same rule when
/// finalizing a transaction.
pub fn sort_utxos_by_out_ref(mut utxos: Vec<Utxo>) -> Vec<Utxo> {
    utxos.sort_by_key(|utxo| utxo.out_ref);
    utxos
}

/// Positions of `index_inputs` within the canonically sorted union of
/// both input lists.
///
/// On-chain scripts that check "which inputs were provided" receive these
/// positions in their redeemer; they must be computed against the same
/// merged, sorted set the ledger will produce.
pub fn input_utxo_indices(index_inputs: &[Utxo], remaining_inputs: &[Utxo]) -> Vec<u64> {
    let mut combined: Vec<OutRef> = index_inputs
        .iter()
        .chain(remaining_inputs)
        .map(|utxo| utxo.out_ref)
        .collect();
    combined.sort();

    index_inputs
        .iter()
        .map(|utxo| {
            let position = combined
                .binary_search(&utxo.out_ref)
                .expect("merged set contains every indexed input");
            position as u64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cairn_types::{Assets, TxHash};

    use super::*;

    fn utxo(byte: u8, index: u64) -> Utxo {
        Utxo::new(
            OutRef::new(TxHash::from_raw([byte; 32]), index),
            "addr_test1example",
            Assets::from_lovelace(1_000_000),
        )
    }

    #[test]
    fn sorts_by_hash_then_index() {
        let sorted = sort_utxos_by_out_ref(vec![utxo(2, 0), utxo(1, 1), utxo(1, 0)]);
        let refs: Vec<_> = sorted.iter().map(|u| u.out_ref).collect();
        assert_eq!(
            refs,
            vec![
                utxo(1, 0).out_ref,
                utxo(1, 1).out_ref,
                utxo(2, 0).out_ref
            ]
        );
    }

    #[test]
    fn indices_are_positions_in_the_merged_sorted_set() {
        // Merged and sorted: [1#0, 2#0, 3#0, 4#0]; indexed inputs are
        // 3#0 and 1#0, so their positions are 2 and 0.
        let indexed = vec![utxo(3, 0), utxo(1, 0)];
        let remaining = vec![utxo(4, 0), utxo(2, 0)];
        assert_eq!(input_utxo_indices(&indexed, &remaining), vec![2, 0]);
    }

    #[test]
    fn indices_with_no_remaining_inputs() {
        let indexed = vec![utxo(2, 5), utxo(2, 1)];
        assert_eq!(input_utxo_indices(&indexed, &[]), vec![1, 0]);
    }
}
