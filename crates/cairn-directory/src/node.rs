use cairn_plutus::{parse_safe_datum, DirectoryNodeDatum};
use cairn_types::Utxo;

use crate::error::DirectoryError;

/// Key of the permanent head node. Sorts before every real policy key.
pub const HEAD_KEY: &[u8] = &[];

/// Next-key of the tail node. Sorts after every 28-byte policy key.
pub const TAIL_NEXT_KEY: [u8; 28] = [0xff; 28];

/// Whether this node is the permanent list head.
pub fn is_head(node: &DirectoryNodeDatum) -> bool {
    node.key == HEAD_KEY
}

/// Whether this node is the current list tail.
pub fn is_tail(node: &DirectoryNodeDatum) -> bool {
    node.next_key == TAIL_NEXT_KEY
}

/// Whether `key` falls strictly between this node and its successor.
///
/// Strict on both ends: a node never covers its own key, so an
/// already-registered key has no insertion point.
pub fn covers_key(node: &DirectoryNodeDatum, key: &[u8]) -> bool {
    node.key.as_slice() < key && key < node.next_key.as_slice()
}

/// A directory node UTxO together with its decoded datum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionPoint {
    pub utxo: Utxo,
    pub datum: DirectoryNodeDatum,
}

/// Find the node a new key must be inserted after.
///
/// Scans the given UTxOs, skipping any whose datum is absent or does not
/// decode as a directory node, and returns the one whose span strictly
/// contains `new_key`. Exactly one such node exists in a well-formed
/// directory that does not already hold the key.
pub fn find_insertion_node(
    new_key: &[u8],
    utxos: &[Utxo],
) -> Result<InsertionPoint, DirectoryError> {
    utxos
        .iter()
        .filter_map(|utxo| {
            let datum: DirectoryNodeDatum = parse_safe_datum(utxo.datum.as_deref()).ok()?;
            covers_key(&datum, new_key).then(|| InsertionPoint {
                utxo: utxo.clone(),
                datum,
            })
        })
        .next()
        .ok_or_else(|| DirectoryError::NoInsertionPoint {
            key: hex::encode(new_key),
        })
}

/// The datum the insertion node carries after a new node is linked in
/// behind it: same key and logic credentials, next-key now pointing at
/// the inserted key.
pub fn node_after_insert(new_key: &[u8], node: &DirectoryNodeDatum) -> DirectoryNodeDatum {
    DirectoryNodeDatum {
        key: node.key.clone(),
        next_key: new_key.to_vec(),
        transfer_logic: node.transfer_logic.clone(),
        issuer_logic: node.issuer_logic.clone(),
    }
}
