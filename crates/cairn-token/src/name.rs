use cairn_types::{AssetName, OutRef};
use sha3::{Digest, Sha3_256};

/// Reserved 4-byte CIP-67 label prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label([u8; 4]);

impl Label {
    /// Label 100: reference (metadata) token.
    pub const REFERENCE: Label = Label([0x00, 0x06, 0x43, 0xb0]);
    /// Label 222: user NFT.
    pub const USER: Label = Label([0x00, 0x0d, 0xe1, 0x40]);
    /// Label 333: fungible user token.
    pub const FUNGIBLE: Label = Label([0x00, 0x14, 0xdf, 0x10]);
    /// Label 444: rich fungible user token.
    pub const RICH_FT: Label = Label([0x00, 0x1b, 0xc2, 0x80]);

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

/// Reference/user token names minted for one UTxO.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenNamePair {
    pub reference: AssetName,
    pub user: AssetName,
}

/// Derive a content-unique 32-byte asset name from a UTxO's identity.
///
/// SHA3-256 of the raw transaction hash, prefixed with the output index
/// as a single byte and the optional label, truncated to 32 bytes. The
/// same `(tx hash, index, label)` always yields the same name; changing
/// any of the three yields a different one.
pub fn unique_asset_name(out_ref: &OutRef, label: Option<Label>) -> AssetName {
    let digest = Sha3_256::digest(out_ref.tx_hash.as_bytes());

    let mut body = Vec::with_capacity(4 + 1 + digest.len());
    if let Some(label) = label {
        body.extend_from_slice(label.as_bytes());
    }
    // Only the low byte of the index participates, matching the onchain
    // naming convention.
    body.push(out_ref.index as u8);
    body.extend_from_slice(&digest);
    body.truncate(AssetName::MAX_LEN);

    AssetName::new(body).expect("truncated to the asset-name bound")
}

/// Derive the CIP-68 reference/user name pair for one UTxO.
pub fn cip68_token_names(out_ref: &OutRef) -> TokenNamePair {
    TokenNamePair {
        reference: unique_asset_name(out_ref, Some(Label::REFERENCE)),
        user: unique_asset_name(out_ref, Some(Label::USER)),
    }
}

#[cfg(test)]
mod tests {
    use cairn_types::TxHash;

    use super::*;

    fn out_ref(byte: u8, index: u64) -> OutRef {
        OutRef::new(TxHash::from_raw([byte; 32]), index)
    }

    #[test]
    fn name_is_deterministic() {
        let r = out_ref(1, 0);
        assert_eq!(
            unique_asset_name(&r, Some(Label::REFERENCE)),
            unique_asset_name(&r, Some(Label::REFERENCE))
        );
    }

    #[test]
    fn name_is_always_32_bytes() {
        assert_eq!(unique_asset_name(&out_ref(1, 0), None).len(), 32);
        assert_eq!(
            unique_asset_name(&out_ref(1, 0), Some(Label::USER)).len(),
            32
        );
    }

    #[test]
    fn output_index_changes_the_name() {
        // Two UTxOs differing only in output index.
        let a = unique_asset_name(&out_ref(1, 0), Some(Label::REFERENCE));
        let b = unique_asset_name(&out_ref(1, 1), Some(Label::REFERENCE));
        assert_ne!(a, b);
    }

    #[test]
    fn tx_hash_changes_the_name() {
        let a = unique_asset_name(&out_ref(1, 0), None);
        let b = unique_asset_name(&out_ref(2, 0), None);
        assert_ne!(a, b);
    }

    #[test]
    fn label_changes_the_name() {
        let r = out_ref(1, 0);
        let plain = unique_asset_name(&r, None);
        let labeled = unique_asset_name(&r, Some(Label::REFERENCE));
        assert_ne!(plain, labeled);
    }

    #[test]
    fn labeled_names_carry_their_prefix() {
        let r = out_ref(3, 2);
        let pair = cip68_token_names(&r);
        assert!(pair.reference.has_prefix(Label::REFERENCE.as_bytes()));
        assert!(pair.user.has_prefix(Label::USER.as_bytes()));
        // Same body after the label.
        assert_eq!(pair.reference.as_bytes()[4..], pair.user.as_bytes()[4..]);
    }

    #[test]
    fn index_byte_follows_the_label() {
        let name = unique_asset_name(&out_ref(5, 7), Some(Label::REFERENCE));
        assert_eq!(name.as_bytes()[4], 7);
    }
}
