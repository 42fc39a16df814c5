use cairn_plutus::{OracleDatum, ToPlutusData};
use cairn_types::{AssetName, TypeError};

use crate::error::ChainError;
use crate::provider::{SignedMessage, Wallet};

/// An oracle record together with the wallet signature over its encoded
/// datum. Consumers verify the signature against the publisher's key
/// before trusting the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleSignature {
    pub data: OracleDatum,
    pub signed_message: SignedMessage,
}

/// Name of the oracle state NFT for a farm: the farm id as UTF-8 bytes.
/// One farm, one token, so updates always spend the previous record.
pub fn oracle_token_name(farm_id: &str) -> Result<AssetName, TypeError> {
    AssetName::from_text(farm_id)
}

/// Encode an oracle record as its on-chain datum and sign the CBOR hex
/// with the wallet's own address.
pub async fn sign_oracle_data(
    wallet: &dyn Wallet,
    data: OracleDatum,
) -> Result<OracleSignature, ChainError> {
    let payload = hex::encode(data.to_plutus_data().to_bytes()?);
    let address = wallet.address().await?;
    let signed_message = wallet.sign_message(&address, &payload).await?;
    Ok(OracleSignature {
        data,
        signed_message,
    })
}

#[cfg(test)]
mod tests {
    use cairn_plutus::PlutusData;

    use super::*;
    use crate::memory::MemoryWallet;

    #[test]
    fn oracle_token_name_is_the_farm_id_text() {
        let name = oracle_token_name("farm-042").unwrap();
        assert_eq!(name.as_bytes(), b"farm-042");
    }

    #[test]
    fn overlong_farm_id_is_rejected() {
        assert!(oracle_token_name(&"f".repeat(33)).is_err());
    }

    #[tokio::test]
    async fn signs_the_encoded_datum() {
        let wallet = MemoryWallet::new("addr_test1oracle");
        let data = OracleDatum {
            farmer_id: b"farmer-001".to_vec(),
            farm_id: b"farm-042".to_vec(),
            ae_id: b"ae-7".to_vec(),
            farm_area: 12_550,
            farm_borders: b"QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_vec(),
            sustainability_index: 87,
            additional_data: PlutusData::unit(),
        };

        let signed = sign_oracle_data(&wallet, data.clone()).await.unwrap();
        assert_eq!(signed.data, data);
        // The echo wallet returns the payload as the signature.
        assert_eq!(
            signed.signed_message.signature,
            hex::encode(data.to_plutus_data().to_bytes().unwrap())
        );
    }
}
