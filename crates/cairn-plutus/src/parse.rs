use crate::data::PlutusData;
use crate::error::DataError;
use crate::schema::FromPlutusData;

/// Defensively decode a raw inline datum into `T`.
///
/// Absent datum, malformed CBOR, and schema mismatch all come back as
/// `Err` values; nothing here panics. Chain scans call this on every
/// candidate UTxO and skip the failures, since outputs holding unrelated
/// or corrupt datums are expected when reading arbitrary chain state.
pub fn parse_safe_datum<T: FromPlutusData>(datum: Option<&[u8]>) -> Result<T, DataError> {
    let bytes = datum.ok_or(DataError::AbsentDatum)?;
    let data = PlutusData::from_bytes(bytes)?;
    T::from_plutus_data(data)
}

#[cfg(test)]
mod tests {
    use cairn_types::{Credential, Hash28};

    use super::*;
    use crate::schema::{DirectoryNodeDatum, ProtocolParametersDatum, ToPlutusData};

    #[test]
    fn absent_datum_fails_softly() {
        assert_eq!(
            parse_safe_datum::<DirectoryNodeDatum>(None),
            Err(DataError::AbsentDatum)
        );
        assert_eq!(
            parse_safe_datum::<ProtocolParametersDatum>(None),
            Err(DataError::AbsentDatum)
        );
        assert_eq!(
            parse_safe_datum::<Credential>(None),
            Err(DataError::AbsentDatum)
        );
    }

    #[test]
    fn malformed_bytes_fail_softly() {
        assert!(matches!(
            parse_safe_datum::<DirectoryNodeDatum>(Some(&[0xde, 0xad])),
            Err(DataError::Cbor(_))
        ));
    }

    #[test]
    fn schema_mismatch_fails_softly() {
        // A valid credential datum is not a valid directory node.
        let cred = Credential::Script(Hash28::from_raw([1u8; 28]));
        let bytes = cred.to_plutus_data().to_bytes().unwrap();
        assert!(parse_safe_datum::<DirectoryNodeDatum>(Some(&bytes)).is_err());
    }

    #[test]
    fn valid_datum_decodes() {
        let node = DirectoryNodeDatum {
            key: Vec::new(),
            next_key: vec![0xff; 28],
            transfer_logic: Credential::Script(Hash28::from_raw([2u8; 28])),
            issuer_logic: Credential::Script(Hash28::from_raw([3u8; 28])),
        };
        let bytes = node.to_plutus_data().to_bytes().unwrap();
        let decoded: DirectoryNodeDatum = parse_safe_datum(Some(&bytes)).unwrap();
        assert_eq!(decoded, node);
    }
}
