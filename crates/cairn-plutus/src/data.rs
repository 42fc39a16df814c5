use ciborium::value::{Integer, Value};

use crate::error::DataError;

/// The ledger's `Data` type: what every datum and redeemer is made of.
///
/// Constructor tags follow the ledger's CBOR convention: tags 0–6 map to
/// CBOR tags 121–127, tags 7–127 map to CBOR tags 1280–1400, and anything
/// larger uses CBOR tag 102 wrapping `[tag, fields]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlutusData {
    Constr { tag: u64, fields: Vec<PlutusData> },
    Map(Vec<(PlutusData, PlutusData)>),
    List(Vec<PlutusData>),
    Int(i128),
    Bytes(Vec<u8>),
}

/// Compact CBOR tag for a constructor tag, when one exists.
fn compact_cbor_tag(tag: u64) -> Option<u64> {
    match tag {
        0..=6 => Some(121 + tag),
        7..=127 => Some(1280 + (tag - 7)),
        _ => None,
    }
}

/// Constructor tag for a compact CBOR tag, when it is one.
fn constr_tag_of(cbor_tag: u64) -> Option<u64> {
    match cbor_tag {
        121..=127 => Some(cbor_tag - 121),
        1280..=1400 => Some(cbor_tag - 1280 + 7),
        _ => None,
    }
}

/// CBOR tag for the general constructor encoding.
const GENERAL_CONSTR_TAG: u64 = 102;

fn cbor_type_name(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Bytes(_) => "bytes",
        Value::Text(_) => "text",
        Value::Float(_) => "float",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Tag(..) => "tag",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        _ => "unknown",
    }
}

impl PlutusData {
    /// Constructor-tagged record.
    pub fn constr(tag: u64, fields: Vec<PlutusData>) -> Self {
        PlutusData::Constr { tag, fields }
    }

    /// Byte string.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        PlutusData::Bytes(bytes.into())
    }

    /// Integer.
    pub fn int(value: impl Into<i128>) -> Self {
        PlutusData::Int(value.into())
    }

    /// The unit redeemer: `Constr 0 []`.
    pub fn unit() -> Self {
        PlutusData::constr(0, Vec::new())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            PlutusData::Constr { .. } => "constr",
            PlutusData::Map(_) => "map",
            PlutusData::List(_) => "list",
            PlutusData::Int(_) => "int",
            PlutusData::Bytes(_) => "bytes",
        }
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DataError> {
        let value = self.to_cbor_value()?;
        let mut buf = Vec::new();
        ciborium::ser::into_writer(&value, &mut buf).map_err(|e| DataError::Cbor(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DataError> {
        let value: Value =
            ciborium::de::from_reader(bytes).map_err(|e| DataError::Cbor(e.to_string()))?;
        Self::from_cbor_value(value)
    }

    fn to_cbor_value(&self) -> Result<Value, DataError> {
        match self {
            PlutusData::Constr { tag, fields } => {
                let fields = fields
                    .iter()
                    .map(PlutusData::to_cbor_value)
                    .collect::<Result<Vec<_>, _>>()?;
                match compact_cbor_tag(*tag) {
                    Some(cbor_tag) => Ok(Value::Tag(cbor_tag, Box::new(Value::Array(fields)))),
                    None => Ok(Value::Tag(
                        GENERAL_CONSTR_TAG,
                        Box::new(Value::Array(vec![
                            Value::Integer(Integer::from(*tag)),
                            Value::Array(fields),
                        ])),
                    )),
                }
            }
            PlutusData::Map(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(k, v)| Ok((k.to_cbor_value()?, v.to_cbor_value()?)))
                    .collect::<Result<Vec<_>, DataError>>()?;
                Ok(Value::Map(pairs))
            }
            PlutusData::List(items) => {
                let items = items
                    .iter()
                    .map(PlutusData::to_cbor_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(items))
            }
            PlutusData::Int(i) => {
                let int = Integer::try_from(*i).map_err(|_| DataError::IntegerOutOfRange(*i))?;
                Ok(Value::Integer(int))
            }
            PlutusData::Bytes(b) => Ok(Value::Bytes(b.clone())),
        }
    }

    fn from_cbor_value(value: Value) -> Result<Self, DataError> {
        match value {
            Value::Tag(cbor_tag, inner) => match (constr_tag_of(cbor_tag), *inner) {
                (Some(tag), Value::Array(items)) => {
                    let fields = items
                        .into_iter()
                        .map(PlutusData::from_cbor_value)
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(PlutusData::Constr { tag, fields })
                }
                (None, inner) if cbor_tag == GENERAL_CONSTR_TAG => {
                    Self::from_general_constr(inner)
                }
                (_, inner) => Err(DataError::UnsupportedItem(format!(
                    "CBOR tag {cbor_tag} over {}",
                    cbor_type_name(&inner)
                ))),
            },
            Value::Map(pairs) => {
                let pairs = pairs
                    .into_iter()
                    .map(|(k, v)| {
                        Ok((PlutusData::from_cbor_value(k)?, PlutusData::from_cbor_value(v)?))
                    })
                    .collect::<Result<Vec<_>, DataError>>()?;
                Ok(PlutusData::Map(pairs))
            }
            Value::Array(items) => {
                let items = items
                    .into_iter()
                    .map(PlutusData::from_cbor_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PlutusData::List(items))
            }
            Value::Integer(i) => Ok(PlutusData::Int(i128::from(i))),
            Value::Bytes(b) => Ok(PlutusData::Bytes(b)),
            other => Err(DataError::UnsupportedItem(cbor_type_name(&other).to_string())),
        }
    }

    fn from_general_constr(inner: Value) -> Result<Self, DataError> {
        let Value::Array(items) = inner else {
            return Err(DataError::UnsupportedItem(
                "tag 102 over a non-array item".to_string(),
            ));
        };
        let [tag_item, fields_item]: [Value; 2] =
            items.try_into().map_err(|items: Vec<Value>| DataError::WrongArity {
                expected: 2,
                found: items.len(),
            })?;
        let tag = match tag_item {
            Value::Integer(i) => u64::try_from(i128::from(i))
                .map_err(|_| DataError::IntegerOutOfRange(i128::from(i)))?,
            other => {
                return Err(DataError::UnexpectedType {
                    expected: "integer",
                    found: cbor_type_name(&other),
                })
            }
        };
        let fields = match fields_item {
            Value::Array(fields) => fields
                .into_iter()
                .map(PlutusData::from_cbor_value)
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(DataError::UnexpectedType {
                    expected: "array",
                    found: cbor_type_name(&other),
                })
            }
        };
        Ok(PlutusData::Constr { tag, fields })
    }

    /// Unwrap a constructor with the given tag, returning its fields.
    pub fn expect_constr(self, tag: u64) -> Result<Vec<PlutusData>, DataError> {
        match self {
            PlutusData::Constr { tag: found, fields } if found == tag => Ok(fields),
            PlutusData::Constr { tag: found, .. } => Err(DataError::UnexpectedTag {
                expected: tag,
                found,
            }),
            other => Err(DataError::UnexpectedType {
                expected: "constr",
                found: other.variant_name(),
            }),
        }
    }

    /// Unwrap any constructor, returning its tag and fields.
    pub fn expect_any_constr(self) -> Result<(u64, Vec<PlutusData>), DataError> {
        match self {
            PlutusData::Constr { tag, fields } => Ok((tag, fields)),
            other => Err(DataError::UnexpectedType {
                expected: "constr",
                found: other.variant_name(),
            }),
        }
    }

    /// Unwrap a byte string.
    pub fn expect_bytes(self) -> Result<Vec<u8>, DataError> {
        match self {
            PlutusData::Bytes(b) => Ok(b),
            other => Err(DataError::UnexpectedType {
                expected: "bytes",
                found: other.variant_name(),
            }),
        }
    }

    /// Unwrap a byte string of an exact length.
    pub fn expect_bytes_exact(self, len: usize) -> Result<Vec<u8>, DataError> {
        let bytes = self.expect_bytes()?;
        if bytes.len() != len {
            return Err(DataError::WrongByteLength {
                expected: len,
                found: bytes.len(),
            });
        }
        Ok(bytes)
    }

    /// Unwrap an integer.
    pub fn expect_int(self) -> Result<i128, DataError> {
        match self {
            PlutusData::Int(i) => Ok(i),
            other => Err(DataError::UnexpectedType {
                expected: "int",
                found: other.variant_name(),
            }),
        }
    }

    /// Unwrap a list.
    pub fn expect_list(self) -> Result<Vec<PlutusData>, DataError> {
        match self {
            PlutusData::List(items) => Ok(items),
            other => Err(DataError::UnexpectedType {
                expected: "list",
                found: other.variant_name(),
            }),
        }
    }

    /// Unwrap a map.
    pub fn expect_map(self) -> Result<Vec<(PlutusData, PlutusData)>, DataError> {
        match self {
            PlutusData::Map(pairs) => Ok(pairs),
            other => Err(DataError::UnexpectedType {
                expected: "map",
                found: other.variant_name(),
            }),
        }
    }
}

/// Convert a field list into a fixed-arity array, as every record schema
/// decode does.
pub(crate) fn fixed<const N: usize>(fields: Vec<PlutusData>) -> Result<[PlutusData; N], DataError> {
    fields
        .try_into()
        .map_err(|fields: Vec<PlutusData>| DataError::WrongArity {
            expected: N,
            found: fields.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: PlutusData) {
        let bytes = data.to_bytes().unwrap();
        assert_eq!(PlutusData::from_bytes(&bytes).unwrap(), data);
    }

    #[test]
    fn constr_roundtrip_compact_range() {
        roundtrip(PlutusData::constr(0, vec![PlutusData::int(1)]));
        roundtrip(PlutusData::constr(6, vec![]));
    }

    #[test]
    fn constr_roundtrip_extended_range() {
        roundtrip(PlutusData::constr(7, vec![PlutusData::bytes(vec![1, 2])]));
        roundtrip(PlutusData::constr(127, vec![]));
    }

    #[test]
    fn constr_roundtrip_general_range() {
        roundtrip(PlutusData::constr(128, vec![PlutusData::int(-3)]));
        roundtrip(PlutusData::constr(1_000_000, vec![]));
    }

    #[test]
    fn compact_tag_boundaries() {
        assert_eq!(compact_cbor_tag(0), Some(121));
        assert_eq!(compact_cbor_tag(6), Some(127));
        assert_eq!(compact_cbor_tag(7), Some(1280));
        assert_eq!(compact_cbor_tag(127), Some(1400));
        assert_eq!(compact_cbor_tag(128), None);
        assert_eq!(constr_tag_of(121), Some(0));
        assert_eq!(constr_tag_of(1400), Some(127));
        assert_eq!(constr_tag_of(120), None);
    }

    #[test]
    fn nested_structures_roundtrip() {
        roundtrip(PlutusData::Map(vec![(
            PlutusData::bytes(vec![0xaa]),
            PlutusData::Map(vec![(PlutusData::bytes(vec![]), PlutusData::int(42))]),
        )]));
        roundtrip(PlutusData::List(vec![
            PlutusData::constr(1, vec![PlutusData::bytes(vec![9u8; 28])]),
            PlutusData::int(-7),
        ]));
    }

    #[test]
    fn garbage_bytes_fail_softly() {
        assert!(matches!(
            PlutusData::from_bytes(&[0xff, 0x00, 0x12]),
            Err(DataError::Cbor(_))
        ));
    }

    #[test]
    fn text_is_not_plutus_data() {
        // CBOR text string "a" (0x61 0x61) is valid CBOR but not valid Data.
        assert!(matches!(
            PlutusData::from_bytes(&[0x61, 0x61]),
            Err(DataError::UnsupportedItem(_))
        ));
    }

    #[test]
    fn expect_constr_reports_tag_mismatch() {
        let err = PlutusData::constr(1, vec![]).expect_constr(0).unwrap_err();
        assert_eq!(
            err,
            DataError::UnexpectedTag {
                expected: 0,
                found: 1
            }
        );
    }

    #[test]
    fn expect_bytes_exact_reports_length() {
        let err = PlutusData::bytes(vec![0u8; 4])
            .expect_bytes_exact(28)
            .unwrap_err();
        assert_eq!(
            err,
            DataError::WrongByteLength {
                expected: 28,
                found: 4
            }
        );
    }

    #[test]
    fn unit_redeemer_shape() {
        assert_eq!(
            PlutusData::unit(),
            PlutusData::Constr {
                tag: 0,
                fields: vec![]
            }
        );
    }
}
