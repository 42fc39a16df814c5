//! Datum schemas: the bidirectional mapping between domain records and
//! their canonical on-chain encodings.
//!
//! Encoding is a total function on valid records. Decoding is partial and
//! reports the violated invariant (tag mismatch, wrong arity, out-of-range
//! byte length) instead of silently producing a corrupt record.

use std::collections::BTreeMap;

use cairn_types::{AssetClass, AssetName, Assets, Credential, Hash28, TxHash, TypeError, Unit};

use crate::data::{fixed, PlutusData};
use crate::error::DataError;

/// Encode a domain record into Plutus Data. Total.
pub trait ToPlutusData {
    fn to_plutus_data(&self) -> PlutusData;
}

/// Decode a domain record from Plutus Data. Partial; failures are values.
pub trait FromPlutusData: Sized {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError>;
}

impl ToPlutusData for PlutusData {
    fn to_plutus_data(&self) -> PlutusData {
        self.clone()
    }
}

impl FromPlutusData for PlutusData {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        Ok(data)
    }
}

// Credential: tag 0 for key credentials, tag 1 for script credentials.
impl ToPlutusData for Credential {
    fn to_plutus_data(&self) -> PlutusData {
        let (tag, hash) = match self {
            Credential::Key(h) => (0, h),
            Credential::Script(h) => (1, h),
        };
        PlutusData::constr(tag, vec![PlutusData::bytes(hash.as_bytes().to_vec())])
    }
}

impl FromPlutusData for Credential {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let (tag, fields) = data.expect_any_constr()?;
        let [hash] = fixed::<1>(fields)?;
        let hash = Hash28::from_slice(&hash.expect_bytes_exact(Hash28::LEN)?)?;
        match tag {
            0 => Ok(Credential::Key(hash)),
            1 => Ok(Credential::Script(hash)),
            other => Err(DataError::UnknownVariant(other)),
        }
    }
}

// Maybe: Just is tag 0, Nothing is tag 1.
impl<T: ToPlutusData> ToPlutusData for Option<T> {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            Some(inner) => PlutusData::constr(0, vec![inner.to_plutus_data()]),
            None => PlutusData::constr(1, Vec::new()),
        }
    }
}

impl<T: FromPlutusData> FromPlutusData for Option<T> {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let (tag, fields) = data.expect_any_constr()?;
        match tag {
            0 => {
                let [inner] = fixed::<1>(fields)?;
                Ok(Some(T::from_plutus_data(inner)?))
            }
            1 => {
                fixed::<0>(fields)?;
                Ok(None)
            }
            other => Err(DataError::UnknownVariant(other)),
        }
    }
}

/// Stake part of an on-chain address: an inline credential or a pointer to
/// the slot/transaction/certificate where the credential was registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StakeReference {
    Inline(Credential),
    Pointer {
        slot: u64,
        tx_index: u64,
        cert_index: u64,
    },
}

impl ToPlutusData for StakeReference {
    fn to_plutus_data(&self) -> PlutusData {
        match self {
            StakeReference::Inline(cred) => PlutusData::constr(0, vec![cred.to_plutus_data()]),
            StakeReference::Pointer {
                slot,
                tx_index,
                cert_index,
            } => PlutusData::constr(
                1,
                vec![PlutusData::constr(
                    0,
                    vec![
                        PlutusData::int(*slot),
                        PlutusData::int(*tx_index),
                        PlutusData::int(*cert_index),
                    ],
                )],
            ),
        }
    }
}

fn expect_u64(data: PlutusData) -> Result<u64, DataError> {
    let i = data.expect_int()?;
    u64::try_from(i).map_err(|_| DataError::IntegerOutOfRange(i))
}

impl FromPlutusData for StakeReference {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let (tag, fields) = data.expect_any_constr()?;
        match tag {
            0 => {
                let [cred] = fixed::<1>(fields)?;
                Ok(StakeReference::Inline(Credential::from_plutus_data(cred)?))
            }
            1 => {
                let [pointer] = fixed::<1>(fields)?;
                let [slot, tx_index, cert_index] = fixed::<3>(pointer.expect_constr(0)?)?;
                Ok(StakeReference::Pointer {
                    slot: expect_u64(slot)?,
                    tx_index: expect_u64(tx_index)?,
                    cert_index: expect_u64(cert_index)?,
                })
            }
            other => Err(DataError::UnknownVariant(other)),
        }
    }
}

/// On-chain address record: mandatory payment credential, optional stake
/// reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressDatum {
    pub payment: Credential,
    pub stake: Option<StakeReference>,
}

impl ToPlutusData for AddressDatum {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::constr(
            0,
            vec![self.payment.to_plutus_data(), self.stake.to_plutus_data()],
        )
    }
}

impl FromPlutusData for AddressDatum {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [payment, stake] = fixed::<2>(data.expect_constr(0)?)?;
        Ok(AddressDatum {
            payment: Credential::from_plutus_data(payment)?,
            stake: Option::from_plutus_data(stake)?,
        })
    }
}

// AssetClass: policy id and asset name as raw byte strings; ADA is the
// pair of empty byte strings.
impl ToPlutusData for AssetClass {
    fn to_plutus_data(&self) -> PlutusData {
        let policy = self
            .policy
            .map(|p| p.as_bytes().to_vec())
            .unwrap_or_default();
        PlutusData::constr(
            0,
            vec![
                PlutusData::Bytes(policy),
                PlutusData::Bytes(self.name.as_bytes().to_vec()),
            ],
        )
    }
}

impl FromPlutusData for AssetClass {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [policy, name] = fixed::<2>(data.expect_constr(0)?)?;
        let policy_bytes = policy.expect_bytes()?;
        let policy = if policy_bytes.is_empty() {
            None
        } else {
            Some(Hash28::from_slice(&policy_bytes)?)
        };
        let name = AssetName::new(name.expect_bytes()?)?;
        Ok(AssetClass { policy, name })
    }
}

// Value: map from policy id to (map from asset name to quantity), with
// lovelace under the empty policy and name.
impl ToPlutusData for Assets {
    fn to_plutus_data(&self) -> PlutusData {
        let mut grouped: BTreeMap<Vec<u8>, Vec<(Vec<u8>, i128)>> = BTreeMap::new();
        for (unit, quantity) in self.iter() {
            let (policy, name) = match unit {
                Unit::Lovelace => (Vec::new(), Vec::new()),
                Unit::Asset { policy, name } => {
                    (policy.as_bytes().to_vec(), name.as_bytes().to_vec())
                }
            };
            grouped.entry(policy).or_default().push((name, *quantity));
        }
        PlutusData::Map(
            grouped
                .into_iter()
                .map(|(policy, names)| {
                    (
                        PlutusData::Bytes(policy),
                        PlutusData::Map(
                            names
                                .into_iter()
                                .map(|(name, quantity)| {
                                    (PlutusData::Bytes(name), PlutusData::Int(quantity))
                                })
                                .collect(),
                        ),
                    )
                })
                .collect(),
        )
    }
}

impl FromPlutusData for Assets {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let mut assets = Assets::new();
        for (policy_item, inner) in data.expect_map()? {
            let policy_bytes = policy_item.expect_bytes()?;
            let policy = if policy_bytes.is_empty() {
                None
            } else {
                Some(Hash28::from_slice(&policy_bytes)?)
            };
            for (name_item, quantity_item) in inner.expect_map()? {
                let name = AssetName::new(name_item.expect_bytes()?)?;
                let quantity = quantity_item.expect_int()?;
                let unit = match policy {
                    Some(policy) => Unit::asset(policy, name),
                    None if name.is_empty() => Unit::Lovelace,
                    None => {
                        return Err(TypeError::InvalidUnit(
                            "named asset under the empty policy".to_string(),
                        )
                        .into())
                    }
                };
                assets.add(unit, quantity);
            }
        }
        Ok(assets)
    }
}

/// Transaction output reference as validators see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputReference {
    pub tx_hash: TxHash,
    pub index: u64,
}

impl ToPlutusData for OutputReference {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::constr(
            0,
            vec![
                PlutusData::bytes(self.tx_hash.as_bytes().to_vec()),
                PlutusData::int(self.index),
            ],
        )
    }
}

impl FromPlutusData for OutputReference {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [tx_hash, index] = fixed::<2>(data.expect_constr(0)?)?;
        let tx_hash = TxHash::from_slice(&tx_hash.expect_bytes_exact(TxHash::LEN)?)?;
        Ok(OutputReference {
            tx_hash,
            index: expect_u64(index)?,
        })
    }
}

/// One node of the on-chain token directory: a sorted singly-linked list
/// with one UTxO per node.
///
/// Encoded as a plain 4-tuple (no constructor): key, next key, transfer
/// logic credential, issuer logic credential. `key < next_key` holds for
/// every well-formed node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryNodeDatum {
    pub key: Vec<u8>,
    pub next_key: Vec<u8>,
    pub transfer_logic: Credential,
    pub issuer_logic: Credential,
}

impl ToPlutusData for DirectoryNodeDatum {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::List(vec![
            PlutusData::bytes(self.key.clone()),
            PlutusData::bytes(self.next_key.clone()),
            self.transfer_logic.to_plutus_data(),
            self.issuer_logic.to_plutus_data(),
        ])
    }
}

impl FromPlutusData for DirectoryNodeDatum {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [key, next_key, transfer_logic, issuer_logic] = fixed::<4>(data.expect_list()?)?;
        Ok(DirectoryNodeDatum {
            key: key.expect_bytes()?,
            next_key: next_key.expect_bytes()?,
            transfer_logic: Credential::from_plutus_data(transfer_logic)?,
            issuer_logic: Credential::from_plutus_data(issuer_logic)?,
        })
    }
}

/// Global protocol configuration: which directory policy and program logic
/// a deployment recognizes. Written once at deployment, read-only after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolParametersDatum {
    pub directory_node_policy: Hash28,
    pub program_logic: Credential,
}

impl ToPlutusData for ProtocolParametersDatum {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::List(vec![
            PlutusData::bytes(self.directory_node_policy.as_bytes().to_vec()),
            self.program_logic.to_plutus_data(),
        ])
    }
}

impl FromPlutusData for ProtocolParametersDatum {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [policy, program_logic] = fixed::<2>(data.expect_list()?)?;
        let directory_node_policy = Hash28::from_slice(&policy.expect_bytes_exact(Hash28::LEN)?)?;
        Ok(ProtocolParametersDatum {
            directory_node_policy,
            program_logic: Credential::from_plutus_data(program_logic)?,
        })
    }
}
