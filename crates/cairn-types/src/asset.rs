use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;
use crate::hash::{Hash28, PolicyId};

/// Asset name: 0 to 32 bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetName(Vec<u8>);

impl AssetName {
    pub const MAX_LEN: usize = 32;

    /// Create from raw bytes, checking the length bound.
    pub fn new(bytes: Vec<u8>) -> Result<Self, TypeError> {
        if bytes.len() > Self::MAX_LEN {
            return Err(TypeError::AssetNameTooLong { len: bytes.len() });
        }
        Ok(Self(bytes))
    }

    /// The empty asset name (used by ADA).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::new(bytes)
    }

    /// Create from UTF-8 text (e.g. a human-readable token name).
    pub fn from_text(s: &str) -> Result<Self, TypeError> {
        Self::new(s.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the name begins with the given byte prefix.
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetName({})", self.to_hex())
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An asset type: minting policy plus asset name.
///
/// ADA is represented with no policy and an empty name, matching the
/// on-chain encoding where both fields are empty byte strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetClass {
    pub policy: Option<PolicyId>,
    pub name: AssetName,
}

impl AssetClass {
    pub fn new(policy: PolicyId, name: AssetName) -> Self {
        Self {
            policy: Some(policy),
            name,
        }
    }

    /// The ADA asset class: empty policy, empty name.
    pub fn ada() -> Self {
        Self {
            policy: None,
            name: AssetName::empty(),
        }
    }

    pub fn is_ada(&self) -> bool {
        self.policy.is_none() && self.name.is_empty()
    }
}

/// Asset unit identifier: lovelace, or the concatenation of a policy id
/// and an asset name.
///
/// The textual form matches the convention used by chain indexers:
/// `"lovelace"` for ADA, otherwise policy hex immediately followed by
/// name hex. Lovelace sorts before every policy-scoped unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Lovelace,
    Asset { policy: PolicyId, name: AssetName },
}

impl Unit {
    pub fn asset(policy: PolicyId, name: AssetName) -> Self {
        Unit::Asset { policy, name }
    }

    /// The policy id, if this is a policy-scoped unit.
    pub fn policy(&self) -> Option<&PolicyId> {
        match self {
            Unit::Lovelace => None,
            Unit::Asset { policy, .. } => Some(policy),
        }
    }

    /// The asset name, if this is a policy-scoped unit.
    pub fn name(&self) -> Option<&AssetName> {
        match self {
            Unit::Lovelace => None,
            Unit::Asset { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Lovelace => write!(f, "lovelace"),
            Unit::Asset { policy, name } => write!(f, "{}{}", policy.to_hex(), name.to_hex()),
        }
    }
}

impl FromStr for Unit {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "lovelace" {
            return Ok(Unit::Lovelace);
        }
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() < Hash28::LEN {
            return Err(TypeError::InvalidUnit(format!(
                "unit shorter than a policy id: {} bytes",
                bytes.len()
            )));
        }
        let policy = Hash28::from_slice(&bytes[..Hash28::LEN])?;
        let name = AssetName::new(bytes[Hash28::LEN..].to_vec())?;
        Ok(Unit::Asset { policy, name })
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: TypeError| D::Error::custom(e.to_string()))
    }
}

/// A bag of assets: ordered map from [`Unit`] to quantity.
///
/// Quantities are signed so that intermediate mint/burn arithmetic can go
/// negative; a zero quantity is never stored. The set-style operations
/// ([`Assets::union`], [`Assets::remove`], the policy filters) mirror the
/// contracts the transaction-building layer depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets(BTreeMap<Unit, i128>);

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single lovelace quantity.
    pub fn from_lovelace(quantity: i128) -> Self {
        let mut assets = Self::new();
        assets.add(Unit::Lovelace, quantity);
        assets
    }

    /// Add a quantity to a unit, dropping the entry if it cancels to zero.
    pub fn add(&mut self, unit: Unit, quantity: i128) {
        let entry = self.0.entry(unit.clone()).or_insert(0);
        *entry += quantity;
        if *entry == 0 {
            self.0.remove(&unit);
        }
    }

    /// Quantity held for a unit, zero when absent.
    pub fn get(&self, unit: &Unit) -> i128 {
        self.0.get(unit).copied().unwrap_or(0)
    }

    pub fn lovelace(&self) -> i128 {
        self.get(&Unit::Lovelace)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Unit, &i128)> {
        self.0.iter()
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-unit sum of two bags.
    pub fn union(&self, other: &Assets) -> Assets {
        let mut out = self.clone();
        for (unit, quantity) in other.iter() {
            out.add(unit.clone(), *quantity);
        }
        out
    }

    /// Set subtraction: keep only this bag's quantities not covered by
    /// `other`, clipped to a zero floor per unit.
    ///
    /// `{x: 5, y: 10}.remove({x: 3, y: 15, z: 4})` is `{x: 2}` — the
    /// leftover of `x`, nothing for `y` (fully covered), and `z` never
    /// appears because it was not in `self`.
    pub fn remove(&self, other: &Assets) -> Assets {
        let mut out = Assets::new();
        for (unit, quantity) in self.iter() {
            let leftover = quantity - other.get(unit);
            if leftover > 0 {
                out.add(unit.clone(), leftover);
            }
        }
        out
    }

    /// True when every quantity in `required` is met by this bag.
    pub fn covers(&self, required: &Assets) -> bool {
        required.iter().all(|(unit, quantity)| self.get(unit) >= *quantity)
    }

    /// Entries under the given policy id.
    pub fn filter_policy(&self, policy: &PolicyId) -> Assets {
        Assets(
            self.0
                .iter()
                .filter(|(unit, _)| unit.policy() == Some(policy))
                .map(|(unit, quantity)| (unit.clone(), *quantity))
                .collect(),
        )
    }

    /// Entries not under any of the given policy ids. Lovelace is kept.
    pub fn without_policies(&self, policies: &[PolicyId]) -> Assets {
        Assets(
            self.0
                .iter()
                .filter(|(unit, _)| match unit.policy() {
                    Some(policy) => !policies.contains(policy),
                    None => true,
                })
                .map(|(unit, quantity)| (unit.clone(), *quantity))
                .collect(),
        )
    }
}

impl FromIterator<(Unit, i128)> for Assets {
    fn from_iter<I: IntoIterator<Item = (Unit, i128)>>(iter: I) -> Self {
        let mut assets = Assets::new();
        for (unit, quantity) in iter {
            assets.add(unit, quantity);
        }
        assets
    }
}
