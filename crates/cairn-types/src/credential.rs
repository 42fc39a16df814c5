use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::{Hash28, KeyHash, ScriptHash};

/// Native credential: a payment key hash or a script hash.
///
/// This is the offchain representation. The constructor-tagged on-chain
/// form (tag 0 for keys, tag 1 for scripts) lives in `cairn-plutus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Credential {
    Key(KeyHash),
    Script(ScriptHash),
}

impl Credential {
    /// The 28-byte hash regardless of variant.
    pub fn hash(&self) -> &Hash28 {
        match self {
            Credential::Key(h) => h,
            Credential::Script(h) => h,
        }
    }

    pub fn is_script(&self) -> bool {
        matches!(self, Credential::Script(_))
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Key(h) => write!(f, "key:{h}"),
            Credential::Script(h) => write!(f, "script:{h}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_accessor_ignores_variant() {
        let h = Hash28::from_raw([9u8; 28]);
        assert_eq!(Credential::Key(h).hash(), &h);
        assert_eq!(Credential::Script(h).hash(), &h);
    }

    #[test]
    fn display_tags_the_variant() {
        let h = Hash28::from_raw([0u8; 28]);
        assert!(Credential::Key(h).to_string().starts_with("key:"));
        assert!(Credential::Script(h).to_string().starts_with("script:"));
    }
}
