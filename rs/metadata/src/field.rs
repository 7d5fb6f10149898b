use jetton_cell::DictKey;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Fields of on-chain metadata, in the order they are written.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Name,
    Symbol,
    Description,
    Image,
    Decimals,
}

impl MetadataField {
    /// Returns the dictionary key of the field, the SHA-256 digest of its name.
    pub fn key(self) -> DictKey {
        let name: &'static str = self.into();
        DictKey::from_sha256(name.as_bytes())
    }
}
