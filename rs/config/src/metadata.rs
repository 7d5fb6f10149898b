use serde::{Deserialize, Serialize};

/// Metadata to publish. When `onchain` is set it is stored in the content
/// cell itself; otherwise the content only points to `uri`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub uri: String,
    pub onchain: Option<OnchainConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainConfig {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

pub fn default_decimals() -> u8 {
    9
}
