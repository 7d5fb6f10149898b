use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
}

/// Identity of the jetton master being managed. Addresses are kept exactly
/// as written; they are never parsed here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    pub master_address: String,
    /// The wallet allowed to mint and to update the content.
    pub owner_address: String,
}
