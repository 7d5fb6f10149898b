use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the initial supply is split, and where each bucket is minted to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bucket receiving the reserve reported by the master.
    pub reserved_label: String,
    /// Buckets sharing the rest of the supply. Weights are whole percent.
    pub weights: Vec<WeightConfig>,
    /// Receiving wallet per bucket label.
    pub destinations: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub label: String,
    pub weight_percent: u8,
}

impl WeightConfig {
    fn new(label: &str, weight_percent: u8) -> Self {
        Self {
            label: label.to_string(),
            weight_percent,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reserved_label: "BURN_RESERVE".to_string(),
            weights: vec![
                WeightConfig::new("TREASURY", 50),
                WeightConfig::new("TEAM", 30),
                WeightConfig::new("AIRDROP", 20),
            ],
            destinations: BTreeMap::new(),
        }
    }
}
