use serde::{Deserialize, Serialize};

/// How long to wait for submitted transactions to show up on the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of times the master state is read before giving up.
    pub max_attempts: u32,
    /// Pause between two reads.
    pub poll_interval_secs: u64,
    /// Pause between two consecutive mint transactions.
    pub mint_spacing_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            poll_interval_secs: 5,
            mint_spacing_secs: 15,
        }
    }
}
