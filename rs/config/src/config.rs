use crate::allocation::Config as AllocationConfig;
use crate::logger::Config as LoggerConfig;
use crate::metadata::Config as MetadataConfig;
use crate::network::Config as NetworkConfig;
use crate::retry::Config as RetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything the tooling needs to talk to one jetton master.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub metadata: MetadataConfig,
    pub allocation: AllocationConfig,
    pub retry: RetryConfig,
    pub logger: LoggerConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] json5::Error),
}

impl Config {
    /// Parses a JSON5 document. Missing sections and fields take their
    /// default values.
    pub fn from_json5_str(s: &str) -> Result<Self, ConfigError> {
        Ok(json5::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json5_str(&contents)
    }
}
