use serde::{Deserialize, Serialize};
use slog::Level;
use std::path::PathBuf;

/// Represents the required log level defined in the `LoggerConfig`.
//
// `slog::Level` does not implement `Deserialize`, so it goes through a remote
// derive (https://serde.rs/remote-derive.html).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(remote = "Level")]
#[serde(rename_all = "snake_case")]
pub enum LevelDef {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

pub fn default_logtarget() -> LogTarget {
    LogTarget::Stdout
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(with = "LevelDef")]
    pub level: Level,
    #[serde(default = "default_logtarget")]
    pub target: LogTarget,
    /// If set to `false`, the logging thread will _not_ block even if the queue
    /// is full, and messages are dropped instead.
    #[serde(default = "default_block_on_overflow")]
    pub block_on_overflow: bool,
}

/// Messages are logged asynchronously. By default the caller blocks while the
/// queue is full.
fn default_block_on_overflow() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            target: default_logtarget(),
            block_on_overflow: default_block_on_overflow(),
        }
    }
}
