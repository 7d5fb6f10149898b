//! The crate contains structs that must be serializable and are passed to the
//! orchestration as one immutable record.
//! This crate should be self-contained and should not depend on other jetton crates.

pub mod allocation;
pub mod config;
pub mod config_sample;
pub mod logger;
pub mod metadata;
pub mod network;
pub mod retry;

pub use config::*;
pub use config_sample::*;
