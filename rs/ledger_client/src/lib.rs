//! Talks to a jetton master through the [`JettonMaster`] boundary.
//!
//! The ledger itself, wallets and transaction signing live behind that trait.
//! This crate only decides what to submit and when a submitted change counts
//! as applied: every transaction is followed by polling the master state
//! under a [`RetryPolicy`] until the change is visible.

mod allocation;
mod config;
mod error;
mod master;
mod metadata;
mod retry;

pub use allocation::{AllocationReport, AllocationRun, MintRecord};
pub use config::{content_from_config, destinations_from_config, weights_from_config};
pub use error::ClientError;
pub use master::{Destination, JettonMaster, LedgerError, MasterState, MockJettonMaster, Request};
pub use metadata::{publish_metadata, read_content};
pub use retry::{poll_until, RetryPolicy};
