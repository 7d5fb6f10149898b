use crate::allocation::MintRecord;
use crate::master::{Destination, LedgerError};
use jetton_allocation::{AllocationError, NanoTokens};
use jetton_metadata::MetadataError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("the master has not been configured with its supply parameters")]
    NotConfigured,

    #[error("minting is disabled on the master")]
    MintingDisabled,

    #[error("the master is owned by {actual}, expected {expected}")]
    OwnerMismatch {
        expected: Destination,
        actual: Destination,
    },

    #[error("the plan allocates {plan_total} but the max supply is {max_supply}")]
    PlanMismatch {
        plan_total: NanoTokens,
        max_supply: NanoTokens,
    },

    #[error("no destination configured for bucket {label}")]
    MissingDestination { label: String },

    /// A mint was rejected after `minted` had already been submitted.
    #[error("minting {label} failed after {} successful mints: {source}", .minted.len())]
    MintFailed {
        label: String,
        minted: Vec<MintRecord>,
        source: LedgerError,
    },

    #[error("{what} not visible on the ledger after {attempts} attempts")]
    NotConfirmed {
        what: String,
        attempts: u32,
        last_error: Option<LedgerError>,
    },
}
