use async_trait::async_trait;
use jetton_allocation::{NanoTokens, SupplyState};
use jetton_cell::Cell;
use mockall::automock;
use std::fmt;
use thiserror::Error;

/// An address on the ledger, kept exactly as written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Destination(String);

impl Destination {
    pub fn new(address: impl Into<String>) -> Self {
        Destination(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Destination {
    fn from(address: &str) -> Self {
        Destination::new(address)
    }
}

impl From<String> for Destination {
    fn from(address: String) -> Self {
        Destination(address)
    }
}

/// What the jetton master currently reports about itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MasterState {
    /// The content cell, if any has been set.
    pub content: Option<Cell>,
    pub total_supply: NanoTokens,
    pub max_supply: NanoTokens,
    pub reserved_total: NanoTokens,
    pub mintable: bool,
    /// Whether the supply parameters have been set on the master.
    pub configured: bool,
    pub owner: Destination,
}

impl MasterState {
    pub fn supply_state(&self) -> SupplyState {
        SupplyState {
            total_supply: self.total_supply,
            max_supply: self.max_supply,
            reserved_total: self.reserved_total,
        }
    }
}

/// A transaction sent to the master by its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    UpdateContent(Cell),
    Mint {
        receiver: Destination,
        amount: NanoTokens,
    },
    /// Disables minting for good.
    CloseMinting,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::UpdateContent(content) => write!(f, "update content to {}", content.hash()),
            Request::Mint { receiver, amount } => write!(f, "mint {amount} to {receiver}"),
            Request::CloseMinting => write!(f, "close minting"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger could not be reached. The same call may succeed later.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// A trait defining the two ways of interacting with a jetton master.
#[automock]
#[async_trait]
pub trait JettonMaster: Send + Sync {
    /// Reads the current state of the master.
    async fn query(&self) -> Result<MasterState, LedgerError>;

    /// Sends a transaction to the master.
    ///
    /// Returns once the transaction has been accepted for processing, which
    /// does not mean it has been applied yet.
    async fn submit(&self, request: Request) -> Result<(), LedgerError>;
}
