#![allow(dead_code)]

use async_trait::async_trait;
use jetton_allocation::NanoTokens;
use jetton_ledger_client::{Destination, JettonMaster, LedgerError, MasterState, Request};
use std::sync::Mutex;

pub const OWNER: &str = "EQCY8a7rHtvsyCpw-ZrwG4lkkhU79ppKQVT1OIIGrkXSN9wI";

/// A master that has been deployed and configured but never minted.
pub fn fresh_state() -> MasterState {
    MasterState {
        content: None,
        total_supply: NanoTokens::ZERO,
        max_supply: NanoTokens::new(66_000_000_000),
        reserved_total: NanoTokens::new(6_600_000_000),
        mintable: true,
        configured: true,
        owner: Destination::new(OWNER),
    }
}

/// An in-memory master applying requests the way the contract does.
///
/// Every accepted request becomes visible to `query` only after `lag`
/// further reads.
pub struct FakeMaster {
    inner: Mutex<Inner>,
    lag: u32,
    reject_mint: Option<usize>,
    reject_all: bool,
}

struct Inner {
    applied: MasterState,
    visible: MasterState,
    hidden_reads: u32,
    submitted: Vec<Request>,
    mints: usize,
}

impl FakeMaster {
    pub fn new(state: MasterState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                applied: state.clone(),
                visible: state,
                hidden_reads: 0,
                submitted: Vec::new(),
                mints: 0,
            }),
            lag: 0,
            reject_mint: None,
            reject_all: false,
        }
    }

    pub fn with_lag(mut self, lag: u32) -> Self {
        self.lag = lag;
        self
    }

    /// Rejects the mint with the given zero-based index.
    pub fn rejecting_mint(mut self, index: usize) -> Self {
        self.reject_mint = Some(index);
        self
    }

    pub fn rejecting_everything(mut self) -> Self {
        self.reject_all = true;
        self
    }

    pub fn submitted(&self) -> Vec<Request> {
        self.inner.lock().unwrap().submitted.clone()
    }

    pub fn state(&self) -> MasterState {
        self.inner.lock().unwrap().applied.clone()
    }
}

#[async_trait]
impl JettonMaster for FakeMaster {
    async fn query(&self) -> Result<MasterState, LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.hidden_reads > 0 {
            inner.hidden_reads -= 1;
        } else {
            inner.visible = inner.applied.clone();
        }
        Ok(inner.visible.clone())
    }

    async fn submit(&self, request: Request) -> Result<(), LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        if self.reject_all {
            return Err(LedgerError::Rejected("sender is not the owner".to_string()));
        }
        match &request {
            Request::UpdateContent(content) => inner.applied.content = Some(content.clone()),
            Request::Mint { amount, .. } => {
                if self.reject_mint == Some(inner.mints) {
                    return Err(LedgerError::Rejected("insufficient gas".to_string()));
                }
                inner.mints += 1;
                inner.applied.total_supply = inner
                    .applied
                    .total_supply
                    .checked_add(*amount)
                    .expect("supply overflow");
            }
            Request::CloseMinting => inner.applied.mintable = false,
        }
        inner.submitted.push(request);
        inner.hidden_reads = self.lag;
        Ok(())
    }
}
