use crate::error::ClientError;
use crate::master::{Destination, JettonMaster, MasterState, Request};
use crate::retry::{poll_until, RetryPolicy};
use jetton_allocation::{
    plan_initial_allocation, AllocationError, AllocationPlan, NanoTokens, WeightedBucket,
};
use slog::{info, o, warn, Logger};
use std::collections::BTreeMap;
use std::time::Duration;

/// A mint that was submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRecord {
    pub label: String,
    pub receiver: Destination,
    pub amount: NanoTokens,
}

/// Outcome of a completed initial allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationReport {
    pub mints: Vec<MintRecord>,
    /// Total supply once every mint was applied.
    pub total_supply: NanoTokens,
    /// Buckets that were skipped because their amount is zero.
    pub skipped: Vec<String>,
}

/// Mints the initial supply of a master and then closes minting for good.
pub struct AllocationRun<'a, M: ?Sized> {
    master: &'a M,
    owner: Destination,
    destinations: BTreeMap<String, Destination>,
    policy: RetryPolicy,
    mint_spacing: Duration,
    log: Logger,
}

impl<'a, M> AllocationRun<'a, M>
where
    M: JettonMaster + ?Sized,
{
    /// `owner` is the wallet the mints are sent from; the run refuses to
    /// start if the master is owned by anyone else. `destinations` maps
    /// bucket labels to receiving wallets.
    pub fn new(
        master: &'a M,
        owner: Destination,
        destinations: BTreeMap<String, Destination>,
        policy: RetryPolicy,
        log: Logger,
    ) -> Self {
        Self {
            master,
            owner,
            destinations,
            policy,
            mint_spacing: Duration::ZERO,
            log: log.new(o!("component" => "allocation")),
        }
    }

    /// Pause between two consecutive mint transactions.
    pub fn with_mint_spacing(mut self, mint_spacing: Duration) -> Self {
        self.mint_spacing = mint_spacing;
        self
    }

    /// Reads the master and plans the allocation of its max supply without
    /// submitting anything.
    pub async fn prepare(
        &self,
        reserved_label: &str,
        weights: &[WeightedBucket],
    ) -> Result<AllocationPlan, ClientError> {
        let state = self.master.query().await?;
        self.check_preconditions(&state)?;
        let plan = plan_initial_allocation(&state.supply_state(), reserved_label, weights)?;
        for allocation in plan.allocations() {
            info!(self.log, "Planned allocation"; "bucket" => &allocation.label, "amount" => %allocation.amount);
        }
        Ok(plan)
    }

    /// Mints every non-zero bucket of `plan` in order, waits for the supply
    /// to show up and closes minting.
    ///
    /// All checks happen before the first transaction: if any fails, nothing
    /// is submitted.
    pub async fn execute(&self, plan: AllocationPlan) -> Result<AllocationReport, ClientError> {
        let state = self.master.query().await?;
        self.check_preconditions(&state)?;
        if plan.total() != state.max_supply {
            return Err(ClientError::PlanMismatch {
                plan_total: plan.total(),
                max_supply: state.max_supply,
            });
        }

        let total = plan.total();
        let mut mints = Vec::new();
        let mut skipped = Vec::new();
        for allocation in plan.into_allocations() {
            if allocation.amount.is_zero() {
                skipped.push(allocation.label);
                continue;
            }
            let receiver = self
                .destinations
                .get(&allocation.label)
                .cloned()
                .ok_or_else(|| ClientError::MissingDestination {
                    label: allocation.label.clone(),
                })?;
            mints.push(MintRecord {
                label: allocation.label,
                receiver,
                amount: allocation.amount,
            });
        }

        let mut submitted: Vec<MintRecord> = Vec::with_capacity(mints.len());
        for (index, mint) in mints.into_iter().enumerate() {
            if index > 0 && !self.mint_spacing.is_zero() {
                tokio::time::sleep(self.mint_spacing).await;
            }
            info!(self.log, "Minting"; "bucket" => &mint.label, "receiver" => %mint.receiver, "amount" => %mint.amount);
            let request = Request::Mint {
                receiver: mint.receiver.clone(),
                amount: mint.amount,
            };
            if let Err(source) = self.master.submit(request).await {
                warn!(self.log, "Mint rejected"; "bucket" => &mint.label, "error" => %source);
                return Err(ClientError::MintFailed {
                    label: mint.label,
                    minted: submitted,
                    source,
                });
            }
            submitted.push(mint);
        }

        let state = poll_until(self.master, &self.policy, &self.log, "initial allocation", |state| {
            state.total_supply >= total
        })
        .await?;
        info!(self.log, "Initial allocation applied"; "total_supply" => %state.total_supply);

        self.master.submit(Request::CloseMinting).await?;
        poll_until(self.master, &self.policy, &self.log, "minting close", |state| {
            !state.mintable
        })
        .await?;
        info!(self.log, "Minting closed");

        Ok(AllocationReport {
            mints: submitted,
            total_supply: state.total_supply,
            skipped,
        })
    }

    fn check_preconditions(&self, state: &MasterState) -> Result<(), ClientError> {
        if !state.configured {
            return Err(ClientError::NotConfigured);
        }
        if !state.mintable {
            return Err(ClientError::MintingDisabled);
        }
        if !state.total_supply.is_zero() {
            return Err(AllocationError::AlreadyMinted {
                total_supply: state.total_supply,
            }
            .into());
        }
        if state.owner != self.owner {
            return Err(ClientError::OwnerMismatch {
                expected: self.owner.clone(),
                actual: state.owner.clone(),
            });
        }
        Ok(())
    }
}
