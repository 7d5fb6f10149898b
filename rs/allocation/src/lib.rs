//! Exact integer split of a token supply across allocation buckets.
//!
//! An allocation sets aside a fixed reserve and divides what is left between
//! buckets weighted in whole percent. All amounts are [`NanoTokens`] and the
//! split never uses floating point: each weighted bucket gets
//! `floor(remaining * weight / 100)` and the rounding remainder goes to the
//! bucket with the largest weight. The resulting [`AllocationPlan`] always
//! sums to the requested total; this is re-checked before a plan is handed
//! out because minting it cannot be undone.

mod amount;
mod error;
mod plan;


pub use amount::NanoTokens;
pub use error::AllocationError;
pub use plan::{
    default_weights, plan_initial_allocation, split, Allocation, AllocationPlan, ReservedBucket,
    SupplyState, WeightedBucket,
};

/// Label of the bucket holding the burn reserve.
pub const BURN_RESERVE: &str = "BURN_RESERVE";
pub const TREASURY: &str = "TREASURY";
pub const TEAM: &str = "TEAM";
pub const AIRDROP: &str = "AIRDROP";

/// Weighted buckets must add up to exactly this many percent.
pub const TOTAL_WEIGHT_PERCENT: u32 = 100;
