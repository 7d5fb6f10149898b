use crate::{AllocationError, NanoTokens, AIRDROP, TEAM, TOTAL_WEIGHT_PERCENT, TREASURY};
use serde::{Deserialize, Serialize};

/// A bucket that receives a fixed amount before anything is split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedBucket {
    pub label: String,
    pub amount: NanoTokens,
}

/// A bucket that receives a share of what is left after the reserve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedBucket {
    pub label: String,
    pub weight_percent: u8,
}

impl WeightedBucket {
    pub fn new(label: impl Into<String>, weight_percent: u8) -> Self {
        Self {
            label: label.into(),
            weight_percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub label: String,
    pub amount: NanoTokens,
}

/// The weights used for the initial allocation: treasury 50%, team 30% and
/// airdrop 20%.
pub fn default_weights() -> Vec<WeightedBucket> {
    vec![
        WeightedBucket::new(TREASURY, 50),
        WeightedBucket::new(TEAM, 30),
        WeightedBucket::new(AIRDROP, 20),
    ]
}

/// The amounts to mint, reserved bucket first and then the weighted buckets
/// in the order they were given.
///
/// A plan is only ever produced by [`split`] and always sums to its total.
/// It cannot be cloned: executing a plan consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct AllocationPlan {
    total: NanoTokens,
    allocations: Vec<Allocation>,
    absorber: String,
    remainder: NanoTokens,
}

impl AllocationPlan {
    pub fn total(&self) -> NanoTokens {
        self.total
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Label of the bucket that received the rounding remainder.
    pub fn absorber(&self) -> &str {
        &self.absorber
    }

    /// What was left over after flooring the weighted shares.
    pub fn remainder(&self) -> NanoTokens {
        self.remainder
    }

    pub fn amount_of(&self, label: &str) -> Option<NanoTokens> {
        self.allocations
            .iter()
            .find(|allocation| allocation.label == label)
            .map(|allocation| allocation.amount)
    }

    pub fn into_allocations(self) -> Vec<Allocation> {
        self.allocations
    }
}

/// Splits `total` into `reserved` and the `weighted` buckets.
///
/// Fails if the reserve exceeds the total, if the weights do not add up to
/// 100 percent (an empty list adds up to 0), or if the result does not sum to
/// `total`. Any `u128` total can be split.
pub fn split(
    total: NanoTokens,
    reserved: ReservedBucket,
    weighted: &[WeightedBucket],
) -> Result<AllocationPlan, AllocationError> {
    let remaining = total
        .checked_sub(reserved.amount)
        .ok_or(AllocationError::NegativeRemaining {
            total,
            reserved: reserved.amount,
        })?;

    let sum: u32 = weighted
        .iter()
        .map(|bucket| bucket.weight_percent as u32)
        .sum();
    if sum != TOTAL_WEIGHT_PERCENT {
        return Err(AllocationError::InvalidWeights { sum });
    }

    let mut allocations = Vec::with_capacity(weighted.len() + 1);
    allocations.push(Allocation {
        label: reserved.label,
        amount: reserved.amount,
    });

    let mut distributed = NanoTokens::ZERO;
    for bucket in weighted {
        let amount = floor_share(remaining, bucket.weight_percent);
        // Floored shares of `remaining` never add up to more than `remaining`.
        distributed = distributed
            .checked_add(amount)
            .ok_or(AllocationError::InvariantViolation {
                expected: total,
                actual: None,
            })?;
        allocations.push(Allocation {
            label: bucket.label.clone(),
            amount,
        });
    }

    let remainder = remaining
        .checked_sub(distributed)
        .ok_or(AllocationError::InvariantViolation {
            expected: total,
            actual: reserved.amount.checked_add(distributed),
        })?;

    // Largest weight, first one on ties. The weights add up to 100 so the
    // list is not empty.
    let mut absorber = 0;
    for (index, bucket) in weighted.iter().enumerate() {
        if bucket.weight_percent > weighted[absorber].weight_percent {
            absorber = index;
        }
    }
    let absorbing = &mut allocations[absorber + 1];
    absorbing.amount = absorbing.amount.checked_add(remainder).ok_or(
        AllocationError::InvariantViolation {
            expected: total,
            actual: None,
        },
    )?;
    let absorber = absorbing.label.clone();

    let actual = allocations
        .iter()
        .try_fold(NanoTokens::ZERO, |sum, allocation| {
            sum.checked_add(allocation.amount)
        });
    if actual != Some(total) {
        return Err(AllocationError::InvariantViolation {
            expected: total,
            actual,
        });
    }

    Ok(AllocationPlan {
        total,
        allocations,
        absorber,
        remainder,
    })
}

/// Returns `floor(amount * weight_percent / 100)` for any amount.
///
/// With `amount = 100 * q + m`, the share is `q * w + floor(m * w / 100)`.
/// Since `w <= 100`, `q * w <= amount` and `m * w < 10_000`, so nothing
/// overflows.
fn floor_share(amount: NanoTokens, weight_percent: u8) -> NanoTokens {
    let total_weight = TOTAL_WEIGHT_PERCENT as u128;
    let weight = weight_percent as u128;
    let quotient = amount.get() / total_weight;
    let modulus = amount.get() % total_weight;
    NanoTokens::new(quotient * weight + modulus * weight / total_weight)
}

/// Supply figures of a jetton master as reported by the ledger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyState {
    pub total_supply: NanoTokens,
    pub max_supply: NanoTokens,
    /// Amount set aside for the burn reserve out of `max_supply`.
    pub reserved_total: NanoTokens,
}

/// Plans the one-time initial allocation of the whole `max_supply`, with
/// `reserved_total` going to the bucket labeled `reserved_label`.
///
/// Refuses to plan anything once tokens have been minted.
pub fn plan_initial_allocation(
    state: &SupplyState,
    reserved_label: &str,
    weighted: &[WeightedBucket],
) -> Result<AllocationPlan, AllocationError> {
    if !state.total_supply.is_zero() {
        return Err(AllocationError::AlreadyMinted {
            total_supply: state.total_supply,
        });
    }
    split(
        state.max_supply,
        ReservedBucket {
            label: reserved_label.to_string(),
            amount: state.reserved_total,
        },
        weighted,
    )
}
