use crate::NanoTokens;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("bucket weights add up to {sum} percent, expected 100")]
    InvalidWeights { sum: u32 },

    #[error("reserved amount {reserved} exceeds the total {total}")]
    NegativeRemaining {
        total: NanoTokens,
        reserved: NanoTokens,
    },

    /// The plan does not add up to the total. Nothing may be minted.
    #[error("allocation adds up to {}, expected {expected}", fmt_sum(.actual))]
    InvariantViolation {
        expected: NanoTokens,
        /// `None` if the sum itself overflows.
        actual: Option<NanoTokens>,
    },

    #[error("supply has already been minted: total supply is {total_supply}")]
    AlreadyMinted { total_supply: NanoTokens },
}

fn fmt_sum(sum: &Option<NanoTokens>) -> String {
    match sum {
        Some(sum) => sum.to_string(),
        None => "more than the largest amount".to_string(),
    }
}
