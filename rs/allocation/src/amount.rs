use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of tokens in their smallest unit. One token is 10^9 nano-tokens.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NanoTokens(u128);

impl NanoTokens {
    pub const ZERO: Self = NanoTokens(0);

    /// Number of decimal places of a whole token.
    pub const DECIMALS: u32 = 9;

    pub const NANOS_PER_TOKEN: u128 = 10u128.pow(Self::DECIMALS);

    pub const fn new(nanos: u128) -> Self {
        NanoTokens(nanos)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    pub const fn from_whole_tokens(tokens: u64) -> Self {
        NanoTokens(tokens as u128 * Self::NANOS_PER_TOKEN)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(NanoTokens)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(NanoTokens)
    }
}

impl From<u128> for NanoTokens {
    fn from(nanos: u128) -> Self {
        NanoTokens(nanos)
    }
}

impl From<NanoTokens> for u128 {
    fn from(amount: NanoTokens) -> Self {
        amount.0
    }
}

/// Formats the amount in whole tokens without losing precision, e.g.
/// `66000000000` or `0.000000001`.
impl fmt::Display for NanoTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::NANOS_PER_TOKEN;
        let fraction = self.0 % Self::NANOS_PER_TOKEN;
        if fraction == 0 {
            return write!(f, "{whole}");
        }
        let fraction = format!("{fraction:09}");
        write!(f, "{whole}.{}", fraction.trim_end_matches('0'))
    }
}
