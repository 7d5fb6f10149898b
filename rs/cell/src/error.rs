use crate::dict::DictKey;
use std::fmt;
use thiserror::Error;

/// The bounded resource of a cell that an operation ran out of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Bits,
    Refs,
    Depth,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Bits => write!(f, "bits"),
            Resource::Refs => write!(f, "refs"),
            Resource::Depth => write!(f, "depth"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CellError {
    /// Storing would exceed the capacity of the cell. Nothing was stored.
    #[error("cell capacity exceeded: {used} {resource} used, {requested} more requested, limit is {limit}")]
    CapacityExceeded {
        resource: Resource,
        used: usize,
        requested: usize,
        limit: usize,
    },

    /// Loading would read past the end of the cell. Nothing was consumed.
    #[error("cell underflow: {requested} {resource} requested, only {remaining} remaining")]
    Underflow {
        resource: Resource,
        remaining: usize,
        requested: usize,
    },

    #[error("value {value} does not fit into {bits} bits")]
    ValueOutOfRange { value: u64, bits: u16 },

    #[error("cannot load {bits} bits into a 64-bit integer")]
    InvalidBitWidth { bits: u16 },

    #[error("duplicate dictionary key {0}")]
    DuplicateKey(DictKey),

    #[error("malformed cell: {0}")]
    Format(String),
}
