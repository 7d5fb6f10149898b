//! Token metadata content cells.
//!
//! The content of a jetton master is a cell whose first byte tells how the
//! metadata is stored:
//!
//! * [`OFFCHAIN_CONTENT_FLAG`]: the cell references a snake string holding
//!   the URI of a JSON document.
//! * [`ONCHAIN_CONTENT_FLAG`]: the cell references a dictionary keyed by
//!   `sha256(field name)`, see [`MetadataField`].
//!
//! Decoding never returns a partially filled record.

mod error;
mod field;
mod offchain;
mod onchain;


pub use error::MetadataError;
pub use field::MetadataField;
pub use offchain::{decode_offchain, encode_offchain};
pub use onchain::{decode_onchain, encode_onchain, OnchainMetadata};

use jetton_cell::Cell;
use serde::{Deserialize, Serialize};

pub const OFFCHAIN_CONTENT_FLAG: u8 = 0;
pub const ONCHAIN_CONTENT_FLAG: u8 = 1;

/// Metadata of a jetton, in either of its two layouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JettonContent {
    Offchain { uri: String },
    Onchain(OnchainMetadata),
}

impl JettonContent {
    pub fn encode(&self) -> Result<Cell, MetadataError> {
        match self {
            JettonContent::Offchain { uri } => encode_offchain(uri),
            JettonContent::Onchain(metadata) => encode_onchain(metadata),
        }
    }

    /// Decodes a content cell of either layout, dispatching on its flag byte.
    pub fn decode(cell: &Cell) -> Result<Self, MetadataError> {
        let flag = cell.parse().load_u8().map_err(error::malformed)?;
        match flag {
            OFFCHAIN_CONTENT_FLAG => {
                decode_offchain(cell).map(|uri| JettonContent::Offchain { uri })
            }
            ONCHAIN_CONTENT_FLAG => decode_onchain(cell).map(JettonContent::Onchain),
            other => Err(MetadataError::Format(format!(
                "unknown content layout flag {other}"
            ))),
        }
    }
}
