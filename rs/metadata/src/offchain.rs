use crate::error::{malformed, MetadataError};
use crate::OFFCHAIN_CONTENT_FLAG;
use jetton_cell::{Cell, CellBuilder};

/// Encodes a metadata URI: the off-chain flag byte followed by a reference
/// to the URI as a snake string.
pub fn encode_offchain(uri: &str) -> Result<Cell, MetadataError> {
    let mut builder = CellBuilder::new();
    builder
        .store_u8(OFFCHAIN_CONTENT_FLAG)?
        .store_string_ref_tail(uri)?;
    Ok(builder.build()?)
}

pub fn decode_offchain(cell: &Cell) -> Result<String, MetadataError> {
    let mut slice = cell.parse();
    let flag = slice.load_u8().map_err(malformed)?;
    if flag != OFFCHAIN_CONTENT_FLAG {
        return Err(MetadataError::Format(format!(
            "expected off-chain flag {OFFCHAIN_CONTENT_FLAG}, found {flag}"
        )));
    }
    let uri = slice
        .load_reference()
        .map_err(|_| MetadataError::Format("off-chain content has no URI reference".to_string()))?;
    uri.parse().load_string_tail().map_err(malformed)
}
