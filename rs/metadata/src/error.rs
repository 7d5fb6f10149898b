use crate::field::MetadataField;
use jetton_cell::CellError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The content cell does not have the expected layout.
    #[error("malformed content: {0}")]
    Format(String),

    #[error("on-chain metadata has no `{0}` field")]
    MissingField(MetadataField),

    /// Building the content cell failed.
    #[error(transparent)]
    Cell(#[from] CellError),
}

/// Maps a failure while reading a content cell to a format error: whatever
/// went wrong, the cell did not have the layout the decoder expects.
pub(crate) fn malformed(err: CellError) -> MetadataError {
    match err {
        CellError::Format(msg) => MetadataError::Format(msg),
        other => MetadataError::Format(other.to_string()),
    }
}
