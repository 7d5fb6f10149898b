//! Ordinary cells of the jetton ledger.
//!
//! A cell is an immutable tree node holding at most [`MAX_BIT_LEN`] bits of
//! data and at most [`MAX_REF_COUNT`] references to child cells. Cells are
//! identified by their representation hash, which covers the data and the
//! hashes of all children, so two cells with equal hashes are interchangeable
//! and children can be shared freely between parents.
//!
//! Cells are created with a [`CellBuilder`] and read back with a
//! [`CellSlice`]:
//!
//! ```
//! use jetton_cell::CellBuilder;
//!
//! let mut child = CellBuilder::new();
//! child.store_bytes(b"hello")?;
//!
//! let mut root = CellBuilder::new();
//! root.store_uint(7, 3)?.store_reference(child.build()?)?;
//! let root = root.build()?;
//!
//! let mut slice = root.parse();
//! assert_eq!(slice.load_uint(3)?, 7);
//! assert_eq!(slice.load_reference()?.parse().load_bytes(5)?, b"hello");
//! # Ok::<(), jetton_cell::CellError>(())
//! ```
//!
//! The [`dict`] module builds a keyed content dictionary on top of cells.
#![forbid(unsafe_code)]

mod builder;
mod cell;
pub mod dict;
mod error;
mod slice;

#[cfg(test)]
mod tests;

pub use builder::CellBuilder;
pub use cell::{Cell, CellHash, EMPTY_CELL_HASH};
pub use dict::{DictKey, Dictionary};
pub use error::{CellError, Resource};
pub use slice::CellSlice;

/// Maximum number of data bits in a single cell.
pub const MAX_BIT_LEN: u16 = 1023;

/// Maximum number of child references in a single cell.
pub const MAX_REF_COUNT: usize = 4;

/// Maximum depth of a cell tree accepted by the ledger.
pub const MAX_DEPTH: u16 = 1024;

/// Number of whole bytes that fit into the data of an empty cell.
pub const MAX_BYTE_LEN: usize = (MAX_BIT_LEN / 8) as usize;
