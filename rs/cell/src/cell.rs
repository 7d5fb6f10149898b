use crate::error::{CellError, Resource};
use crate::slice::CellSlice;
use crate::MAX_DEPTH;
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Representation hash of a cell.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct CellHash(pub [u8; 32]);

impl CellHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CellHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for CellHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellHash({})", hex::encode(self.0))
    }
}

/// Hash of the cell without data and references.
pub const EMPTY_CELL_HASH: CellHash = CellHash([
    0x96, 0xa2, 0x96, 0xd2, 0x24, 0xf2, 0x85, 0xc6, 0x7b, 0xee, 0x93, 0xc3, 0x0f, 0x8a, 0x30, 0x91,
    0x57, 0xf0, 0xda, 0xa3, 0x5d, 0xc5, 0xb8, 0x7e, 0x41, 0x0b, 0x78, 0x63, 0x0a, 0x09, 0xcf, 0xc7,
]);

/// An immutable, shareable cell.
///
/// Cloning a `Cell` is cheap: it only bumps a reference count. Equality and
/// hashing go through the representation hash.
#[derive(Clone)]
pub struct Cell(Arc<CellInner>);

struct CellInner {
    // `ceil(bit_len / 8)` bytes, bits past `bit_len` are zero.
    data: Vec<u8>,
    bit_len: u16,
    references: Vec<Cell>,
    hash: CellHash,
    depth: u16,
}

impl Cell {
    /// Finalizes a cell. Callers guarantee the bit and reference bounds, the
    /// depth bound is checked here because it depends on the children.
    pub(crate) fn new(
        mut data: Vec<u8>,
        bit_len: u16,
        references: Vec<Cell>,
    ) -> Result<Self, CellError> {
        data.truncate((bit_len as usize + 7) / 8);

        let depth = match references.iter().map(Cell::depth).max() {
            None => 0,
            Some(max_child_depth) => {
                if max_child_depth >= MAX_DEPTH {
                    return Err(CellError::CapacityExceeded {
                        resource: Resource::Depth,
                        used: max_child_depth as usize,
                        requested: 1,
                        limit: MAX_DEPTH as usize,
                    });
                }
                max_child_depth + 1
            }
        };

        let hash = representation_hash(&data, bit_len, &references);
        Ok(Cell(Arc::new(CellInner {
            data,
            bit_len,
            references,
            hash,
            depth,
        })))
    }

    /// Returns the cell without data and references.
    pub fn empty() -> Self {
        Cell(Arc::new(CellInner {
            data: Vec::new(),
            bit_len: 0,
            references: Vec::new(),
            hash: EMPTY_CELL_HASH,
            depth: 0,
        }))
    }

    /// Returns the raw data bytes. Bits past [`Cell::bit_len`] are zero.
    pub fn data(&self) -> &[u8] {
        &self.0.data
    }

    pub fn bit_len(&self) -> u16 {
        self.0.bit_len
    }

    pub fn references(&self) -> &[Cell] {
        &self.0.references
    }

    pub fn reference(&self, index: usize) -> Option<&Cell> {
        self.0.references.get(index)
    }

    pub fn reference_count(&self) -> usize {
        self.0.references.len()
    }

    pub fn hash(&self) -> CellHash {
        self.0.hash
    }

    /// Returns 0 for a cell without references, and one more than the
    /// deepest child otherwise.
    pub fn depth(&self) -> u16 {
        self.0.depth
    }

    pub fn is_empty(&self) -> bool {
        self.0.bit_len == 0 && self.0.references.is_empty()
    }

    /// Starts reading the cell from its first bit and first reference.
    pub fn parse(&self) -> CellSlice<'_> {
        CellSlice::new(self)
    }

    pub(crate) fn bit(&self, index: u16) -> bool {
        let byte = self.0.data[(index / 8) as usize];
        (byte >> (7 - index % 8)) & 1 == 1
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.0.hash == other.0.hash
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("bit_len", &self.0.bit_len)
            .field("references", &self.0.references.len())
            .field("hash", &self.0.hash)
            .finish()
    }
}

/// Prints the whole tree the way block explorers do: `x{...}` per cell with
/// children on the following lines, indented by one space per level.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, 0, f)
    }
}

fn write_tree(cell: &Cell, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:indent$}x{{{}}}", "", data_to_hex(cell), indent = level)?;
    for child in cell.references() {
        writeln!(f)?;
        write_tree(child, level + 1, f)?;
    }
    Ok(())
}

fn data_to_hex(cell: &Cell) -> String {
    let bit_len = cell.bit_len() as usize;
    let mut hex = hex::encode_upper(padded_data(cell.data(), cell.bit_len()));
    if bit_len % 4 == 0 {
        hex.truncate(bit_len / 4);
        hex
    } else {
        // The completion tag sits in the last nibble unless the tail is at
        // most three bits long, in which case the last nibble is padding.
        if bit_len % 8 < 4 {
            hex.pop();
        }
        hex.push('_');
        hex
    }
}

/// Returns the data with the completion tag appended: a single `1` bit right
/// after the last data bit when the length is not a multiple of eight.
pub(crate) fn padded_data(data: &[u8], bit_len: u16) -> Vec<u8> {
    let mut padded = data.to_vec();
    let rem = bit_len % 8;
    if rem != 0 {
        if let Some(last) = padded.last_mut() {
            *last |= 1 << (7 - rem);
        }
    }
    padded
}

fn descriptors(bit_len: u16, reference_count: usize) -> [u8; 2] {
    let d1 = reference_count as u8;
    let d2 = (bit_len / 8 + (bit_len + 7) / 8) as u8;
    [d1, d2]
}

fn representation_hash(data: &[u8], bit_len: u16, references: &[Cell]) -> CellHash {
    let mut hasher = Sha256::new();
    hasher.update(descriptors(bit_len, references.len()));
    hasher.update(padded_data(data, bit_len));
    for child in references {
        hasher.update(child.depth().to_be_bytes());
    }
    for child in references {
        hasher.update(child.hash().as_bytes());
    }
    CellHash(hasher.finalize().into())
}
