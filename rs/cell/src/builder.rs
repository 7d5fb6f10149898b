use crate::cell::Cell;
use crate::error::{CellError, Resource};
use crate::{MAX_BIT_LEN, MAX_BYTE_LEN, MAX_REF_COUNT};

/// Accumulates bits and references for a single cell.
///
/// Every `store_*` method either stores everything it was asked to or fails
/// and leaves the builder untouched.
#[derive(Clone, Debug)]
pub struct CellBuilder {
    data: [u8; 128],
    bit_len: u16,
    references: Vec<Cell>,
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuilder {
    pub fn new() -> Self {
        Self {
            data: [0; 128],
            bit_len: 0,
            references: Vec::with_capacity(MAX_REF_COUNT),
        }
    }

    /// Returns the data size of the cell being built in bits.
    pub fn bit_len(&self) -> u16 {
        self.bit_len
    }

    pub fn spare_bits_capacity(&self) -> u16 {
        MAX_BIT_LEN - self.bit_len
    }

    pub fn spare_refs_capacity(&self) -> usize {
        MAX_REF_COUNT - self.references.len()
    }

    pub fn references(&self) -> &[Cell] {
        &self.references
    }

    fn ensure_bits(&self, requested: usize) -> Result<(), CellError> {
        if requested > self.spare_bits_capacity() as usize {
            return Err(CellError::CapacityExceeded {
                resource: Resource::Bits,
                used: self.bit_len as usize,
                requested,
                limit: MAX_BIT_LEN as usize,
            });
        }
        Ok(())
    }

    fn ensure_refs(&self, requested: usize) -> Result<(), CellError> {
        if requested > self.spare_refs_capacity() {
            return Err(CellError::CapacityExceeded {
                resource: Resource::Refs,
                used: self.references.len(),
                requested,
                limit: MAX_REF_COUNT,
            });
        }
        Ok(())
    }

    // Capacity must be checked by the caller.
    fn push_bit(&mut self, bit: bool) {
        if bit {
            let q = (self.bit_len / 8) as usize;
            let r = self.bit_len % 8;
            self.data[q] |= 1 << (7 - r);
        }
        self.bit_len += 1;
    }

    pub fn store_bit(&mut self, bit: bool) -> Result<&mut Self, CellError> {
        self.ensure_bits(1)?;
        self.push_bit(bit);
        Ok(self)
    }

    /// Appends the lowest `bits` bits of `value`, most significant bit first.
    ///
    /// Widths above 64 are zero-extended on the left. Fails if `value` needs
    /// more than `bits` bits.
    pub fn store_uint(&mut self, value: u64, bits: u16) -> Result<&mut Self, CellError> {
        if bits < 64 && value >> bits != 0 {
            return Err(CellError::ValueOutOfRange { value, bits });
        }
        self.ensure_bits(bits as usize)?;
        for i in (0..bits).rev() {
            self.push_bit(i < 64 && (value >> i) & 1 == 1);
        }
        Ok(self)
    }

    pub fn store_u8(&mut self, value: u8) -> Result<&mut Self, CellError> {
        self.store_uint(value as u64, 8)
    }

    pub fn store_u256(&mut self, value: &[u8; 32]) -> Result<&mut Self, CellError> {
        self.store_bytes(value)
    }

    pub fn store_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, CellError> {
        self.ensure_bits(bytes.len().saturating_mul(8))?;
        if self.bit_len % 8 == 0 {
            let start = (self.bit_len / 8) as usize;
            self.data[start..start + bytes.len()].copy_from_slice(bytes);
            self.bit_len += (bytes.len() * 8) as u16;
        } else {
            for byte in bytes {
                for i in (0..8).rev() {
                    self.push_bit((byte >> i) & 1 == 1);
                }
            }
        }
        Ok(self)
    }

    /// Appends a reference to `cell`. Fails on the fifth reference.
    pub fn store_reference(&mut self, cell: Cell) -> Result<&mut Self, CellError> {
        self.ensure_refs(1)?;
        self.references.push(cell);
        Ok(self)
    }

    /// Stores the UTF-8 bytes of `value` as a snake string: as many whole
    /// bytes as fit into this cell, the rest in a chain of child cells where
    /// each cell holds up to [`MAX_BYTE_LEN`] bytes and references the next.
    pub fn store_string_tail(&mut self, value: &str) -> Result<&mut Self, CellError> {
        let bytes = value.as_bytes();
        let fits = (self.spare_bits_capacity() / 8) as usize;
        if bytes.len() <= fits {
            return self.store_bytes(bytes);
        }
        self.ensure_refs(1)?;
        let tail = snake_chain(&bytes[fits..])?;
        self.store_bytes(&bytes[..fits])?;
        self.store_reference(tail)
    }

    /// Stores `value` as a snake string in a new child cell and references it.
    pub fn store_string_ref_tail(&mut self, value: &str) -> Result<&mut Self, CellError> {
        self.ensure_refs(1)?;
        let cell = snake_chain(value.as_bytes())?;
        self.store_reference(cell)
    }

    pub fn build(self) -> Result<Cell, CellError> {
        let byte_len = (self.bit_len as usize + 7) / 8;
        Cell::new(self.data[..byte_len].to_vec(), self.bit_len, self.references)
    }
}

/// Builds a chain of cells holding `bytes` in order, filling each cell
/// completely before moving on to the next one.
fn snake_chain(bytes: &[u8]) -> Result<Cell, CellError> {
    let mut next: Option<Cell> = None;
    for chunk in bytes.chunks(MAX_BYTE_LEN).rev() {
        let mut builder = CellBuilder::new();
        builder.store_bytes(chunk)?;
        if let Some(cell) = next.take() {
            builder.store_reference(cell)?;
        }
        next = Some(builder.build()?);
    }
    match next {
        Some(cell) => Ok(cell),
        None => CellBuilder::new().build(),
    }
}
