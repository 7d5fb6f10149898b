use crate::cell::Cell;
use crate::error::{CellError, Resource};

/// A read cursor over the data and references of a cell.
///
/// Every `load_*` method either consumes everything it was asked to or fails
/// and leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct CellSlice<'a> {
    cell: &'a Cell,
    bits_offset: u16,
    refs_offset: usize,
}

impl<'a> CellSlice<'a> {
    pub fn new(cell: &'a Cell) -> Self {
        Self {
            cell,
            bits_offset: 0,
            refs_offset: 0,
        }
    }

    pub fn cell(&self) -> &'a Cell {
        self.cell
    }

    pub fn remaining_bits(&self) -> u16 {
        self.cell.bit_len() - self.bits_offset
    }

    pub fn remaining_refs(&self) -> usize {
        self.cell.reference_count() - self.refs_offset
    }

    /// Returns true if neither bits nor references are left.
    pub fn is_empty(&self) -> bool {
        self.remaining_bits() == 0 && self.remaining_refs() == 0
    }

    fn ensure_bits(&self, requested: usize) -> Result<(), CellError> {
        let remaining = self.remaining_bits() as usize;
        if requested > remaining {
            return Err(CellError::Underflow {
                resource: Resource::Bits,
                remaining,
                requested,
            });
        }
        Ok(())
    }

    // Availability must be checked by the caller.
    fn next_bit(&mut self) -> bool {
        let bit = self.cell.bit(self.bits_offset);
        self.bits_offset += 1;
        bit
    }

    pub fn load_bit(&mut self) -> Result<bool, CellError> {
        self.ensure_bits(1)?;
        Ok(self.next_bit())
    }

    /// Reads `bits` bits as an unsigned integer, most significant bit first.
    pub fn load_uint(&mut self, bits: u16) -> Result<u64, CellError> {
        if bits > 64 {
            return Err(CellError::InvalidBitWidth { bits });
        }
        self.ensure_bits(bits as usize)?;
        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | self.next_bit() as u64;
        }
        Ok(value)
    }

    pub fn load_u8(&mut self) -> Result<u8, CellError> {
        self.load_uint(8).map(|value| value as u8)
    }

    pub fn load_bytes(&mut self, len: usize) -> Result<Vec<u8>, CellError> {
        self.ensure_bits(len.saturating_mul(8))?;
        let bytes = if self.bits_offset % 8 == 0 {
            let start = (self.bits_offset / 8) as usize;
            self.bits_offset += (len * 8) as u16;
            self.cell.data()[start..start + len].to_vec()
        } else {
            (0..len)
                .map(|_| (0..8).fold(0u8, |byte, _| (byte << 1) | self.next_bit() as u8))
                .collect()
        };
        Ok(bytes)
    }

    pub fn load_u256(&mut self) -> Result<[u8; 32], CellError> {
        let bytes = self.load_bytes(32)?;
        let mut value = [0u8; 32];
        value.copy_from_slice(&bytes);
        Ok(value)
    }

    /// Returns the next unread child cell.
    pub fn load_reference(&mut self) -> Result<&'a Cell, CellError> {
        match self.cell.reference(self.refs_offset) {
            Some(child) => {
                self.refs_offset += 1;
                Ok(child)
            }
            None => Err(CellError::Underflow {
                resource: Resource::Refs,
                remaining: 0,
                requested: 1,
            }),
        }
    }

    /// Reads a snake string: the remaining bytes of this slice followed by
    /// the bytes of every cell in the chain hanging off its single reference.
    ///
    /// Consumes the rest of the slice.
    pub fn load_string_tail(&mut self) -> Result<String, CellError> {
        let mut segment = self.clone();
        let mut bytes = Vec::new();
        loop {
            let remaining_bits = segment.remaining_bits();
            if remaining_bits % 8 != 0 {
                return Err(CellError::Format(format!(
                    "string segment holds {remaining_bits} bits, which is not a whole number of bytes"
                )));
            }
            bytes.extend(segment.load_bytes((remaining_bits / 8) as usize)?);
            match segment.remaining_refs() {
                0 => break,
                1 => {
                    let next = segment.load_reference()?;
                    segment = next.parse();
                }
                n => {
                    return Err(CellError::Format(format!(
                        "string segment holds {n} references, expected at most one"
                    )))
                }
            }
        }
        let value = String::from_utf8(bytes)
            .map_err(|err| CellError::Format(format!("string is not valid UTF-8: {err}")))?;

        self.bits_offset = self.cell.bit_len();
        self.refs_offset = self.cell.reference_count();
        Ok(value)
    }
}
