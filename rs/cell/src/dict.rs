//! Keyed content dictionary.
//!
//! A dictionary maps 256-bit keys to cells. It serializes to a node cell
//! without data whose references are entry cells, in insertion order. Each
//! entry cell holds the key (256 bits) followed by exactly one reference to
//! the value.
//!
//! A node carries at most four references. When more than four entries are
//! left, the node holds the next three entries and uses its fourth reference
//! for a continuation node with the same layout. Entry cells always carry 256
//! bits and continuation nodes none, so the two are told apart by bit length.
//!
//! This is not the ledger's native radix-tree dictionary; it is meant for
//! small fixed key sets such as token metadata.

use crate::builder::CellBuilder;
use crate::cell::Cell;
use crate::error::CellError;
use crate::MAX_REF_COUNT;
use sha2::{Digest, Sha256};
use std::fmt;


const KEY_BIT_LEN: u16 = 256;

/// A 256-bit unsigned dictionary key, stored big-endian.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DictKey(pub [u8; 32]);

impl DictKey {
    /// Derives a key as the SHA-256 digest of `data`.
    pub fn from_sha256(data: &[u8]) -> Self {
        DictKey(Sha256::digest(data).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for DictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for DictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DictKey({})", hex::encode(self.0))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(DictKey, Cell)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry. Fails if `key` is already present.
    pub fn insert(&mut self, key: DictKey, value: Cell) -> Result<(), CellError> {
        if self.contains_key(&key) {
            return Err(CellError::DuplicateKey(key));
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &DictKey) -> Option<&Cell> {
        self.entries
            .iter()
            .find_map(|(k, value)| (k == key).then_some(value))
    }

    pub fn contains_key(&self, key: &DictKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DictKey, &Cell)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn serialize(&self) -> Result<Cell, CellError> {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                let mut entry = CellBuilder::new();
                entry.store_u256(key.as_bytes())?;
                entry.store_reference(value.clone())?;
                entry.build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut groups = Vec::new();
        let mut rest = &entries[..];
        while rest.len() > MAX_REF_COUNT {
            let (head, tail) = rest.split_at(MAX_REF_COUNT - 1);
            groups.push(head);
            rest = tail;
        }
        groups.push(rest);

        let mut continuation: Option<Cell> = None;
        for group in groups.into_iter().rev() {
            let mut node = CellBuilder::new();
            for entry in group {
                node.store_reference(entry.clone())?;
            }
            if let Some(next) = continuation.take() {
                node.store_reference(next)?;
            }
            continuation = Some(node.build()?);
        }
        match continuation {
            Some(root) => Ok(root),
            None => CellBuilder::new().build(),
        }
    }

    /// Inverse of [`Dictionary::serialize`]. Returns either the complete
    /// dictionary or an error.
    pub fn deserialize(cell: &Cell) -> Result<Self, CellError> {
        let mut dict = Dictionary::new();
        let mut node = cell;
        loop {
            if node.bit_len() != 0 {
                return Err(CellError::Format(format!(
                    "dictionary node holds {} data bits, expected none",
                    node.bit_len()
                )));
            }
            let mut continuation = None;
            for (index, child) in node.references().iter().enumerate() {
                if child.bit_len() == 0 {
                    if index != MAX_REF_COUNT - 1 {
                        return Err(CellError::Format(format!(
                            "continuation node at reference {index}, only the last reference of a full node may continue the dictionary"
                        )));
                    }
                    continuation = Some(child);
                } else {
                    let (key, value) = parse_entry(child)?;
                    dict.insert(key, value)?;
                }
            }
            match continuation {
                Some(next) => node = next,
                None => return Ok(dict),
            }
        }
    }
}

fn parse_entry(cell: &Cell) -> Result<(DictKey, Cell), CellError> {
    if cell.bit_len() != KEY_BIT_LEN {
        return Err(CellError::Format(format!(
            "dictionary entry holds {} bits, expected a {KEY_BIT_LEN}-bit key",
            cell.bit_len()
        )));
    }
    if cell.reference_count() != 1 {
        return Err(CellError::Format(format!(
            "dictionary entry holds {} references, expected exactly one value",
            cell.reference_count()
        )));
    }
    let mut slice = cell.parse();
    let key = DictKey(slice.load_u256()?);
    let value = slice.load_reference()?.clone();
    Ok((key, value))
}
