use crate::{
    Cell, CellBuilder, CellError, Resource, EMPTY_CELL_HASH, MAX_BIT_LEN, MAX_BYTE_LEN, MAX_DEPTH,
    MAX_REF_COUNT,
};
use assert_matches::assert_matches;
use proptest::prelude::*;

fn cell_with_bytes(bytes: &[u8]) -> Cell {
    let mut builder = CellBuilder::new();
    builder.store_bytes(bytes).unwrap();
    builder.build().unwrap()
}

#[test]
fn empty_cell_has_the_ledger_hash() {
    assert_eq!(Cell::empty().hash(), EMPTY_CELL_HASH);
    assert_eq!(CellBuilder::new().build().unwrap().hash(), EMPTY_CELL_HASH);
    assert!(Cell::empty().is_empty());
    assert_eq!(Cell::empty().depth(), 0);
}

#[test]
fn should_read_back_integers_of_mixed_widths() {
    let mut builder = CellBuilder::new();
    builder
        .store_uint(5, 3)
        .unwrap()
        .store_bit(true)
        .unwrap()
        .store_u8(0xAB)
        .unwrap()
        .store_uint(u64::MAX, 64)
        .unwrap();
    let cell = builder.build().unwrap();
    assert_eq!(cell.bit_len(), 76);

    let mut slice = cell.parse();
    assert_eq!(slice.load_uint(3).unwrap(), 5);
    assert!(slice.load_bit().unwrap());
    assert_eq!(slice.load_u8().unwrap(), 0xAB);
    assert_eq!(slice.load_uint(64).unwrap(), u64::MAX);
    assert!(slice.is_empty());
}

#[test]
fn should_zero_extend_wide_values() {
    let mut builder = CellBuilder::new();
    builder.store_uint(5, 100).unwrap();
    let cell = builder.build().unwrap();

    let mut slice = cell.parse();
    assert_eq!(slice.load_uint(36).unwrap(), 0);
    assert_eq!(slice.load_uint(64).unwrap(), 5);
}

#[test]
fn should_reject_values_wider_than_the_field() {
    let mut builder = CellBuilder::new();
    assert_matches!(
        builder.store_uint(8, 3),
        Err(CellError::ValueOutOfRange { value: 8, bits: 3 })
    );
    assert_eq!(builder.bit_len(), 0);
}

#[test]
fn should_fill_a_cell_to_exactly_1023_bits() {
    let mut builder = CellBuilder::new();
    builder.store_uint(0, MAX_BIT_LEN).unwrap();
    assert_eq!(builder.spare_bits_capacity(), 0);
    assert_eq!(builder.build().unwrap().bit_len(), MAX_BIT_LEN);
}

#[test]
fn should_fail_instead_of_truncating_past_1023_bits() {
    let mut builder = CellBuilder::new();
    builder.store_uint(0, 1000).unwrap();

    let err = builder.store_uint(0xFFFFFF, 24).unwrap_err();
    assert_eq!(
        err,
        CellError::CapacityExceeded {
            resource: Resource::Bits,
            used: 1000,
            requested: 24,
            limit: 1023,
        }
    );
    assert_eq!(builder.bit_len(), 1000);
    assert_matches!(
        builder.store_bytes(&[0; 3]),
        Err(CellError::CapacityExceeded {
            resource: Resource::Bits,
            ..
        })
    );
    builder.store_uint(0x7FFFFF, 23).unwrap();
    assert_matches!(
        builder.store_bit(false),
        Err(CellError::CapacityExceeded {
            resource: Resource::Bits,
            ..
        })
    );
}

#[test]
fn should_fail_on_the_fifth_reference() {
    let child = Cell::empty();
    let mut builder = CellBuilder::new();
    for _ in 0..MAX_REF_COUNT {
        builder.store_reference(child.clone()).unwrap();
    }
    assert_matches!(
        builder.store_reference(child),
        Err(CellError::CapacityExceeded {
            resource: Resource::Refs,
            used: 4,
            requested: 1,
            limit: 4,
        })
    );
    assert_eq!(builder.build().unwrap().reference_count(), MAX_REF_COUNT);
}

#[test]
fn should_underflow_without_moving_the_cursor() {
    let cell = cell_with_bytes(&[0xFF]);
    let mut slice = cell.parse();

    assert_matches!(
        slice.load_uint(9),
        Err(CellError::Underflow {
            resource: Resource::Bits,
            remaining: 8,
            requested: 9,
        })
    );
    assert_matches!(
        slice.load_reference(),
        Err(CellError::Underflow {
            resource: Resource::Refs,
            ..
        })
    );
    assert_eq!(slice.remaining_bits(), 8);
    assert_eq!(slice.load_u8().unwrap(), 0xFF);
}

#[test]
fn should_refuse_to_load_more_than_64_bits_as_an_integer() {
    let mut builder = CellBuilder::new();
    builder.store_uint(0, 65).unwrap();
    let cell = builder.build().unwrap();
    assert_matches!(
        cell.parse().load_uint(65),
        Err(CellError::InvalidBitWidth { bits: 65 })
    );
}

#[test]
fn should_load_children_in_order() {
    let first = cell_with_bytes(b"first");
    let second = cell_with_bytes(b"second");
    let mut builder = CellBuilder::new();
    builder
        .store_reference(first.clone())
        .unwrap()
        .store_reference(second.clone())
        .unwrap();
    let cell = builder.build().unwrap();

    let mut slice = cell.parse();
    assert_eq!(slice.remaining_refs(), 2);
    assert_eq!(slice.load_reference().unwrap(), &first);
    assert_eq!(slice.load_reference().unwrap(), &second);
    assert_eq!(slice.remaining_refs(), 0);
}

#[test]
fn hash_does_not_depend_on_how_the_bits_were_stored() {
    let mut whole = CellBuilder::new();
    whole.store_u8(0xAB).unwrap();

    let mut nibbles = CellBuilder::new();
    nibbles.store_uint(0xA, 4).unwrap().store_uint(0xB, 4).unwrap();

    assert_eq!(whole.build().unwrap(), nibbles.build().unwrap());
}

#[test]
fn hash_covers_the_bit_length() {
    let mut eight = CellBuilder::new();
    eight.store_uint(0, 8).unwrap();
    let mut seven = CellBuilder::new();
    seven.store_uint(0, 7).unwrap();

    assert_ne!(eight.build().unwrap().hash(), seven.build().unwrap().hash());
}

#[test]
fn hash_covers_the_order_of_references() {
    let a = cell_with_bytes(b"a");
    let b = cell_with_bytes(b"b");

    let mut ab = CellBuilder::new();
    ab.store_reference(a.clone()).unwrap();
    ab.store_reference(b.clone()).unwrap();
    let mut ba = CellBuilder::new();
    ba.store_reference(b).unwrap();
    ba.store_reference(a).unwrap();

    assert_ne!(ab.build().unwrap().hash(), ba.build().unwrap().hash());
}

#[test]
fn should_share_a_child_between_parents() {
    let shared = cell_with_bytes(b"shared");
    let mut builder = CellBuilder::new();
    builder
        .store_reference(shared.clone())
        .unwrap()
        .store_reference(shared.clone())
        .unwrap();
    let cell = builder.build().unwrap();

    assert_eq!(cell.reference(0), cell.reference(1));
    assert_eq!(cell.depth(), 1);
}

#[test]
fn should_reject_trees_deeper_than_the_ledger_allows() {
    let mut cell = Cell::empty();
    for _ in 0..MAX_DEPTH {
        let mut builder = CellBuilder::new();
        builder.store_reference(cell).unwrap();
        cell = builder.build().unwrap();
    }
    assert_eq!(cell.depth(), MAX_DEPTH);

    let mut builder = CellBuilder::new();
    builder.store_reference(cell).unwrap();
    assert_matches!(
        builder.build(),
        Err(CellError::CapacityExceeded {
            resource: Resource::Depth,
            ..
        })
    );
}

#[test]
fn should_display_the_tree_like_explorers() {
    let mut one_bit = CellBuilder::new();
    one_bit.store_bit(true).unwrap();
    assert_eq!(one_bit.build().unwrap().to_string(), "x{C_}");

    let mut twelve_bits = CellBuilder::new();
    twelve_bits.store_uint(0xABC, 12).unwrap();
    assert_eq!(twelve_bits.build().unwrap().to_string(), "x{ABC}");

    let mut five_bits = CellBuilder::new();
    five_bits.store_uint(0b10101, 5).unwrap();
    assert_eq!(five_bits.build().unwrap().to_string(), "x{AC_}");

    let mut root = CellBuilder::new();
    root.store_u8(1).unwrap();
    root.store_reference(Cell::empty()).unwrap();
    assert_eq!(root.build().unwrap().to_string(), "x{01}\n x{}");
}

#[test]
fn should_chain_long_strings_across_cells() {
    let value = "k".repeat(300);
    let mut builder = CellBuilder::new();
    builder.store_u8(0).unwrap().store_string_tail(&value).unwrap();
    let cell = builder.build().unwrap();

    // 1015 spare bits after the prefix hold 126 whole bytes.
    assert_eq!(cell.bit_len(), 8 + 126 * 8);
    let second = cell.reference(0).unwrap();
    assert_eq!(second.bit_len() as usize, MAX_BYTE_LEN * 8);
    let third = second.reference(0).unwrap();
    assert_eq!(third.bit_len() as usize, (300 - 126 - MAX_BYTE_LEN) * 8);
    assert_eq!(third.reference_count(), 0);

    let mut slice = cell.parse();
    assert_eq!(slice.load_u8().unwrap(), 0);
    assert_eq!(slice.load_string_tail().unwrap(), value);
    assert!(slice.is_empty());
}

#[test]
fn should_not_touch_the_builder_when_a_string_tail_has_no_room_for_a_reference() {
    let mut builder = CellBuilder::new();
    for _ in 0..MAX_REF_COUNT {
        builder.store_reference(Cell::empty()).unwrap();
    }
    assert_matches!(
        builder.store_string_tail(&"x".repeat(200)),
        Err(CellError::CapacityExceeded {
            resource: Resource::Refs,
            ..
        })
    );
    assert_eq!(builder.bit_len(), 0);

    // Short strings need no reference.
    builder.store_string_tail("short").unwrap();
    assert_eq!(builder.bit_len(), 40);
}

#[test]
fn should_reject_strings_that_are_not_byte_aligned() {
    let mut builder = CellBuilder::new();
    builder.store_uint(1, 4).unwrap();
    let cell = builder.build().unwrap();
    assert_matches!(cell.parse().load_string_tail(), Err(CellError::Format(_)));
}

#[test]
fn should_reject_strings_that_are_not_utf8() {
    let cell = cell_with_bytes(&[0xC3, 0x28]);
    assert_matches!(cell.parse().load_string_tail(), Err(CellError::Format(_)));
}

#[test]
fn should_reject_strings_that_branch() {
    let mut builder = CellBuilder::new();
    builder
        .store_bytes(b"ab")
        .unwrap()
        .store_reference(cell_with_bytes(b"c"))
        .unwrap()
        .store_reference(cell_with_bytes(b"d"))
        .unwrap();
    let cell = builder.build().unwrap();
    assert_matches!(cell.parse().load_string_tail(), Err(CellError::Format(_)));
}

fn arb_field() -> impl Strategy<Value = (u64, u16)> {
    (1u16..=64).prop_flat_map(|bits| {
        let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        (any::<u64>().prop_map(move |value| value & mask), Just(bits))
    })
}

proptest! {
    #[test]
    fn prop_integers_read_back_as_stored(fields in prop::collection::vec(arb_field(), 0..15)) {
        let mut builder = CellBuilder::new();
        for (value, bits) in &fields {
            builder.store_uint(*value, *bits).unwrap();
        }
        let cell = builder.build().unwrap();

        let mut slice = cell.parse();
        for (value, bits) in &fields {
            prop_assert_eq!(slice.load_uint(*bits).unwrap(), *value);
        }
        prop_assert_eq!(slice.remaining_bits(), 0);
    }

    #[test]
    fn prop_unaligned_bytes_read_back_as_stored(
        prefix in 0u16..8,
        bytes in prop::collection::vec(any::<u8>(), 0..120),
    ) {
        let mut builder = CellBuilder::new();
        builder.store_uint(0, prefix).unwrap();
        builder.store_bytes(&bytes).unwrap();
        let cell = builder.build().unwrap();

        let mut slice = cell.parse();
        slice.load_uint(prefix).unwrap();
        prop_assert_eq!(slice.load_bytes(bytes.len()).unwrap(), bytes);
    }

    #[test]
    fn prop_string_ref_tail_roundtrip(value in ".{0,600}") {
        let mut builder = CellBuilder::new();
        builder.store_string_ref_tail(&value).unwrap();
        let cell = builder.build().unwrap();

        let decoded = cell.parse().load_reference().unwrap().parse().load_string_tail().unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_equal_contents_give_equal_hashes(bytes in prop::collection::vec(any::<u8>(), 0..127)) {
        prop_assert_eq!(cell_with_bytes(&bytes).hash(), cell_with_bytes(&bytes).hash());
    }
}
