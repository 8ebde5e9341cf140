//! Memory Store Unit Tests.
//!
//! Verifies zero-initialization, bounds-checked access, partition
//! snapshot semantics, reset behavior, and loader integration.

use emumem_core::{DynamicLoader, Memory, MemoryError, Program, StaticLoader};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ══════════════════════════════════════════════════════════
// 1. Construction and reset
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_memory_is_all_zero() {
    let memory = Memory::new(64).unwrap();
    assert_eq!(memory.size(), 64);
    assert!(memory.as_bytes().iter().all(|&b| b == 0));
    assert!(memory.partitions().is_empty());
}

#[test]
fn default_size_is_512() {
    let memory = Memory::default();
    assert_eq!(memory.size(), 512);
}

#[test]
fn zero_size_is_rejected() {
    assert!(matches!(
        Memory::new(0),
        Err(MemoryError::InvalidCapacity)
    ));
}

#[test]
fn reset_zeroes_bytes_but_keeps_partitions() {
    let mut memory = Memory::new(16).unwrap();
    memory.write(3, 0xAB).unwrap();
    memory.partition(0, 8).unwrap();
    memory.partition(8, 16).unwrap();

    memory.reset();

    assert!(memory.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(memory.partitions().len(), 2);
    // The snapshots describe the pre-reset state.
    assert_eq!(memory.partitions()[0].data()[3], 0xAB);
}

// ══════════════════════════════════════════════════════════
// 2. Read/write access
// ══════════════════════════════════════════════════════════

#[test]
fn write_then_read_round_trips() {
    let mut memory = Memory::new(8).unwrap();
    memory.write(0, 0).unwrap();
    memory.write(7, 255).unwrap();
    assert_eq!(memory.read(0).unwrap(), 0);
    assert_eq!(memory.read(7).unwrap(), 255);
}

#[test]
fn out_of_bounds_access_is_rejected() {
    let mut memory = Memory::new(8).unwrap();
    assert_eq!(
        memory.read(8),
        Err(MemoryError::OutOfBounds { address: 8, size: 8 })
    );
    assert_eq!(
        memory.write(100, 1),
        Err(MemoryError::OutOfBounds {
            address: 100,
            size: 8
        })
    );
}

#[test]
fn non_byte_value_is_rejected() {
    let mut memory = Memory::new(8).unwrap();
    assert_eq!(
        memory.write(0, 256),
        Err(MemoryError::InvalidByteValue { value: 256 })
    );
    assert_eq!(
        memory.write(0, u16::MAX),
        Err(MemoryError::InvalidByteValue { value: u16::MAX })
    );
    // The failed write must not have touched the buffer.
    assert_eq!(memory.read(0).unwrap(), 0);
}

proptest! {
    #[test]
    fn round_trip_holds_for_all_addresses_and_values(
        address in 0usize..64,
        value in 0u16..=255,
    ) {
        let mut memory = Memory::new(64).unwrap();
        memory.write(address, value).unwrap();
        prop_assert_eq!(u16::from(memory.read(address).unwrap()), value);
    }

    #[test]
    fn any_address_at_or_past_size_fails(address in 64usize..10_000) {
        let memory = Memory::new(64).unwrap();
        prop_assert_eq!(
            memory.read(address),
            Err(MemoryError::OutOfBounds { address, size: 64 })
        );
    }
}

// ══════════════════════════════════════════════════════════
// 3. Partition snapshots
// ══════════════════════════════════════════════════════════

#[test]
fn partition_records_a_copy_of_the_range() {
    let mut memory = Memory::new(16).unwrap();
    memory.write(4, 0x11).unwrap();
    memory.write(5, 0x22).unwrap();

    memory.partition(4, 8).unwrap();

    let record = &memory.partitions()[0];
    assert_eq!(record.start(), 4);
    assert_eq!(record.end(), 8);
    assert_eq!(record.data(), &[0x11, 0x22, 0x00, 0x00]);
}

#[test]
fn snapshot_is_unaffected_by_later_writes() {
    let mut memory = Memory::new(16).unwrap();
    memory.write(0, 0xAA).unwrap();
    memory.partition(0, 4).unwrap();

    memory.write(0, 0xBB).unwrap();
    memory.write(1, 0xCC).unwrap();

    assert_eq!(memory.partitions()[0].data(), &[0xAA, 0x00, 0x00, 0x00]);
}

#[test]
fn invalid_partition_ranges_are_rejected() {
    let mut memory = Memory::new(16).unwrap();
    // Empty range.
    assert!(matches!(
        memory.partition(4, 4),
        Err(MemoryError::OutOfBounds { .. })
    ));
    // Inverted range.
    assert!(matches!(
        memory.partition(8, 4),
        Err(MemoryError::OutOfBounds { .. })
    ));
    // End past the address space.
    assert!(matches!(
        memory.partition(0, 17),
        Err(MemoryError::OutOfBounds { .. })
    ));
    assert!(memory.partitions().is_empty());
}

#[test]
fn full_range_partition_is_valid() {
    let mut memory = Memory::new(16).unwrap();
    memory.partition(0, 16).unwrap();
    assert_eq!(memory.partitions()[0].data().len(), 16);
}

#[test]
fn partition_tables_are_per_instance() {
    let mut first = Memory::new(16).unwrap();
    let second = Memory::new(16).unwrap();
    first.partition(0, 8).unwrap();
    assert_eq!(first.partitions().len(), 1);
    assert!(second.partitions().is_empty());
}

// ══════════════════════════════════════════════════════════
// 4. Loader integration
// ══════════════════════════════════════════════════════════

#[test]
fn add_places_program_through_the_strategy() {
    let mut program = Program::new(3).unwrap();
    program.add_instruction(1).unwrap();
    program.add_instruction(2).unwrap();
    program.add_instruction(3).unwrap();

    let mut memory = Memory::new(8).unwrap();
    memory.add(&program, &DynamicLoader).unwrap();
    assert_eq!(memory.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0]);

    // A second dynamic load lands right after the first image.
    memory.add(&program, &DynamicLoader).unwrap();
    assert_eq!(memory.as_bytes(), &[1, 2, 3, 1, 2, 3, 0, 0]);

    // A static load clobbers the start again.
    memory.add(&program, &StaticLoader).unwrap();
    assert_eq!(memory.as_bytes(), &[1, 2, 3, 1, 2, 3, 0, 0]);
}

// ══════════════════════════════════════════════════════════
// 5. Inspection dump (smoke only; format is not a contract)
// ══════════════════════════════════════════════════════════

#[test]
fn inspect_marks_partition_boundaries() {
    let mut memory = Memory::new(64).unwrap();
    memory.write(0, 0xAB).unwrap();
    memory.partition(0, 16).unwrap();

    let dump = memory.inspect();
    assert!(dump.contains("partition start"));
    assert!(dump.contains("partition end"));
    assert!(dump.contains("ab"));
}
