//! The byte-addressable store and its partition table.
//!
//! This module implements the main memory of the emulated machine. It
//! provides:
//! 1. **Storage:** A zero-initialized byte buffer of fixed size.
//! 2. **Access:** Bounds-checked single-byte reads and writes.
//! 3. **Partitions:** Append-only records of sub-ranges with point-in-time
//!    snapshots of their contents.
//! 4. **Loading:** Delegation to a [`Loader`] strategy for placing programs.

use tracing::{debug, trace};

use crate::config::defaults;
use crate::error::{MemoryError, Result};
use crate::inspect;
use crate::loader::Loader;
use crate::program::Program;

/// A recorded sub-range of a memory buffer.
///
/// The `data` snapshot is copied when the partition is taken and is stale
/// by design once the parent buffer is subsequently written; it never
/// tracks later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    start: usize,
    end: usize,
    data: Vec<u8>,
}

impl Partition {
    /// Returns the inclusive start address of the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end address of the range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the snapshot of the buffer contents at creation time.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The byte-addressable memory space.
///
/// Owns the raw buffer and the partition table. The buffer length always
/// equals the declared size; addresses are valid in `0..size`. Partition
/// records accumulate for the memory's lifetime and are never removed,
/// not even by [`Memory::reset`]. Each instance owns its own table; no
/// state is shared between memories.
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: Vec<u8>,
    partitions: Vec<Partition>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Capacity of the address space.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidCapacity`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MemoryError::InvalidCapacity);
        }
        trace!(size, "memory created");
        Ok(Self {
            bytes: vec![0; size],
            partitions: Vec::new(),
        })
    }

    /// Returns the capacity of the address space.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the live buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the recorded partitions, oldest first.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Zeroes every byte of the buffer.
    ///
    /// Existing partition records are left in place; their snapshots now
    /// describe a buffer state that no longer exists.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
        debug!(size = self.bytes.len(), "memory reset to zero");
    }

    /// Places `program` into this memory using the given strategy.
    ///
    /// # Arguments
    ///
    /// * `program` - The program whose image is placed.
    /// * `loader` - The placement strategy.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::MemoryFull`] when the strategy finds no
    /// valid insertion point.
    pub fn add(&mut self, program: &Program, loader: &dyn Loader) -> Result<()> {
        debug!(strategy = loader.name(), "loading program");
        loader.load(program, &mut self.bytes)
    }

    /// Reads the byte at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when `address` is outside the
    /// address space.
    pub fn read(&self, address: usize) -> Result<u8> {
        let value = *self
            .bytes
            .get(address)
            .ok_or(MemoryError::OutOfBounds {
                address,
                size: self.bytes.len(),
            })?;
        trace!(address, value, "read");
        Ok(value)
    }

    /// Writes `value` at `address`.
    ///
    /// The value parameter is wider than a byte on purpose: an
    /// out-of-range value surfaces as an error instead of being silently
    /// truncated at the call site.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when `address` is invalid and
    /// [`MemoryError::InvalidByteValue`] when `value` exceeds 255.
    pub fn write(&mut self, address: usize, value: u16) -> Result<()> {
        let size = self.bytes.len();
        let slot = self
            .bytes
            .get_mut(address)
            .ok_or(MemoryError::OutOfBounds { address, size })?;
        let byte = u8::try_from(value).map_err(|_| MemoryError::InvalidByteValue { value })?;
        *slot = byte;
        trace!(address, value = byte, "write");
        Ok(())
    }

    /// Records the sub-range `start..end` with a snapshot of its contents.
    ///
    /// The range must satisfy `start < end <= size`; an empty range is
    /// rejected rather than recorded.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when the range is invalid.
    pub fn partition(&mut self, start: usize, end: usize) -> Result<()> {
        let size = self.bytes.len();
        if end > size {
            return Err(MemoryError::OutOfBounds { address: end, size });
        }
        if start >= end {
            return Err(MemoryError::OutOfBounds {
                address: start,
                size,
            });
        }
        self.partitions.push(Partition {
            start,
            end,
            data: self.bytes[start..end].to_vec(),
        });
        debug!(start, end, "memory partitioned");
        Ok(())
    }

    /// Renders the buffer as a hex grid with partition boundary markers.
    ///
    /// Presentation only; the exact format is a diagnostic aid, not a
    /// contract.
    pub fn inspect(&self) -> String {
        inspect::render(self)
    }
}

impl Default for Memory {
    /// Creates a memory with the default size of 512 bytes.
    fn default() -> Self {
        Self {
            bytes: vec![0; defaults::MEMORY_SIZE],
            partitions: Vec::new(),
        }
    }
}
