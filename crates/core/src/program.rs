//! Fixed-capacity program instruction buffers.
//!
//! A [`Program`] owns an instruction buffer of fixed length. Slots holding
//! zero are unoccupied; [`Program::add_instruction`] allocates the first
//! free slot in ascending address order. The buffer never shrinks and is
//! copied wholesale into a memory by a [`crate::loader::Loader`].

use tracing::trace;

use crate::config::defaults;
use crate::error::{MemoryError, Result};

/// A fixed-capacity instruction buffer.
///
/// The byte value `0` doubles as the empty-slot sentinel, so a program
/// cannot hold the opcode value zero: writing it is permitted but leaves
/// the slot indistinguishable from an empty one. This is a known
/// limitation of the sentinel allocation scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<u8>,
}

impl Program {
    /// Creates a program with a zero-filled buffer of `capacity` bytes.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of instruction slots.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MemoryError::InvalidCapacity);
        }
        trace!(capacity, "program created");
        Ok(Self {
            instructions: vec![0; capacity],
        })
    }

    /// Writes `opcode` into the first unoccupied slot.
    ///
    /// Slots are scanned in ascending order; the first slot holding the
    /// zero sentinel receives the opcode.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Instruction byte to store.
    ///
    /// # Returns
    ///
    /// The address of the slot that received the opcode.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfCapacity`] when no empty slot exists.
    pub fn add_instruction(&mut self, opcode: u8) -> Result<usize> {
        for (address, slot) in self.instructions.iter_mut().enumerate() {
            if *slot == 0 {
                *slot = opcode;
                trace!(opcode, address, "instruction added");
                return Ok(address);
            }
        }
        Err(MemoryError::OutOfCapacity)
    }

    /// Returns the number of instruction slots.
    pub fn capacity(&self) -> usize {
        self.instructions.len()
    }

    /// Returns the full instruction buffer, occupied or not.
    pub fn instructions(&self) -> &[u8] {
        &self.instructions
    }
}

impl Default for Program {
    /// Creates a program with the default capacity of 32 slots.
    fn default() -> Self {
        Self {
            instructions: vec![0; defaults::PROGRAM_CAPACITY],
        }
    }
}
