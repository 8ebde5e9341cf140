//! Error definitions for the memory core.
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate. All failures are synchronous and immediate: an
//! operation either fully succeeds or returns an error without having
//! mutated any state.

use thiserror::Error;

/// Convenience alias for results produced by the memory core.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Errors raised by programs, loaders, memories, and pagination views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A constructor was given a capacity of zero.
    #[error("invalid capacity: size must be greater than zero")]
    InvalidCapacity,

    /// A program has no empty slot left for another instruction.
    #[error("program memory is full")]
    OutOfCapacity,

    /// A loader found no valid insertion point, or the program image would
    /// overflow past the end of the target buffer.
    #[error("memory is full, cannot load program")]
    MemoryFull,

    /// An address or partition bound fell outside the valid address space.
    #[error("address {address:#06x} out of bounds (memory size {size})")]
    OutOfBounds {
        /// The offending address or range bound.
        address: usize,
        /// The size of the memory that rejected it.
        size: usize,
    },

    /// A write was attempted with a value that does not fit in a byte.
    #[error("value {value} is not a byte (0-255)")]
    InvalidByteValue {
        /// The rejected value.
        value: u16,
    },
}
