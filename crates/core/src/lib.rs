//! Memory management core for a simple CPU emulator.
//!
//! This crate models a byte-addressable memory space and the machinery for
//! placing programs into it. It provides:
//! 1. **Program:** Fixed-capacity instruction buffers with sentinel-based slot allocation.
//! 2. **Loaders:** Static and dynamic placement strategies for copying a program into memory.
//! 3. **Memory:** The byte store with bounds-checked access and point-in-time partition snapshots.
//! 4. **Pagination:** A fixed-page-size view that carves a memory space into uniform partitions.
//! 5. **Configuration:** Hierarchical defaults deserializable from JSON.
//!
//! The core is single-threaded and single-owner: exclusive access is enforced
//! through `&mut` borrows rather than locks. Every operation emits a
//! [`tracing`] event instead of writing to a console, so the library stays
//! silent unless a subscriber is installed.

/// Configuration structures and baseline constants.
pub mod config;
/// Error type shared by every fallible operation.
pub mod error;
/// Human-readable hex dumps of memory state.
pub mod inspect;
/// Program placement strategies.
pub mod loader;
/// The byte-addressable store and its partition table.
pub mod memory;
/// Fixed-page-size view over an existing memory.
pub mod paging;
/// Fixed-capacity instruction buffers.
pub mod program;

pub use crate::config::{Config, LoaderKind};
pub use crate::error::{MemoryError, Result};
pub use crate::loader::{DynamicLoader, Loader, StaticLoader};
pub use crate::memory::{Memory, Partition};
pub use crate::paging::Pagination;
pub use crate::program::Program;
