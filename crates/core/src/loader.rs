//! Program placement strategies.
//!
//! This module provides the two loading strategies for copying a program
//! image into a memory buffer:
//! 1. **StaticLoader:** Checks that a free byte exists anywhere, then always places at address zero.
//! 2. **DynamicLoader:** First-fit placement at the first free byte found.
//!
//! Both strategies copy the program's entire instruction buffer, trailing
//! sentinel zeros included, and validate capacity before writing a single
//! byte so a failed load never leaves a partial image behind.

use tracing::debug;

use crate::error::{MemoryError, Result};
use crate::program::Program;

/// Trait for program placement strategies.
///
/// Loaders are stateless: they own no data and only mutate the target
/// buffer handed to them. The set of strategies is closed; memories only
/// ever dispatch to [`StaticLoader`] or [`DynamicLoader`].
pub trait Loader {
    /// Returns a short name for this strategy (e.g. `"static"`).
    fn name(&self) -> &'static str;

    /// Copies `program`'s instruction buffer into `target`, in place.
    ///
    /// # Arguments
    ///
    /// * `program` - The program whose image is placed.
    /// * `target` - The memory buffer receiving the image.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::MemoryFull`] when no insertion point exists
    /// or the image would overflow past the end of `target`.
    fn load(&self, program: &Program, target: &mut [u8]) -> Result<()>;
}

/// Placement at address zero, gated on any free byte existing.
///
/// The scan for a zero byte only answers "is there room anywhere"; the
/// copy itself always targets the start of the buffer, overwriting
/// whatever is there. [`DynamicLoader`] is the strategy that places at
/// the free byte it finds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLoader;

impl Loader for StaticLoader {
    fn name(&self) -> &'static str {
        "static"
    }

    fn load(&self, program: &Program, target: &mut [u8]) -> Result<()> {
        let image = program.instructions();
        if !target.contains(&0) {
            return Err(MemoryError::MemoryFull);
        }
        if image.len() > target.len() {
            return Err(MemoryError::MemoryFull);
        }
        target[..image.len()].copy_from_slice(image);
        debug!(bytes = image.len(), base = 0, "program loaded");
        Ok(())
    }
}

/// First-fit placement at the first free byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicLoader;

impl Loader for DynamicLoader {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn load(&self, program: &Program, target: &mut [u8]) -> Result<()> {
        let image = program.instructions();
        let base = target
            .iter()
            .position(|&byte| byte == 0)
            .ok_or(MemoryError::MemoryFull)?;
        let end = base
            .checked_add(image.len())
            .ok_or(MemoryError::MemoryFull)?;
        if end > target.len() {
            return Err(MemoryError::MemoryFull);
        }
        target[base..end].copy_from_slice(image);
        debug!(bytes = image.len(), base, "program loaded");
        Ok(())
    }
}
