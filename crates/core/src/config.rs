//! Configuration for the memory core.
//!
//! This module defines the structures used to parameterize an emulated
//! memory space. It provides:
//! 1. **Defaults:** Baseline constants for memory, page, and program sizes.
//! 2. **Structures:** Hierarchical config for the memory, paging, and program layers.
//! 3. **Loader selection:** A closed enum resolving to a placement strategy.
//!
//! Configuration is deserialized from JSON (every field is optional and
//! falls back to its default) or built programmatically via `Config::default()`.

use serde::Deserialize;

use crate::loader::{DynamicLoader, Loader, StaticLoader};

/// Baseline constants used when a field is not explicitly configured.
pub mod defaults {
    /// Size of the memory address space in bytes.
    pub const MEMORY_SIZE: usize = 512;

    /// Bytes per page for pagination views.
    pub const PAGE_SIZE: usize = 128;

    /// Instruction slots in a program buffer.
    pub const PROGRAM_CAPACITY: usize = 32;
}

/// Root configuration for an emulated memory space.
///
/// # Examples
///
/// ```
/// use emumem_core::config::{Config, LoaderKind};
///
/// let json = r#"{ "memory": { "size": 64 }, "loader": "Static" }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.memory.size, 64);
/// assert_eq!(config.paging.page_size, 128);
/// assert_eq!(config.loader, LoaderKind::Static);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Memory space parameters.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Pagination parameters.
    #[serde(default)]
    pub paging: PagingConfig,

    /// Program buffer parameters.
    #[serde(default)]
    pub program: ProgramConfig,

    /// Placement strategy used when loading programs.
    #[serde(default)]
    pub loader: LoaderKind,
}

/// Memory space parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Size of the address space in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default address space size.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}

/// Pagination parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PagingConfig {
    /// Bytes per page.
    #[serde(default = "PagingConfig::default_page_size")]
    pub page_size: usize,
}

impl PagingConfig {
    /// Returns the default page size.
    fn default_page_size() -> usize {
        defaults::PAGE_SIZE
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
        }
    }
}

/// Program buffer parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Instruction slots in the program buffer.
    #[serde(default = "ProgramConfig::default_capacity")]
    pub capacity: usize,
}

impl ProgramConfig {
    /// Returns the default program capacity.
    fn default_capacity() -> usize {
        defaults::PROGRAM_CAPACITY
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::PROGRAM_CAPACITY,
        }
    }
}

/// Placement strategy selection.
///
/// The set is closed: the core only ever dispatches to one of these two
/// strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LoaderKind {
    /// Place at address zero whenever any free byte exists.
    Static,
    /// First-fit placement at the first free byte.
    #[default]
    Dynamic,
}

impl LoaderKind {
    /// Resolves this selection to its placement strategy.
    pub fn strategy(self) -> &'static dyn Loader {
        match self {
            Self::Static => &StaticLoader,
            Self::Dynamic => &DynamicLoader,
        }
    }
}
