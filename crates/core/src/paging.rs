//! Fixed-page-size view over an existing memory.
//!
//! A [`Pagination`] carves a memory's address range into uniform pages at
//! construction time, registering one partition record per page stride.
//! The view borrows the memory it describes; the memory outlives the view,
//! and further views over the same memory each append their own partitions.

use tracing::debug;

use crate::config::defaults;
use crate::error::{MemoryError, Result};
use crate::memory::Memory;

/// A static carving of a memory space into fixed-size pages.
///
/// One quirk of the carving arithmetic is preserved from the original
/// design: each registered partition ends at `start + page_count` rather
/// than `start + page_size`, so the recorded ranges cover only a sliver of
/// each page whenever the page count is smaller than the page size.
#[derive(Debug)]
pub struct Pagination<'m> {
    memory: &'m Memory,
    page_size: usize,
    pages: Vec<usize>,
}

impl<'m> Pagination<'m> {
    /// Carves `memory` into pages of `page_size` bytes.
    ///
    /// Walks the address range in strides of `page_size` and registers a
    /// partition per stride. Each page index is mapped to the index of the
    /// partition recorded for its stride.
    ///
    /// # Arguments
    ///
    /// * `memory` - The memory to carve; borrowed for the view's lifetime.
    /// * `page_size` - Bytes per page.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidCapacity`] when `page_size` is zero,
    /// and [`MemoryError::OutOfBounds`] when a stride degenerates to an
    /// empty range (a page size larger than the memory itself).
    pub fn new(memory: &'m mut Memory, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(MemoryError::InvalidCapacity);
        }
        let size = memory.size();
        let page_count = size / page_size;
        let first_partition = memory.partitions().len();

        let mut start = 0;
        while start < size {
            memory.partition(start, (start + page_count).min(size))?;
            start += page_size;
        }
        debug!(page_size, page_count, "memory paginated");

        let pages = (first_partition..first_partition + page_count).collect();
        Ok(Self {
            memory,
            page_size,
            pages,
        })
    }

    /// Carves `memory` into pages of the default size of 128 bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pagination::new`].
    pub fn with_default_page_size(memory: &'m mut Memory) -> Result<Self> {
        Self::new(memory, defaults::PAGE_SIZE)
    }

    /// Returns the size of one page in bytes.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of whole pages in the address space.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns, per page index, the index into the memory's partition
    /// table of the record registered for that page's stride.
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    /// Returns the memory this view describes.
    pub fn memory(&self) -> &Memory {
        self.memory
    }

    /// Renders the underlying memory as a hex grid.
    ///
    /// Presentation only, like [`Memory::inspect`].
    pub fn inspect(&self) -> String {
        self.memory.inspect()
    }
}
