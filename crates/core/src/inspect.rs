//! Human-readable hex dumps of memory state.
//!
//! This module renders a [`Memory`] as a 16-bytes-per-row hex grid with a
//! column-offset header and partition boundary markers. The output is a
//! diagnostic aid for humans; nothing in the crate depends on its exact
//! shape and callers must not parse it.

use std::fmt::Write as _;

use crate::memory::Memory;

/// Bytes rendered per grid row.
const ROW_BYTES: usize = 16;

/// Renders `memory` as a hex grid with partition boundary markers.
///
/// Rows are prefixed with their base address. A marker line is emitted
/// before any row at which a recorded partition starts or ends; boundaries
/// that fall inside a row are not marked.
///
/// # Arguments
///
/// * `memory` - The memory to render.
///
/// # Returns
///
/// The rendered dump, one grid row per line.
pub fn render(memory: &Memory) -> String {
    let bytes = memory.as_bytes();
    let mut out = String::new();

    let _ = write!(out, "    :");
    for column in 0..ROW_BYTES {
        let _ = write!(out, " {column:02x}");
    }
    out.push('\n');

    for (row, chunk) in bytes.chunks(ROW_BYTES).enumerate() {
        let base = row * ROW_BYTES;
        for partition in memory.partitions() {
            if partition.start() == base {
                let _ = writeln!(out, "partition start {:#06x}", partition.start());
            }
            if partition.end() == base {
                let _ = writeln!(out, "partition end {:#06x}", partition.end());
            }
        }
        let _ = write!(out, "{base:04x}:");
        for byte in chunk {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}
