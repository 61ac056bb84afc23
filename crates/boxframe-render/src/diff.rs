#![forbid(unsafe_code)]

//! Slot diff between two buffers.
//!
//! Incremental adapters re-render only what changed between passes. The
//! diff is a row-major scan over two equally sized buffers, recording the
//! 1-based positions whose slot contents differ, with optional coalescing
//! into per-row runs for batched uploads.

use crate::buffer::GridBuffer;

/// A contiguous run of changed slots on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    /// Row position (1-based).
    pub row: u16,
    /// First changed column (inclusive, 1-based).
    pub start: u16,
    /// Last changed column (inclusive, 1-based).
    pub end: u16,
}

impl ChangeRun {
    /// Number of slots in this run.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.end - self.start + 1
    }

    /// Whether the run is degenerate (never produced by `compute`).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// The set of slot positions that differ between two buffers.
#[derive(Debug, Clone, Default)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Compute the diff between two buffers of identical dimensions.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both buffers have the same dimensions.
    pub fn compute(old: &GridBuffer, new: &GridBuffer) -> Self {
        debug_assert_eq!(old.dims(), new.dims(), "buffer dimensions must match");

        let dims = old.dims();
        let mut changes = Vec::new();
        for row in 1..=dims.rows {
            for column in 1..=dims.columns {
                if old.get(column, row) != new.get(column, row) {
                    changes.push((column, row));
                }
            }
        }
        tracing::trace!(changes = changes.len(), "buffer diff computed");
        Self { changes }
    }

    /// Changed `(column, row)` positions in row-major order.
    #[inline]
    pub fn changes(&self) -> &[(u16, u16)] {
        &self.changes
    }

    /// Number of changed slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether nothing changed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Coalesce adjacent changes on the same row into runs.
    pub fn runs(&self) -> Vec<ChangeRun> {
        let mut runs: Vec<ChangeRun> = Vec::new();
        for &(column, row) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.row == row && run.end + 1 == column => run.end = column,
                _ => runs.push(ChangeRun {
                    row,
                    start: column,
                    end: column,
                }),
            }
        }
        runs
    }
}
