#![forbid(unsafe_code)]

//! The declarative output of a render pass.

use crate::cell::{Cell, Layer};

/// An ordered list of cells produced by one render pass.
///
/// Painters append in paint order; within a layer, a later cell wins when
/// two resolve to the same slot. The plan owns its cells wholesale — the
/// whole list is discarded and replaced on the next pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    cells: Vec<Cell>,
}

impl Plan {
    /// Create an empty plan.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plan from an existing cell list.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Append one cell.
    #[inline]
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Append a batch of cells, preserving order.
    pub fn extend(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.cells.extend(cells);
    }

    /// The cells in paint order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the plan holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells on the given layer.
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |c| c.layer == layer)
    }
}

impl IntoIterator for Plan {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
