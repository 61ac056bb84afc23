#![forbid(unsafe_code)]

//! In-memory grid surface.
//!
//! `GridBuffer` is the reference [`Surface`](crate::surface::Surface): a
//! dense grid of slots addressed by 1-based (column, row) positions. It
//! resolves negative track coordinates, splats multi-grapheme cell text
//! across consecutive columns, and keeps one plane per stacking layer so
//! removing the scrollbar reveals whatever the frame drew beneath it.
//!
//! # Invariants
//!
//! 1. Each layer plane holds `columns * rows` slots, row-major.
//! 2. Dimensions never change after creation; a resize builds a new buffer.
//! 3. Reads return the topmost occupied layer at a position.

use crate::cell::{Cell, Layer};
use crate::plan::Plan;
use crate::surface::Surface;
use boxframe_core::{ColorToken, GridDims};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const LAYERS: usize = 3;

/// One occupied grid slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// The grapheme rendered in this slot.
    pub glyph: String,
    /// Stacking layer of the write that produced this slot.
    pub layer: Layer,
    /// Color token, if any.
    pub color: Option<ColorToken>,
    /// Inverted highlight flag.
    pub highlight: bool,
}

/// A dense grid of layered slots.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBuffer {
    dims: GridDims,
    planes: [Vec<Option<Slot>>; LAYERS],
}

impl GridBuffer {
    /// Create an empty buffer with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is 0.
    pub fn new(dims: GridDims) -> Self {
        assert!(dims.columns > 0, "buffer must have at least one column");
        assert!(dims.rows > 0, "buffer must have at least one row");

        let size = dims.columns as usize * dims.rows as usize;
        Self {
            dims,
            planes: std::array::from_fn(|_| vec![None; size]),
        }
    }

    /// Buffer dimensions.
    #[inline]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Convert a 1-based (column, row) position to a linear index.
    #[inline]
    fn index(&self, column: u16, row: u16) -> Option<usize> {
        if self.dims.contains(column, row) {
            Some((row as usize - 1) * self.dims.columns as usize + (column as usize - 1))
        } else {
            None
        }
    }

    /// The topmost occupied slot at a 1-based (column, row) position.
    ///
    /// Returns `None` for empty positions and out-of-bounds positions alike.
    pub fn get(&self, column: u16, row: u16) -> Option<&Slot> {
        let idx = self.index(column, row)?;
        self.planes
            .iter()
            .rev()
            .find_map(|plane| plane[idx].as_ref())
    }

    /// The visible glyph at a position, if any slot is occupied.
    #[inline]
    pub fn glyph_at(&self, column: u16, row: u16) -> Option<&str> {
        self.get(column, row).map(|s| s.glyph.as_str())
    }

    /// Iterate over visible (topmost) slots as `(column, row, slot)`.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Slot)> {
        let columns = self.dims.columns;
        let rows = self.dims.rows;
        (1..=rows).flat_map(move |row| {
            (1..=columns).filter_map(move |column| {
                self.get(column, row).map(|slot| (column, row, slot))
            })
        })
    }

    /// Number of positions with at least one occupied layer.
    pub fn occupied(&self) -> usize {
        let size = self.dims.columns as usize * self.dims.rows as usize;
        (0..size)
            .filter(|&idx| self.planes.iter().any(|plane| plane[idx].is_some()))
            .count()
    }

    /// Place one cell, resolving its tracks against the buffer dimensions.
    ///
    /// Text is written grapheme by grapheme into the cell's layer plane,
    /// advancing by display width. Placements that resolve outside the
    /// grid are dropped silently; a run that starts inside the grid is cut
    /// at the right edge. Within a layer, a later write overwrites.
    pub fn place(&mut self, cell: &Cell) {
        let Some(row) = cell.row.resolve(self.dims.rows) else {
            tracing::trace!(row = cell.row.raw(), "cell row off-grid, dropped");
            return;
        };
        let Some(mut column) = cell.col.resolve(self.dims.columns) else {
            tracing::trace!(col = cell.col.raw(), "cell column off-grid, dropped");
            return;
        };

        for grapheme in cell.text.graphemes(true) {
            let width = UnicodeWidthStr::width(grapheme).max(1) as u16;
            if column.saturating_add(width) > self.dims.columns.saturating_add(1) {
                break;
            }
            let Some(idx) = self.index(column, row) else {
                break;
            };
            self.planes[cell.layer as usize][idx] = Some(Slot {
                glyph: grapheme.to_string(),
                layer: cell.layer,
                color: cell.color,
                highlight: cell.highlight,
            });
            column += width;
        }
    }

    /// Empty the scrollbar layer planes, revealing the frame beneath.
    pub fn remove_scrollbar_slots(&mut self) {
        for layer in [Layer::ScrollTrack, Layer::ScrollThumb] {
            self.planes[layer as usize].fill(None);
        }
    }

    /// Empty every layer plane.
    pub fn clear_slots(&mut self) {
        for plane in &mut self.planes {
            plane.fill(None);
        }
    }
}

impl Surface for GridBuffer {
    fn clear(&mut self) {
        self.clear_slots();
    }

    fn apply(&mut self, plan: &Plan) {
        for cell in plan.cells() {
            self.place(cell);
        }
    }

    fn remove_scrollbar(&mut self) {
        self.remove_scrollbar_slots();
    }
}

#[cfg(test)]
mod tests {
    use super::GridBuffer;
    use crate::cell::{Cell, Layer};
    use crate::plan::Plan;
    use crate::surface::Surface;
    use boxframe_core::{GridDims, Track};
    use proptest::prelude::*;

    fn buffer(columns: u16, rows: u16) -> GridBuffer {
        GridBuffer::new(GridDims::new(columns, rows))
    }

    #[test]
    fn negative_tracks_resolve_to_last() {
        let mut buf = buffer(10, 4);
        buf.place(&Cell::glyph('╝', Track::LAST, Track::LAST));
        assert_eq!(buf.glyph_at(10, 4), Some("╝"));
        assert_eq!(buf.occupied(), 1);
    }

    #[test]
    fn text_run_spans_consecutive_columns() {
        let mut buf = buffer(10, 3);
        buf.place(&Cell::text("abc", Track::new(2), Track::new(4)));
        assert_eq!(buf.glyph_at(4, 2), Some("a"));
        assert_eq!(buf.glyph_at(5, 2), Some("b"));
        assert_eq!(buf.glyph_at(6, 2), Some("c"));
        assert_eq!(buf.glyph_at(7, 2), None);
    }

    #[test]
    fn text_run_is_cut_at_right_edge() {
        let mut buf = buffer(5, 1);
        buf.place(&Cell::text("abcdefg", Track::FIRST, Track::new(4)));
        assert_eq!(buf.glyph_at(4, 1), Some("a"));
        assert_eq!(buf.glyph_at(5, 1), Some("b"));
        assert_eq!(buf.occupied(), 2);
    }

    #[test]
    fn off_grid_cells_are_dropped() {
        let mut buf = buffer(4, 4);
        buf.place(&Cell::glyph('x', Track::new(9), Track::FIRST));
        buf.place(&Cell::glyph('x', Track::FIRST, Track::new(-9)));
        assert_eq!(buf.occupied(), 0);
    }

    #[test]
    fn higher_layer_is_visible_over_lower() {
        let mut buf = buffer(3, 3);
        buf.place(&Cell::glyph('░', Track::new(2), Track::LAST).layer(Layer::ScrollTrack));
        buf.place(&Cell::glyph('█', Track::new(2), Track::LAST).layer(Layer::ScrollThumb));
        assert_eq!(buf.glyph_at(3, 2), Some("█"));

        // A frame write lands on its own plane and stays hidden.
        buf.place(&Cell::glyph('║', Track::new(2), Track::LAST));
        assert_eq!(buf.glyph_at(3, 2), Some("█"));
    }

    #[test]
    fn removing_scrollbar_reveals_the_frame_beneath() {
        let mut buf = buffer(3, 3);
        buf.place(&Cell::glyph('║', Track::new(2), Track::LAST));
        buf.place(&Cell::glyph('░', Track::new(2), Track::LAST).layer(Layer::ScrollTrack));
        assert_eq!(buf.glyph_at(3, 2), Some("░"));

        buf.remove_scrollbar_slots();
        assert_eq!(buf.glyph_at(3, 2), Some("║"));
    }

    #[test]
    fn same_layer_later_write_wins() {
        let mut buf = buffer(3, 3);
        buf.place(&Cell::glyph('═', Track::FIRST, Track::new(2)));
        buf.place(&Cell::glyph('T', Track::FIRST, Track::new(2)));
        assert_eq!(buf.glyph_at(2, 1), Some("T"));
    }

    #[test]
    fn remove_scrollbar_slots_leaves_frame() {
        let mut buf = buffer(4, 4);
        buf.place(&Cell::glyph('║', Track::new(2), Track::FIRST));
        buf.place(&Cell::glyph('░', Track::new(2), Track::LAST).layer(Layer::ScrollTrack));
        buf.place(&Cell::glyph('█', Track::new(3), Track::LAST).layer(Layer::ScrollThumb));
        buf.remove_scrollbar_slots();
        assert_eq!(buf.occupied(), 1);
        assert_eq!(buf.glyph_at(1, 2), Some("║"));
    }

    #[test]
    fn clear_empties_everything() {
        let mut buf = buffer(4, 4);
        let mut plan = Plan::new();
        plan.push(Cell::glyph('╔', Track::FIRST, Track::FIRST));
        plan.push(Cell::glyph('░', Track::new(2), Track::LAST).layer(Layer::ScrollTrack));
        buf.apply(&plan);
        assert_eq!(buf.occupied(), 2);
        buf.clear();
        assert_eq!(buf.occupied(), 0);
    }

    #[test]
    fn wide_grapheme_advances_two_columns() {
        let mut buf = buffer(6, 1);
        buf.place(&Cell::text("日a", Track::FIRST, Track::new(2)));
        assert_eq!(buf.glyph_at(2, 1), Some("日"));
        assert_eq!(buf.glyph_at(3, 1), None);
        assert_eq!(buf.glyph_at(4, 1), Some("a"));
    }

    #[test]
    #[should_panic(expected = "at least one column")]
    fn zero_width_buffer_is_rejected() {
        let _ = buffer(0, 4);
    }

    proptest! {
        #[test]
        fn placements_never_escape_bounds(
            columns in 1u16..=30,
            rows in 1u16..=30,
            row in -40i32..=40,
            col in -40i32..=40,
            len in 0usize..=40,
        ) {
            prop_assume!(row != 0 && col != 0);
            let mut buf = buffer(columns, rows);
            let text: String = std::iter::repeat_n('x', len).collect();
            buf.place(&Cell::text(text, Track::new(row), Track::new(col)));
            for (c, r, _) in buf.iter() {
                prop_assert!(buf.dims().contains(c, r));
            }
        }
    }
}
