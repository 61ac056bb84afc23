#![forbid(unsafe_code)]

//! The border painter.
//!
//! Emits the rectangular frame: corner glyphs, edge runs, and an optional
//! centered title rendered as a single highlighted multi-grapheme cell on
//! the top edge. The right and bottom coordinates are addressed with the
//! `-1` "last track" convention so the same cell list stays valid while
//! the surface's track count changes.

use crate::borders::{BorderType, Borders};
use crate::Painter;
use boxframe_core::{GridDims, Track};
use boxframe_render::Cell;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A frame with optional borders and a centered title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    borders: Borders,
    border_type: BorderType,
    title: Option<&'a str>,
}

impl Default for Frame<'_> {
    fn default() -> Self {
        Self {
            borders: Borders::ALL,
            border_type: BorderType::default(),
            title: None,
        }
    }
}

impl<'a> Frame<'a> {
    /// Create a frame with all borders enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which borders to draw.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the border glyph style.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the title centered on the top edge.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Title text cut to the interior width, with its display width.
    ///
    /// A title wider than `columns - 2` is truncated to the leading
    /// graphemes that fit; it never overlaps the corner glyphs.
    fn fitted_title(&self, dims: GridDims) -> Option<(String, u16)> {
        let title = self.title?;
        if !self.borders.contains(Borders::TOP) {
            return None;
        }
        let interior = dims.interior_columns() as usize;
        if interior == 0 {
            return None;
        }

        let mut text = String::new();
        let mut width = 0usize;
        for grapheme in title.graphemes(true) {
            let w = UnicodeWidthStr::width(grapheme);
            if width + w > interior {
                tracing::trace!(title, interior, "title truncated to interior width");
                break;
            }
            text.push_str(grapheme);
            width += w;
        }
        if width == 0 {
            return None;
        }
        Some((text, width as u16))
    }
}

impl Painter for Frame<'_> {
    fn cells(&self, dims: GridDims) -> Vec<Cell> {
        let columns = dims.columns;
        let rows = dims.rows;
        if columns == 0 || rows == 0 {
            return Vec::new();
        }

        let set = self.border_type.to_border_set();
        let mut cells = Vec::new();

        // Corners first, mirroring the paint order hosts rely on.
        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            cells.push(Cell::glyph(set.top_left, Track::FIRST, Track::FIRST));
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            cells.push(Cell::glyph(set.top_right, Track::FIRST, Track::LAST));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            cells.push(Cell::glyph(set.bottom_left, Track::LAST, Track::FIRST));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            cells.push(Cell::glyph(set.bottom_right, Track::LAST, Track::LAST));
        }

        let title = self.fitted_title(dims);
        let title_span = title.as_ref().map(|(_, width)| {
            let start = (columns - width) / 2 + 1;
            (start, start + width)
        });

        // Top edge, skipping the columns the title will occupy.
        if self.borders.contains(Borders::TOP) {
            for col in 2..columns {
                if let Some((start, end)) = title_span
                    && col >= start
                    && col < end
                {
                    continue;
                }
                cells.push(Cell::glyph(set.horizontal, Track::FIRST, Track::from_start(col)));
            }
        }
        if let (Some((text, _)), Some((start, _))) = (title, title_span) {
            cells.push(Cell::text(text, Track::FIRST, Track::from_start(start)).highlight());
        }

        // Sides.
        for row in 2..rows {
            if self.borders.contains(Borders::LEFT) {
                cells.push(Cell::glyph(set.vertical, Track::from_start(row), Track::FIRST));
            }
            if self.borders.contains(Borders::RIGHT) {
                cells.push(Cell::glyph(set.vertical, Track::from_start(row), Track::LAST));
            }
        }

        // Bottom edge.
        if self.borders.contains(Borders::BOTTOM) {
            for col in 2..columns {
                cells.push(Cell::glyph(set.horizontal, Track::LAST, Track::from_start(col)));
            }
        }

        cells
    }
}
