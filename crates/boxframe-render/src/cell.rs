#![forbid(unsafe_code)]

//! Placed cells and stacking layers.
//!
//! A [`Cell`] is one placed, styled, textual unit within the grid surface.
//! Cells are created fresh on every render pass and never keep identity
//! across passes; equality is purely structural so a repeated pass can be
//! compared cell-for-cell.

use boxframe_core::{ColorToken, Track};
use unicode_width::UnicodeWidthStr;

/// Stacking order of a cell, lowest first.
///
/// The scrollbar layers double as the marker that identifies scrollbar
/// cells, so a refresh can remove exactly the stale track-and-thumb set
/// without touching the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Layer {
    /// Border, title, and legend cells.
    #[default]
    Frame = 0,
    /// Scrollbar track background.
    ScrollTrack = 1,
    /// Scrollbar thumb, drawn over the track.
    ScrollThumb = 2,
}

impl Layer {
    /// Whether this layer belongs to the synthesized scrollbar.
    #[inline]
    pub const fn is_scrollbar(self) -> bool {
        matches!(self, Self::ScrollTrack | Self::ScrollThumb)
    }
}

/// One renderable unit: text placed at a grid coordinate.
///
/// `text` may hold several graphemes (the centered title is a single
/// multi-character cell); the surface splats it across consecutive columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell text, one or more graphemes.
    pub text: String,
    /// Row track (negative = from the last row).
    pub row: Track,
    /// Column track of the first grapheme (negative = from the last column).
    pub col: Track,
    /// Stacking layer.
    pub layer: Layer,
    /// Named color token, resolved by the host styling layer.
    pub color: Option<ColorToken>,
    /// Inverted background/foreground emphasis.
    pub highlight: bool,
}

impl Cell {
    /// Create a single-glyph cell.
    pub fn glyph(glyph: char, row: Track, col: Track) -> Self {
        Self::text(glyph.to_string(), row, col)
    }

    /// Create a cell holding a text run starting at `col`.
    pub fn text(text: impl Into<String>, row: Track, col: Track) -> Self {
        Self {
            text: text.into(),
            row,
            col,
            layer: Layer::Frame,
            color: None,
            highlight: false,
        }
    }

    /// Set the stacking layer.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Set the color token.
    #[must_use]
    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    /// Enable the inverted highlight.
    #[must_use]
    pub fn highlight(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Display width of the cell text in grid columns.
    #[inline]
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Layer};
    use boxframe_core::{ColorToken, Track};

    #[test]
    fn glyph_cell_has_frame_defaults() {
        let cell = Cell::glyph('╔', Track::FIRST, Track::FIRST);
        assert_eq!(cell.text, "╔");
        assert_eq!(cell.layer, Layer::Frame);
        assert_eq!(cell.color, None);
        assert!(!cell.highlight);
        assert_eq!(cell.width(), 1);
    }

    #[test]
    fn builder_methods_compose() {
        let cell = Cell::glyph('█', Track::new(2), Track::LAST)
            .layer(Layer::ScrollThumb)
            .color(ColorToken::White)
            .highlight();
        assert_eq!(cell.layer, Layer::ScrollThumb);
        assert_eq!(cell.color, Some(ColorToken::White));
        assert!(cell.highlight);
    }

    #[test]
    fn text_width_uses_display_columns() {
        let cell = Cell::text("kubascale.com", Track::FIRST, Track::new(13));
        assert_eq!(cell.width(), 13);
    }

    #[test]
    fn scrollbar_layers_are_marked() {
        assert!(!Layer::Frame.is_scrollbar());
        assert!(Layer::ScrollTrack.is_scrollbar());
        assert!(Layer::ScrollThumb.is_scrollbar());
        assert!(Layer::ScrollTrack < Layer::ScrollThumb);
    }
}
