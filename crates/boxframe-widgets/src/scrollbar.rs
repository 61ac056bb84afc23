#![forbid(unsafe_code)]

//! The scrollbar synthesizer.
//!
//! When the content region overflows, the rightmost column gets a track
//! glyph in every interior row and exactly one thumb glyph whose row is
//! proportional to the scroll fraction. The thumb sits on a higher layer
//! than the track, and both sit above the frame so they overlay the right
//! border. No overflow, no cells.

use crate::StatefulPainter;
use boxframe_core::{ColorToken, GridDims, ScrollMetrics, Track};
use boxframe_render::{Cell, Layer};

/// Scrollbar glyph and color configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrollbar {
    track_glyph: char,
    thumb_glyph: char,
    track_color: ColorToken,
    thumb_color: ColorToken,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self {
            track_glyph: '░',
            thumb_glyph: '█',
            track_color: ColorToken::Blue,
            thumb_color: ColorToken::White,
        }
    }
}

impl Scrollbar {
    /// Create a scrollbar with the default glyphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom track and thumb glyphs.
    #[must_use]
    pub fn glyphs(mut self, track: char, thumb: char) -> Self {
        self.track_glyph = track;
        self.thumb_glyph = thumb;
        self
    }

    /// Set track and thumb color tokens.
    #[must_use]
    pub fn colors(mut self, track: ColorToken, thumb: ColorToken) -> Self {
        self.track_color = track;
        self.thumb_color = thumb;
        self
    }

    /// Thumb row for the given dimensions and scroll fraction.
    ///
    /// The usable range reserves the top and bottom border rows plus the
    /// thumb's own row: `floor(f * (rows - 3)) + 2`, so f=0 lands on row 2
    /// and f=1 on row `rows - 1`.
    fn thumb_row(dims: GridDims, fraction: f64) -> u16 {
        let range = (dims.rows - 3) as f64;
        (fraction * range).floor() as u16 + 2
    }
}

impl StatefulPainter for Scrollbar {
    type State = ScrollMetrics;

    fn cells(&self, dims: GridDims, metrics: &ScrollMetrics) -> Vec<Cell> {
        if !metrics.overflows() {
            return Vec::new();
        }
        if dims.columns == 0 || dims.rows < 3 {
            tracing::trace!(?dims, "no interior rows for a scrollbar");
            return Vec::new();
        }

        let mut cells = Vec::with_capacity(dims.rows as usize - 1);
        for row in 2..dims.rows {
            cells.push(
                Cell::glyph(self.track_glyph, Track::from_start(row), Track::LAST)
                    .layer(Layer::ScrollTrack)
                    .color(self.track_color),
            );
        }
        cells.push(
            Cell::glyph(
                self.thumb_glyph,
                Track::from_start(Self::thumb_row(dims, metrics.fraction())),
                Track::LAST,
            )
            .layer(Layer::ScrollThumb)
            .color(self.thumb_color),
        );
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::Scrollbar;
    use crate::StatefulPainter;
    use boxframe_core::{GridDims, ScrollMetrics, Track};
    use boxframe_render::{Cell, Layer};
    use proptest::prelude::*;

    const DIMS: GridDims = GridDims::new(40, 10);

    fn thumb(cells: &[Cell]) -> &Cell {
        cells
            .iter()
            .find(|c| c.layer == Layer::ScrollThumb)
            .expect("thumb cell")
    }

    #[test]
    fn no_overflow_no_cells() {
        let sb = Scrollbar::new();
        let fits = ScrollMetrics::new(0.0, 100.0, 100.0);
        assert!(sb.cells(DIMS, &fits).is_empty());
    }

    #[test]
    fn track_fills_interior_rows_of_last_column() {
        let sb = Scrollbar::new();
        let cells = sb.cells(DIMS, &ScrollMetrics::new(0.0, 400.0, 100.0));
        let track_rows: Vec<i32> = cells
            .iter()
            .filter(|c| c.layer == Layer::ScrollTrack)
            .map(|c| c.row.raw())
            .collect();
        assert_eq!(track_rows, (2..10).map(i32::from).collect::<Vec<_>>());
        assert!(cells.iter().all(|c| c.col == Track::LAST));
    }

    #[test]
    fn thumb_boundary_rows() {
        let sb = Scrollbar::new();
        let top = sb.cells(DIMS, &ScrollMetrics::new(0.0, 400.0, 100.0));
        assert_eq!(thumb(&top).row, Track::from_start(2));

        let bottom = sb.cells(DIMS, &ScrollMetrics::new(300.0, 400.0, 100.0));
        assert_eq!(thumb(&bottom).row, Track::from_start(9));
    }

    #[test]
    fn exactly_one_thumb_above_the_track() {
        let sb = Scrollbar::new();
        let cells = sb.cells(DIMS, &ScrollMetrics::new(150.0, 400.0, 100.0));
        let thumbs: Vec<&Cell> = cells
            .iter()
            .filter(|c| c.layer == Layer::ScrollThumb)
            .collect();
        assert_eq!(thumbs.len(), 1);
        assert!(thumbs[0].layer > Layer::ScrollTrack);
    }

    #[test]
    fn too_few_rows_means_no_scrollbar() {
        let sb = Scrollbar::new();
        let overflowing = ScrollMetrics::new(0.0, 400.0, 100.0);
        assert!(sb.cells(GridDims::new(40, 2), &overflowing).is_empty());
        assert!(sb.cells(GridDims::new(0, 10), &overflowing).is_empty());
    }

    #[test]
    fn minimal_grid_pins_thumb_to_single_interior_row() {
        let sb = Scrollbar::new();
        let cells = sb.cells(GridDims::new(4, 3), &ScrollMetrics::new(50.0, 400.0, 100.0));
        assert_eq!(thumb(&cells).row, Track::from_start(2));
    }

    #[test]
    fn custom_glyphs_are_used() {
        let sb = Scrollbar::new().glyphs('.', '#');
        let cells = sb.cells(DIMS, &ScrollMetrics::new(0.0, 400.0, 100.0));
        assert!(cells.iter().any(|c| c.text == "."));
        assert_eq!(thumb(&cells).text, "#");
    }

    proptest! {
        #[test]
        fn thumb_row_is_monotone_in_fraction(
            rows in 3u16..=50,
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
        ) {
            let dims = GridDims::new(20, rows);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let sb = Scrollbar::new();
            let total = 400.0;
            let visible = 100.0;
            let range = total - visible;
            let cells_lo = sb.cells(dims, &ScrollMetrics::new(lo * range, total, visible));
            let cells_hi = sb.cells(dims, &ScrollMetrics::new(hi * range, total, visible));
            let row_lo = thumb(&cells_lo).row.raw();
            let row_hi = thumb(&cells_hi).row.raw();
            prop_assert!(row_lo <= row_hi);
            prop_assert!(row_lo >= 2 && row_hi <= rows as i32 - 1);
        }
    }
}
