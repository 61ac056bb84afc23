#![forbid(unsafe_code)]

//! The rating legend painter.
//!
//! Draws a table of language ratings inside the frame: a tier-colored
//! label column, a vertical separator, and a language list column. Each
//! entry consumes two rows (content plus a blank separator row); entries
//! that would reach the bottom border are omitted wholly, never drawn
//! partially.

use crate::Painter;
use boxframe_core::{ColorToken, GridDims, Tier, Track};
use boxframe_render::Cell;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: char = '│';

/// One row of the static rating table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingEntry {
    /// Rating tier, fixing the label color.
    pub tier: Tier,
    /// Tier label shown in the left column.
    pub label: String,
    /// Languages rated at this tier, in display order.
    pub languages: Vec<String>,
}

impl RatingEntry {
    /// Create an entry.
    pub fn new(
        tier: Tier,
        label: impl Into<String>,
        languages: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tier,
            label: label.into(),
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    fn list_text(&self) -> String {
        self.languages.join(", ")
    }
}

/// The legend block, anchored at a fixed interior offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend<'a> {
    entries: &'a [RatingEntry],
    origin_row: u16,
    origin_col: u16,
}

impl<'a> Legend<'a> {
    /// Create a legend over the given entries at the default origin (3, 3).
    pub fn new(entries: &'a [RatingEntry]) -> Self {
        Self {
            entries,
            origin_row: 3,
            origin_col: 3,
        }
    }

    /// Move the block origin.
    #[must_use]
    pub fn origin(mut self, row: u16, col: u16) -> Self {
        self.origin_row = row.max(2);
        self.origin_col = col.max(2);
        self
    }

    /// Widest label display width across all entries.
    fn label_column_width(&self) -> u16 {
        self.entries
            .iter()
            .map(|e| UnicodeWidthStr::width(e.label.as_str()))
            .max()
            .unwrap_or(0) as u16
    }
}

impl Painter for Legend<'_> {
    fn cells(&self, dims: GridDims) -> Vec<Cell> {
        if self.entries.is_empty() || !dims.has_interior() {
            return Vec::new();
        }

        // Interior spans rows/columns 2..=n-1; anything past that is border.
        let last_row = dims.rows - 1;
        let last_col = dims.columns - 1;

        let label_width = self.label_column_width();
        let sep_col = self.origin_col + label_width + 1;
        let list_col = sep_col + 2;

        let mut cells = Vec::new();
        let mut row = self.origin_row;

        for (i, entry) in self.entries.iter().enumerate() {
            if row > last_row {
                tracing::trace!(
                    drawn = i,
                    total = self.entries.len(),
                    "legend ran out of rows"
                );
                break;
            }

            let label_end = self.origin_col + UnicodeWidthStr::width(entry.label.as_str()) as u16;
            if label_end.saturating_sub(1) <= last_col {
                cells.push(
                    Cell::text(
                        entry.label.clone(),
                        Track::from_start(row),
                        Track::from_start(self.origin_col),
                    )
                    .color(entry.tier.token()),
                );
            }

            if sep_col <= last_col {
                cells.push(
                    Cell::glyph(SEPARATOR, Track::from_start(row), Track::from_start(sep_col))
                        .color(ColorToken::Blue),
                );
            }

            // The language list is drawn only when it fits before the
            // right edge; there is no truncation.
            let list = entry.list_text();
            let list_width = UnicodeWidthStr::width(list.as_str()) as u16;
            if list_width > 0 && list_col + list_width - 1 <= last_col {
                cells.push(Cell::text(
                    list,
                    Track::from_start(row),
                    Track::from_start(list_col),
                ));
            }

            // Connector in the blank row, except after the last visible entry.
            let next_fits = i + 1 < self.entries.len() && row + 2 <= last_row;
            if next_fits && sep_col <= last_col {
                cells.push(
                    Cell::glyph(
                        SEPARATOR,
                        Track::from_start(row + 1),
                        Track::from_start(sep_col),
                    )
                    .color(ColorToken::Blue),
                );
            }

            row += 2;
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::{Legend, RatingEntry};
    use crate::Painter;
    use boxframe_core::{ColorToken, GridDims, Tier, Track};
    use boxframe_render::Cell;

    fn ratings() -> Vec<RatingEntry> {
        vec![
            RatingEntry::new(Tier::Fluent, "fluent", ["Rust", "Go"]),
            RatingEntry::new(Tier::Proficient, "proficient", ["Python"]),
            RatingEntry::new(Tier::Comfortable, "comfortable", ["C"]),
            RatingEntry::new(Tier::Familiar, "familiar", ["Zig"]),
            RatingEntry::new(Tier::Learning, "learning", ["Haskell"]),
        ]
    }

    fn label_cells(cells: &[Cell]) -> Vec<&Cell> {
        cells
            .iter()
            .filter(|c| matches!(c.color, Some(ColorToken::Tier(_))))
            .collect()
    }

    #[test]
    fn entries_take_two_rows_each() {
        let ratings = ratings();
        let cells = Legend::new(&ratings).cells(GridDims::new(60, 20));
        let labels = label_cells(&cells);
        assert_eq!(labels.len(), 5);
        let rows: Vec<i32> = labels.iter().map(|c| c.row.raw()).collect();
        assert_eq!(rows, vec![3, 5, 7, 9, 11]);
    }

    #[test]
    fn rows_10_fit_exactly_four_entries() {
        let ratings = ratings();
        let cells = Legend::new(&ratings).cells(GridDims::new(60, 10));
        let labels = label_cells(&cells);
        // Rows 3, 5, 7, 9; the fifth entry would land on the border.
        assert_eq!(labels.len(), 4);
        assert!(labels.iter().all(|c| c.row.raw() <= 9));
    }

    #[test]
    fn labels_carry_their_tier_token() {
        let ratings = ratings();
        let cells = Legend::new(&ratings).cells(GridDims::new(60, 20));
        let labels = label_cells(&cells);
        assert_eq!(labels[0].color, Some(Tier::Fluent.token()));
        assert_eq!(labels[4].color, Some(Tier::Learning.token()));
    }

    #[test]
    fn separator_column_aligns_past_widest_label() {
        let ratings = ratings();
        let cells = Legend::new(&ratings).cells(GridDims::new(60, 20));
        // Widest label is "comfortable" (11) at origin column 3.
        let sep_col = Track::from_start(3 + 11 + 1);
        let separators: Vec<&Cell> = cells.iter().filter(|c| c.text == "│").collect();
        assert!(separators.iter().all(|c| c.col == sep_col));
    }

    #[test]
    fn connector_absent_after_last_visible_entry() {
        let ratings = ratings();
        let cells = Legend::new(&ratings).cells(GridDims::new(60, 20));
        let connector_rows: Vec<i32> = cells
            .iter()
            .filter(|c| c.text == "│" && c.row.raw() % 2 == 0)
            .map(|c| c.row.raw())
            .collect();
        // Blank rows 4, 6, 8, 10 get a connector; nothing after row 11.
        assert_eq!(connector_rows, vec![4, 6, 8, 10]);
    }

    #[test]
    fn language_list_is_omitted_when_it_does_not_fit() {
        let ratings = vec![RatingEntry::new(
            Tier::Fluent,
            "fluent",
            ["an implausibly long language name"],
        )];
        let cells = Legend::new(&ratings).cells(GridDims::new(24, 8));
        assert!(cells.iter().all(|c| !c.text.contains("implausibly")));
        // Label and separator still render.
        assert!(cells.iter().any(|c| c.text == "fluent"));
        assert!(cells.iter().any(|c| c.text == "│"));
    }

    #[test]
    fn no_interior_means_no_cells() {
        let ratings = ratings();
        assert!(Legend::new(&ratings).cells(GridDims::new(2, 10)).is_empty());
        assert!(Legend::new(&ratings).cells(GridDims::new(60, 2)).is_empty());
        let none: [RatingEntry; 0] = [];
        assert!(Legend::new(&none).cells(GridDims::new(60, 20)).is_empty());
    }
}
