#![forbid(unsafe_code)]

//! Grid geometry primitives.
//!
//! The grid uses 1-indexed track coordinates. A negative index addresses
//! tracks from the end of the grid, so `-1` always means "last track"
//! regardless of the current track count.

/// A grid track coordinate.
///
/// Positive values count from the first track (`1` = first). Negative values
/// count from the last track (`-1` = last). Zero is not a valid track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track(i32);

impl Track {
    /// The first track.
    pub const FIRST: Self = Self(1);

    /// The last track, whatever the current track count is.
    pub const LAST: Self = Self(-1);

    /// Create a track from a raw signed index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is zero; the grid has no track zero.
    #[inline]
    pub const fn new(index: i32) -> Self {
        assert!(index != 0, "track index must be non-zero");
        Self(index)
    }

    /// Create a track counted from the start (`1` = first).
    #[inline]
    pub const fn from_start(index: u16) -> Self {
        assert!(index != 0, "track index must be non-zero");
        Self(index as i32)
    }

    /// Create a track counted from the end (`1` = last).
    #[inline]
    pub const fn from_end(index: u16) -> Self {
        assert!(index != 0, "track index must be non-zero");
        Self(-(index as i32))
    }

    /// Raw signed index.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Resolve to an absolute 1-based position within `count` tracks.
    ///
    /// Returns `None` when the track falls outside the grid (including any
    /// resolution against a zero-track grid).
    #[inline]
    pub const fn resolve(self, count: u16) -> Option<u16> {
        if self.0 > 0 {
            if self.0 <= count as i32 {
                Some(self.0 as u16)
            } else {
                None
            }
        } else {
            let pos = count as i32 + 1 + self.0;
            if pos >= 1 { Some(pos as u16) } else { None }
        }
    }
}

impl From<i32> for Track {
    fn from(index: i32) -> Self {
        Self::new(index)
    }
}

/// Current column/row track counts of a grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDims {
    /// Number of column tracks.
    pub columns: u16,
    /// Number of row tracks.
    pub rows: u16,
}

impl GridDims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Columns between the left and right border tracks.
    #[inline]
    pub const fn interior_columns(&self) -> u16 {
        self.columns.saturating_sub(2)
    }

    /// Rows between the top and bottom border tracks.
    #[inline]
    pub const fn interior_rows(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    /// Whether the grid has room for anything inside a full border.
    #[inline]
    pub const fn has_interior(&self) -> bool {
        self.interior_columns() > 0 && self.interior_rows() > 0
    }

    /// Whether a resolved 1-based position lies on the grid.
    #[inline]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= 1 && column <= self.columns && row >= 1 && row <= self.rows
    }
}

/// Capability for discovering the current grid dimensions.
///
/// The track count of the surrounding surface may change on resize, so the
/// renderer queries this on every pass instead of caching a static
/// configuration. Implementations must be pure reads.
pub trait DimensionSource {
    /// Current column/row track counts.
    fn current_dimensions(&self) -> GridDims;
}

/// A fixed dimension source for tests and static hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDims(pub GridDims);

impl FixedDims {
    /// Create a fixed source with the given track counts.
    #[inline]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self(GridDims::new(columns, rows))
    }
}

impl DimensionSource for FixedDims {
    fn current_dimensions(&self) -> GridDims {
        self.0
    }
}
