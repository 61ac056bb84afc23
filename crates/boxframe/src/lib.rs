#![forbid(unsafe_code)]

//! Public facade for the boxframe layout engine.
//!
//! boxframe renders a terminal-style box-drawing border, a centered title,
//! a legend of language ratings, and a synthetic scrollbar around a
//! preserved scrollable content region. The layout logic is a pure
//! function from `(dimensions, scroll state, content snapshot, ratings)`
//! to a list of grid cells; thin adapters apply that list to whatever the
//! host renders with.
//!
//! # Example
//!
//! ```
//! use boxframe::prelude::*;
//!
//! let mut host = MemoryHost::new(40, 10)
//!     .expect("valid grid")
//!     .with_content("<p>hi</p>", 400.0, 100.0);
//! let mut renderer = Renderer::new().title("kubascale.local");
//! renderer.handle(Trigger::Resize, &mut host);
//! assert_eq!(host.buffer().glyph_at(1, 1), Some("╔"));
//! ```

pub mod host;
pub mod renderer;

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use boxframe_core::{
    ColorToken, DimensionSource, FixedDims, GridDims, ScrollMetrics, Tier, Track, Trigger,
};

// --- Render re-exports -----------------------------------------------------

pub use boxframe_render::{BufferDiff, Cell, ContentHost, GridBuffer, Layer, Plan, Slot, Surface};

// --- Widget re-exports -----------------------------------------------------

pub use boxframe_widgets::{
    BorderSet, BorderType, Borders, ContentSlot, Frame, Legend, Painter, RatingEntry, Scrollbar,
    StatefulPainter,
};

// --- Facade types ----------------------------------------------------------

pub use host::MemoryHost;
pub use renderer::Renderer;

/// Top-level error type for boxframe hosts.
#[derive(Debug)]
pub enum Error {
    /// A host was created with a grid that has no tracks in one dimension.
    DegenerateGrid {
        /// Requested column count.
        columns: u16,
        /// Requested row count.
        rows: u16,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGrid { columns, rows } => {
                write!(f, "grid needs at least one track per axis, got {columns}x{rows}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Standard result type for boxframe APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Everything needed to drive a render pass.

    pub use crate::{
        Borders, Cell, ColorToken, ContentHost, DimensionSource, Error, Frame, GridBuffer,
        GridDims, Layer, Legend, MemoryHost, Painter, Plan, RatingEntry, Renderer, Result,
        ScrollMetrics, Scrollbar, StatefulPainter, Surface, Tier, Track, Trigger,
    };
}
