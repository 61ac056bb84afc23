#![forbid(unsafe_code)]

//! Painters for the boxframe layout engine.
//!
//! Every painter is a pure function from grid dimensions to a cell list:
//! nothing here touches a surface. The renderer collects painter output
//! into a plan and hands it to a surface adapter.

pub mod borders;
pub mod content;
pub mod frame;
pub mod legend;
pub mod scrollbar;

pub use borders::{BorderSet, BorderType, Borders};
pub use content::ContentSlot;
pub use frame::Frame;
pub use legend::{Legend, RatingEntry};
pub use scrollbar::Scrollbar;

use boxframe_core::GridDims;
use boxframe_render::Cell;

/// A painter produces cells from the current grid dimensions alone.
///
/// Painters are total: degenerate dimensions yield fewer cells (possibly
/// none), never a panic.
pub trait Painter {
    /// Produce the ordered cell list for the given dimensions.
    fn cells(&self, dims: GridDims) -> Vec<Cell>;
}

/// A painter whose output also depends on per-pass state.
pub trait StatefulPainter {
    /// Per-pass state sampled from the host.
    type State;

    /// Produce the ordered cell list for the given dimensions and state.
    fn cells(&self, dims: GridDims, state: &Self::State) -> Vec<Cell>;
}
