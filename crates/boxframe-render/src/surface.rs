#![forbid(unsafe_code)]

//! Adapter traits between the layout engine and the host.
//!
//! The engine computes cells; it never touches the host's rendering
//! technology directly. A DOM host implements these over grid-positioned
//! elements, a terminal host over a character buffer.
//! [`GridBuffer`](crate::buffer::GridBuffer) implements [`Surface`]
//! in-memory.

use crate::plan::Plan;
use boxframe_core::ScrollMetrics;

/// A rendering surface that decorative cells are applied to.
pub trait Surface {
    /// Remove every decorative cell from the surface.
    fn clear(&mut self);

    /// Apply a plan in paint order.
    fn apply(&mut self, plan: &Plan);

    /// Remove previously applied scrollbar cells, identified by their
    /// layer marker, leaving the frame untouched.
    fn remove_scrollbar(&mut self);
}

/// Host access to the scrollable content region.
///
/// The content region is owned by the host page, not by the engine; the
/// engine only snapshots its markup once and remounts the snapshot after
/// each frame rebuild.
pub trait ContentHost {
    /// Serialized markup of the live content region, if one exists.
    fn content_markup(&self) -> Option<String>;

    /// Replace the content region with the given markup.
    ///
    /// The previous node was cleared, not mutated in place, so the host
    /// must re-wire any scroll notification to the fresh node.
    fn mount_content(&mut self, markup: &str);

    /// Current scroll geometry of the content region, if one exists.
    fn scroll_metrics(&self) -> Option<ScrollMetrics>;

    /// Move the content region to a new scroll offset.
    fn set_scroll_offset(&mut self, offset: f64);
}
