#![forbid(unsafe_code)]

//! In-memory host for embedding and tests.
//!
//! `MemoryHost` models a host page: a grid surface backed by a
//! [`GridBuffer`], an optional scrollable content region with markup and
//! scroll geometry, and a dimension source that tracks resizes. Clearing
//! the surface destroys the live region, exactly as a wholesale rebuild
//! does in a retained-mode host, so the renderer's remount path is
//! exercised for real.

use crate::{Error, Result};
use boxframe_core::{DimensionSource, GridDims, ScrollMetrics};
use boxframe_render::{ContentHost, GridBuffer, Plan, Surface};

#[derive(Debug, Clone, PartialEq)]
struct ContentRegion {
    markup: String,
}

/// A self-contained host implementing all renderer capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHost {
    dims: GridDims,
    buffer: GridBuffer,
    region: Option<ContentRegion>,
    offset: f64,
    total: f64,
    visible: f64,
}

impl MemoryHost {
    /// Create a host with an empty surface and no content region.
    ///
    /// Returns [`Error::DegenerateGrid`] if either dimension is 0.
    pub fn new(columns: u16, rows: u16) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(Error::DegenerateGrid { columns, rows });
        }
        let dims = GridDims::new(columns, rows);
        Ok(Self {
            dims,
            buffer: GridBuffer::new(dims),
            region: None,
            offset: 0.0,
            total: 0.0,
            visible: 0.0,
        })
    }

    /// Add a content region with the given markup and scroll extents.
    #[must_use]
    pub fn with_content(mut self, markup: &str, total: f64, visible: f64) -> Self {
        self.region = Some(ContentRegion {
            markup: markup.to_owned(),
        });
        self.total = total;
        self.visible = visible;
        self
    }

    /// Change the grid track counts, rebuilding the surface.
    pub fn resize(&mut self, columns: u16, rows: u16) -> Result<()> {
        if columns == 0 || rows == 0 {
            return Err(Error::DegenerateGrid { columns, rows });
        }
        self.dims = GridDims::new(columns, rows);
        self.buffer = GridBuffer::new(self.dims);
        Ok(())
    }

    /// Change the content region's scroll extents.
    pub fn set_content_extents(&mut self, total: f64, visible: f64) {
        self.total = total;
        self.visible = visible;
    }

    /// Remove the live content region, as if the node were deleted.
    pub fn remove_content_region(&mut self) {
        self.region = None;
    }

    /// The rendered surface.
    pub fn buffer(&self) -> &GridBuffer {
        &self.buffer
    }

    /// Markup of the live content region, if one is mounted.
    pub fn mounted_markup(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.markup.as_str())
    }

    /// Current scroll offset, if a region exists.
    pub fn scroll_offset(&self) -> Option<f64> {
        self.region.as_ref().map(|_| self.offset)
    }
}

impl DimensionSource for MemoryHost {
    fn current_dimensions(&self) -> GridDims {
        self.dims
    }
}

impl Surface for MemoryHost {
    fn clear(&mut self) {
        // A wholesale rebuild destroys the region node along with the
        // decorations; the renderer remounts it from the snapshot.
        self.buffer.clear_slots();
        self.region = None;
    }

    fn apply(&mut self, plan: &Plan) {
        self.buffer.apply(plan);
    }

    fn remove_scrollbar(&mut self) {
        self.buffer.remove_scrollbar_slots();
    }
}

impl ContentHost for MemoryHost {
    fn content_markup(&self) -> Option<String> {
        self.region.as_ref().map(|r| r.markup.clone())
    }

    fn mount_content(&mut self, markup: &str) {
        self.region = Some(ContentRegion {
            markup: markup.to_owned(),
        });
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.region
            .as_ref()
            .map(|_| ScrollMetrics::new(self.offset, self.total, self.visible))
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}
