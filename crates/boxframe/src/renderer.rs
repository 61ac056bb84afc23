#![forbid(unsafe_code)]

//! The render orchestrator.
//!
//! One `Renderer` owns the content snapshot and the painter configuration
//! and turns host triggers into passes: resize rebuilds everything, scroll
//! refreshes only the scrollbar, and wheel input outside the content
//! region is redirected into its scroll offset. Every pass is synchronous
//! and idempotent; the next trigger naturally corrects any transient
//! inconsistency.

use boxframe_core::{DimensionSource, Trigger};
use boxframe_render::{ContentHost, Plan, Surface};
use boxframe_widgets::{
    BorderType, Borders, ContentSlot, Frame, Legend, Painter, RatingEntry, Scrollbar,
    StatefulPainter,
};

/// Everything the renderer needs from a host.
pub trait RenderHost: Surface + ContentHost + DimensionSource {}

impl<T: Surface + ContentHost + DimensionSource> RenderHost for T {}

/// Drives full and partial render passes against a host.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    slot: ContentSlot,
    title: Option<String>,
    ratings: Vec<RatingEntry>,
    borders: Borders,
    border_type: BorderType,
    scrollbar: Scrollbar,
}

impl Renderer {
    /// Create a renderer with all borders and no title or legend.
    pub fn new() -> Self {
        Self {
            borders: Borders::ALL,
            ..Self::default()
        }
    }

    /// Set the centered title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the rating table shown in the legend.
    #[must_use]
    pub fn ratings(mut self, ratings: Vec<RatingEntry>) -> Self {
        self.ratings = ratings;
        self
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

    /// Set the scrollbar configuration.
    #[must_use]
    pub fn scrollbar(mut self, scrollbar: Scrollbar) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    /// Whether the content snapshot has been captured.
    pub const fn content_captured(&self) -> bool {
        self.slot.is_captured()
    }

    /// Dispatch one host trigger.
    ///
    /// Returns whether the trigger was consumed. Resize and scroll always
    /// are; wheel input is consumed only when an overflowing content
    /// region absorbed the delta, so the host knows when to suppress its
    /// default wheel handling and when to leave the input alone.
    pub fn handle(&mut self, trigger: Trigger, host: &mut impl RenderHost) -> bool {
        match trigger {
            Trigger::Resize => {
                self.render_full(host);
                true
            }
            Trigger::Scroll { offset } => {
                host.set_scroll_offset(offset);
                self.refresh_scrollbar(host);
                true
            }
            Trigger::Wheel { delta } => self.redirect_wheel(delta, host),
        }
    }

    /// Run a full pass: snapshot, clear, repaint, remount, scrollbar.
    pub fn render_full(&mut self, host: &mut impl RenderHost) {
        let dims = host.current_dimensions();
        tracing::debug!(columns = dims.columns, rows = dims.rows, "full render");

        // Snapshot before the clear destroys the live region.
        self.slot.capture(host.content_markup().as_deref());

        host.clear();

        let mut plan = Plan::new();
        let mut frame = Frame::new()
            .borders(self.borders)
            .border_type(self.border_type);
        if let Some(title) = &self.title {
            frame = frame.title(title);
        }
        plan.extend(frame.cells(dims));
        plan.extend(Legend::new(&self.ratings).cells(dims));
        host.apply(&plan);

        if let Some(markup) = self.slot.markup() {
            host.mount_content(markup);
        } else {
            tracing::debug!("no captured content; skipping mount");
        }

        self.refresh_scrollbar(host);
    }

    /// Recompute the scrollbar from the host's current scroll metrics.
    ///
    /// Idempotent: prior scrollbar cells are removed by their layer marker
    /// before the fresh set is applied, so repeated calls with unchanged
    /// state leave exactly one thumb and no stale cells.
    pub fn refresh_scrollbar(&self, host: &mut impl RenderHost) {
        host.remove_scrollbar();

        let Some(metrics) = host.scroll_metrics() else {
            tracing::trace!("no content region; scrollbar skipped");
            return;
        };
        let dims = host.current_dimensions();
        let cells = self.scrollbar.cells(dims, &metrics);
        if !cells.is_empty() {
            host.apply(&Plan::from_cells(cells));
        }
    }

    /// Redirect wheel input from outside the content region.
    ///
    /// Adds the raw delta to the region's scroll offset (clamped to the
    /// scrollable range) and refreshes the scrollbar. Returns `true` when
    /// the input was consumed and the host should suppress its default
    /// handling; without an overflowing region the wheel is left alone.
    pub fn redirect_wheel(&self, delta: f64, host: &mut impl RenderHost) -> bool {
        let Some(metrics) = host.scroll_metrics() else {
            return false;
        };
        if !metrics.overflows() {
            return false;
        }

        let next = (metrics.offset + delta).clamp(0.0, metrics.max_offset());
        host.set_scroll_offset(next);
        self.refresh_scrollbar(host);
        true
    }
}
