#![forbid(unsafe_code)]

//! Render triggers delivered by the host.
//!
//! The host environment serializes event dispatch, so triggers arrive one at
//! a time and every render runs to completion before the next trigger is
//! processed. Rapid repeated resizes simply queue sequential full passes;
//! renders are idempotent, so no debouncing is performed.

/// An external notification that drives a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Viewport dimensions may have changed; a full redraw is required.
    Resize,
    /// The content region scrolled to a new offset; only the scrollbar
    /// needs recomputation.
    Scroll {
        /// New scroll offset of the content region.
        offset: f64,
    },
    /// Wheel input outside the content region; the raw delta is redirected
    /// into the region's scroll offset.
    Wheel {
        /// Raw wheel delta, in the host's scroll units.
        delta: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::Trigger;

    #[test]
    fn triggers_carry_their_payload() {
        assert_eq!(
            Trigger::Scroll { offset: 12.5 },
            Trigger::Scroll { offset: 12.5 }
        );
        assert_ne!(Trigger::Wheel { delta: 1.0 }, Trigger::Wheel { delta: 2.0 });
    }
}
