#![forbid(unsafe_code)]

//! Capture-once snapshot of the content region.

/// A write-once cache of the content region's serialized markup.
///
/// The frame rebuild clears the whole surface, so the renderer snapshots
/// the region's markup on the first pass and remounts that snapshot on
/// every later pass. The first offer decides: a miss latches, and a
/// region appearing later is never captured. The explicit `captured`
/// flag (rather than an emptiness check) means legitimately empty markup
/// is still a valid capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSlot {
    captured: bool,
    missed: bool,
    markup: String,
}

impl ContentSlot {
    /// Create an empty, uncaptured slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the live region's markup for capture.
    ///
    /// Only the first offer counts: `Some` markup is captured and kept,
    /// `None` latches the miss so the slot stays empty for good. Every
    /// later call is a no-op either way. Returns `true` if this call
    /// performed the capture.
    pub fn capture(&mut self, markup: Option<&str>) -> bool {
        if self.captured || self.missed {
            return false;
        }
        let Some(markup) = markup else {
            tracing::debug!("no content region on first render; none will be mounted");
            self.missed = true;
            return false;
        };
        self.markup = markup.to_owned();
        self.captured = true;
        true
    }

    /// The captured markup, if any capture has happened.
    pub fn markup(&self) -> Option<&str> {
        self.captured.then_some(self.markup.as_str())
    }

    /// Whether a capture has happened.
    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::ContentSlot;

    #[test]
    fn first_capture_sticks() {
        let mut slot = ContentSlot::new();
        assert!(slot.capture(Some("<p>hello</p>")));
        assert!(!slot.capture(Some("<p>changed</p>")));
        assert_eq!(slot.markup(), Some("<p>hello</p>"));
    }

    #[test]
    fn missing_region_on_first_offer_latches_permanently() {
        let mut slot = ContentSlot::new();
        assert!(!slot.capture(None));
        assert!(!slot.is_captured());
        assert!(!slot.capture(Some("<p>late</p>")));
        assert_eq!(slot.markup(), None);
        assert!(!slot.is_captured());
    }

    #[test]
    fn empty_markup_is_a_valid_capture() {
        let mut slot = ContentSlot::new();
        assert!(slot.capture(Some("")));
        assert!(slot.is_captured());
        assert_eq!(slot.markup(), Some(""));
        assert!(!slot.capture(Some("<p>too late</p>")));
    }

    #[test]
    fn uncaptured_slot_yields_nothing() {
        let slot = ContentSlot::new();
        assert_eq!(slot.markup(), None);
        assert!(!slot.is_captured());
    }
}
