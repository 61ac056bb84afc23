#![forbid(unsafe_code)]

//! Scroll metrics for the content region.

/// Scroll geometry of the content region, sampled once per render pass.
///
/// Extents are in the host's own units (pixels for a DOM host, rows for a
/// terminal host); only ratios matter to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top of the content.
    pub offset: f64,
    /// Total scrollable extent of the content.
    pub total: f64,
    /// Visible extent of the region.
    pub visible: f64,
}

impl ScrollMetrics {
    /// Create new metrics.
    #[inline]
    pub const fn new(offset: f64, total: f64, visible: f64) -> Self {
        Self {
            offset,
            total,
            visible,
        }
    }

    /// Whether the content extends past the visible region.
    #[inline]
    pub fn overflows(&self) -> bool {
        self.total > self.visible
    }

    /// Largest meaningful scroll offset.
    #[inline]
    pub fn max_offset(&self) -> f64 {
        (self.total - self.visible).max(0.0)
    }

    /// Normalized scroll position in `[0, 1]`.
    ///
    /// Returns `0.0` when the content does not overflow.
    pub fn fraction(&self) -> f64 {
        let range = self.max_offset();
        if range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollMetrics;

    #[test]
    fn overflow_requires_strictly_larger_content() {
        assert!(ScrollMetrics::new(0.0, 200.0, 100.0).overflows());
        assert!(!ScrollMetrics::new(0.0, 100.0, 100.0).overflows());
        assert!(!ScrollMetrics::new(0.0, 50.0, 100.0).overflows());
    }

    #[test]
    fn fraction_is_clamped() {
        let m = ScrollMetrics::new(50.0, 200.0, 100.0);
        assert_eq!(m.fraction(), 0.5);
        assert_eq!(ScrollMetrics::new(-10.0, 200.0, 100.0).fraction(), 0.0);
        assert_eq!(ScrollMetrics::new(500.0, 200.0, 100.0).fraction(), 1.0);
    }

    #[test]
    fn fraction_without_overflow_is_zero() {
        assert_eq!(ScrollMetrics::new(30.0, 100.0, 100.0).fraction(), 0.0);
        assert_eq!(ScrollMetrics::new(30.0, 80.0, 100.0).max_offset(), 0.0);
    }
}
