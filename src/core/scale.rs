use serde::{Deserialize, Serialize};

use crate::core::AxisBounds;
use crate::core::primitives::lerp;

/// Affine map from a data domain onto a pixel interval.
///
/// `pixel_start` receives `domain.min` and `pixel_end` receives `domain.max`,
/// so an inverted axis simply passes the bottom edge as `pixel_start`.
/// A zero-width domain maps every value onto the interval midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: AxisBounds, pixel_start: f64, pixel_end: f64) -> Self {
        Self {
            domain_start: domain.min,
            domain_end: domain.max,
            pixel_start,
            pixel_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Normalized position of `value` inside the domain.
    #[must_use]
    pub fn fraction(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return 0.5;
        }
        (value - self.domain_start) / span
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        lerp(self.pixel_start, self.pixel_end, self.fraction(value))
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let pixel_span = self.pixel_end - self.pixel_start;
        if pixel_span == 0.0 {
            return lerp(self.domain_start, self.domain_end, 0.5);
        }
        let normalized = (pixel - self.pixel_start) / pixel_span;
        lerp(self.domain_start, self.domain_end, normalized)
    }
}
