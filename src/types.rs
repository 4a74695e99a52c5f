//! Strongly-typed numeric primitives.
//!
//! Canvas-space coordinates are plain `glam::DVec2`; stroke widths get a
//! newtype so the `[1, 4]` range cannot be forgotten at call sites.

use std::fmt;

/// A point in canvas space (x right, y down)
pub type Point = glam::DVec2;

/// Stroke thickness in canvas units, always within `[MIN, MAX]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct StrokeWidth(f64);

impl StrokeWidth {
    pub const MIN: StrokeWidth = StrokeWidth(1.0);
    pub const MAX: StrokeWidth = StrokeWidth(4.0);

    /// Clamp an arbitrary value into range. NaN maps to `MIN`.
    #[inline]
    pub fn clamped(val: f64) -> StrokeWidth {
        if val.is_nan() {
            return StrokeWidth::MIN;
        }
        StrokeWidth(val.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Shift by `delta` and clamp back into range
    #[inline]
    pub fn jitter(self, delta: f64) -> StrokeWidth {
        StrokeWidth::clamped(self.0 + delta)
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        StrokeWidth::MIN
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
