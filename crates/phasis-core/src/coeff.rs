//! Allpass coefficient range.
//!
//! Maps a unipolar modulation value onto the first-order allpass
//! coefficient. The sweep always starts at `min`; depth scales how far
//! towards `max` it travels.

use crate::math::clamp_or_min;

/// Bounds of the allpass coefficient sweep.
///
/// Both bounds are clamped on construction:
///
/// - `min` to [0.0, 0.99]
/// - `max` to [min + 0.01, 0.99], with the lower bound winning
///
/// so `max - min >= 0.01` always holds. When `min` sits above 0.98 the
/// lower bound exceeds 0.99 and `max` lands at `min + 0.01` (at most 1.0).
///
/// # Example
///
/// ```rust
/// use phasis_core::CoefficientRange;
///
/// let range = CoefficientRange::new(0.2, 0.8);
/// assert_eq!(range.coefficient(0.0, 1.0), 0.2);
/// assert!((range.coefficient(1.0, 1.0) - 0.8).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientRange {
    min: f32,
    max: f32,
}

impl CoefficientRange {
    /// Largest coefficient either bound may be set to directly.
    pub const LIMIT: f32 = 0.99;
    /// Minimum gap enforced between `min` and `max`.
    pub const MIN_SPAN: f32 = 0.01;
    /// Default lower bound.
    pub const DEFAULT_MIN: f32 = 0.2;
    /// Default upper bound.
    pub const DEFAULT_MAX: f32 = 0.8;

    /// Build a range, clamping both bounds.
    pub fn new(min: f32, max: f32) -> Self {
        let min = clamp_or_min(min, 0.0, Self::LIMIT);
        let max = clamp_or_min(max, min + Self::MIN_SPAN, Self::LIMIT);
        Self { min, max }
    }

    /// Lower bound (the coefficient at zero modulation).
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound (reached at full depth and full modulation).
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Sweep excursion at the given depth: `(max - min) * depth`.
    ///
    /// Hoisted out of the per-sample loop by callers that process blocks.
    #[inline]
    pub fn excursion(&self, depth: f32) -> f32 {
        (self.max - self.min) * depth
    }

    /// Coefficient for modulation value `m` in [0, 1] at the given depth.
    ///
    /// `a = min + (max - min) * depth * m`. A depth of zero pins the
    /// coefficient to `min`, not to the middle of the range.
    #[inline]
    pub fn coefficient(&self, depth: f32, m: f32) -> f32 {
        self.min + self.excursion(depth) * m
    }
}

impl Default for CoefficientRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}
