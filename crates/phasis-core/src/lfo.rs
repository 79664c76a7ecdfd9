//! Quadrature low-frequency oscillator.
//!
//! The oscillator keeps its phase as a (cosine, sine) vector and advances it
//! by multiplying with a fixed 2×2 rotation every sample. That replaces a
//! per-sample `sin()` call with four multiplies and two adds, and gives a
//! cosine output for free, which is what lets a second, phase-shifted
//! channel be derived without running a second oscillator.
//!
//! # Drift
//!
//! Repeated rotation accumulates rounding error in the vector's magnitude.
//! The oscillator does not renormalize; in f32 the drift over ten thousand
//! samples stays below 1e-3, which is inaudible as a modulation-depth change.

use core::f32::consts::TAU;
use libm::{cosf, sinf};

use crate::effect::DEFAULT_SAMPLE_RATE;
use crate::math::clamp_or_min;

/// A fixed angular offset expressed as a rotation (cos θ, sin θ).
///
/// Computed once from an angle and then applied to any number of phase
/// vectors with the same rotation identity the oscillator uses to advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRotation {
    cos: f32,
    sin: f32,
}

impl PhaseRotation {
    /// The zero rotation.
    pub const IDENTITY: Self = Self { cos: 1.0, sin: 0.0 };

    /// Rotation by `radians`.
    pub fn from_radians(radians: f32) -> Self {
        Self {
            cos: cosf(radians),
            sin: sinf(radians),
        }
    }

    /// Rotation by a fraction of a full turn (0.5 = 180°).
    pub fn from_turns(turns: f32) -> Self {
        Self::from_radians(turns * TAU)
    }

    /// Cosine of the rotation angle.
    #[inline]
    pub fn cos(&self) -> f32 {
        self.cos
    }

    /// Sine of the rotation angle.
    #[inline]
    pub fn sin(&self) -> f32 {
        self.sin
    }

    /// Rotate the vector `(cos, sin)` by this angle.
    ///
    /// ```text
    /// cos' = cos·Δcos − sin·Δsin
    /// sin' = sin·Δcos + cos·Δsin
    /// ```
    #[inline]
    pub fn rotate(&self, cos: f32, sin: f32) -> (f32, f32) {
        (
            cos * self.cos - sin * self.sin,
            sin * self.cos + cos * self.sin,
        )
    }
}

impl Default for PhaseRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation-based sine/cosine oscillator.
///
/// # Example
///
/// ```rust
/// use phasis_core::{PhaseRotation, QuadratureLfo};
///
/// let mut lfo = QuadratureLfo::new(44100.0, 0.35);
/// let offset = PhaseRotation::from_turns(0.5);
///
/// lfo.advance();
/// let left = lfo.unipolar();
/// let right = lfo.unipolar_offset(&offset);
/// assert!((left + right - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct QuadratureLfo {
    /// Current phase vector, cosine component
    cos: f32,
    /// Current phase vector, sine component
    sin: f32,
    /// Per-sample rotation derived from rate and sample rate
    step: PhaseRotation,
    /// Oscillator rate in Hz (clamped)
    rate: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl QuadratureLfo {
    /// Slowest supported rate (Hz).
    pub const MIN_RATE: f32 = 0.01;
    /// Fastest supported rate (Hz).
    pub const MAX_RATE: f32 = 10.0;

    /// Create an oscillator at phase zero, i.e. the vector (1, 0).
    pub fn new(sample_rate: f32, rate_hz: f32) -> Self {
        let mut lfo = Self {
            cos: 1.0,
            sin: 0.0,
            step: PhaseRotation::IDENTITY,
            rate: Self::MIN_RATE,
            sample_rate,
        };
        lfo.set_rate(rate_hz);
        lfo
    }

    /// Set the rate in Hz, clamped to [0.01, 10.0].
    ///
    /// Recomputes the per-sample rotation. The phase vector is untouched, so
    /// a rate change never causes a discontinuity.
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate = clamp_or_min(rate_hz, Self::MIN_RATE, Self::MAX_RATE);
        self.update_step();
    }

    /// Current (clamped) rate in Hz.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Set the sample rate and recompute the per-sample rotation.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_step();
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The per-sample rotation currently in use.
    pub fn step(&self) -> PhaseRotation {
        self.step
    }

    fn update_step(&mut self) {
        self.step = PhaseRotation::from_radians(TAU * self.rate / self.sample_rate);
    }

    /// Return the phase vector to (1, 0).
    pub fn reset(&mut self) {
        self.cos = 1.0;
        self.sin = 0.0;
    }

    /// Advance the phase by one sample.
    #[inline]
    pub fn advance(&mut self) {
        let (cos, sin) = self.step.rotate(self.cos, self.sin);
        self.cos = cos;
        self.sin = sin;
    }

    /// Current phase vector as `(cos, sin)`.
    #[inline]
    pub fn phase_vector(&self) -> (f32, f32) {
        (self.cos, self.sin)
    }

    /// Squared magnitude of the phase vector (ideally 1.0).
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.cos * self.cos + self.sin * self.sin
    }

    /// Sine of the current phase rescaled from [-1, 1] to [0, 1].
    #[inline]
    pub fn unipolar(&self) -> f32 {
        0.5 * (self.sin + 1.0)
    }

    /// Sine of the current phase shifted by `offset`, rescaled to [0, 1].
    #[inline]
    pub fn unipolar_offset(&self, offset: &PhaseRotation) -> f32 {
        let (_, sin) = offset.rotate(self.cos, self.sin);
        0.5 * (sin + 1.0)
    }
}

impl Default for QuadratureLfo {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, 1.0)
    }
}
