//! Mathematical utility functions for DSP.
//!
//! Allocation-free helpers shared by the phaser and the block layer.
//!
//! # Mixing
//!
//! - [`wet_dry_mix`] - Complementary dry/wet blend
//!
//! # Range Handling
//!
//! - [`hard_clip`] - Symmetric saturation
//! - [`clamp_or_min`] - Clamp that tolerates NaN and inverted bounds
//!
//! # Sample Conversion
//!
//! - [`pcm16_to_f32`] / [`f32_to_pcm16`] - 16-bit PCM to normalized float and back

/// Full-scale divisor for 16-bit PCM.
const PCM16_SCALE: f32 = 32768.0;

/// Complementary dry/wet blend: `dry * (1 - mix) + wet * mix`.
///
/// The two gains always sum to one; there is no independent dry or wet
/// level. At `mix == 0.0` the result is exactly `dry` for any finite `wet`.
///
/// # Example
/// ```rust
/// use phasis_core::wet_dry_mix;
///
/// assert_eq!(wet_dry_mix(0.3, -0.9, 0.0), 0.3);
/// assert_eq!(wet_dry_mix(0.3, -0.9, 1.0), -0.9);
/// ```
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    (1.0 - mix) * dry + mix * wet
}

/// Hard clip to ±threshold range.
///
/// Abrupt limiting, never wraps.
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.clamp(-threshold, threshold)
}

/// Clamp `value` into `[min, max]`, with the lower bound taking precedence.
///
/// Unlike [`f32::clamp`] this never panics: if `min > max` the result is
/// `min`, and a NaN `value` also yields `min`. Parameter setters use it so
/// that no input, however malformed, can push NaN into the audio path.
///
/// # Example
/// ```rust
/// use phasis_core::clamp_or_min;
///
/// assert_eq!(clamp_or_min(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(clamp_or_min(f32::NAN, 0.25, 1.0), 0.25);
/// assert_eq!(clamp_or_min(0.5, 1.0, 0.99), 1.0);
/// ```
#[inline]
pub fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}

/// Convert a 16-bit PCM sample to a normalized float in [-1.0, 1.0).
#[inline]
pub fn pcm16_to_f32(sample: i16) -> f32 {
    f32::from(sample) / PCM16_SCALE
}

/// Convert a normalized float back to 16-bit PCM with saturation.
///
/// The value is hard-clipped to [-1.0, 1.0] first, then scaled by 32768 and
/// truncated toward zero. The saturating float-to-int cast maps +1.0 to
/// `i16::MAX`, so out-of-range values clip rather than wrap, and
/// `f32_to_pcm16(pcm16_to_f32(s)) == s` for every sample.
///
/// # Example
/// ```rust
/// use phasis_core::{f32_to_pcm16, pcm16_to_f32};
///
/// assert_eq!(f32_to_pcm16(4.0), i16::MAX);
/// assert_eq!(f32_to_pcm16(-4.0), i16::MIN);
/// assert_eq!(f32_to_pcm16(pcm16_to_f32(1234)), 1234);
/// ```
#[inline]
pub fn f32_to_pcm16(x: f32) -> i16 {
    (hard_clip(x, 1.0) * PCM16_SCALE) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wet_dry_mix_endpoints() {
        assert_eq!(wet_dry_mix(0.5, 0.25, 0.0), 0.5);
        assert_eq!(wet_dry_mix(0.5, 0.25, 1.0), 0.25);
        assert!((wet_dry_mix(1.0, 0.0, 0.7) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_hard_clip() {
        assert_eq!(hard_clip(1.5, 1.0), 1.0);
        assert_eq!(hard_clip(-1.5, 1.0), -1.0);
        assert_eq!(hard_clip(0.25, 1.0), 0.25);
    }

    #[test]
    fn test_clamp_or_min_inverted_bounds() {
        // Lower bound wins when the window is empty
        assert_eq!(clamp_or_min(0.0, 1.0, 0.99), 1.0);
        assert_eq!(clamp_or_min(2.0, 1.0, 0.99), 1.0);
    }

    #[test]
    fn test_clamp_or_min_nan() {
        assert_eq!(clamp_or_min(f32::NAN, -0.99, 0.99), -0.99);
    }

    #[test]
    fn test_pcm16_roundtrip_exact() {
        for s in [i16::MIN, -12345, -1, 0, 1, 12345, i16::MAX] {
            assert_eq!(f32_to_pcm16(pcm16_to_f32(s)), s, "sample {s}");
        }
    }

    #[test]
    fn test_pcm16_saturates() {
        assert_eq!(f32_to_pcm16(1.0), i16::MAX);
        assert_eq!(f32_to_pcm16(-1.0), i16::MIN);
        assert_eq!(f32_to_pcm16(1e9), i16::MAX);
        assert_eq!(f32_to_pcm16(-1e9), i16::MIN);
        assert_eq!(f32_to_pcm16(f32::INFINITY), i16::MAX);
    }
}
