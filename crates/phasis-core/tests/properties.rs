//! Property-based tests for phasis-core DSP primitives.
//!
//! Tests oscillator stability, coefficient range invariants and allpass
//! boundedness using proptest for randomized input generation.

use proptest::prelude::*;
use phasis_core::{
    AllpassCascade, CoefficientRange, PhaseRotation, QuadratureLfo, clamp_or_min, f32_to_pcm16,
    pcm16_to_f32,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The phase vector keeps unit magnitude (within drift) at any rate.
    #[test]
    fn lfo_magnitude_stays_near_unity(
        rate in 0.0f32..20.0,
        sample_rate in prop::sample::select(vec![22050.0f32, 44100.0, 48000.0, 96000.0]),
        steps in 1usize..10_000,
    ) {
        let mut lfo = QuadratureLfo::new(sample_rate, rate);
        for _ in 0..steps {
            lfo.advance();
        }
        let drift = (lfo.magnitude_squared() - 1.0).abs();
        prop_assert!(drift <= 1e-3, "drift {} after {} steps", drift, steps);
    }

    /// Both modulation outputs stay within the unipolar range.
    #[test]
    fn lfo_unipolar_in_range(
        rate in 0.01f32..10.0,
        offset_turns in 0.0f32..1.0,
        steps in 1usize..5000,
    ) {
        let mut lfo = QuadratureLfo::new(44100.0, rate);
        let offset = PhaseRotation::from_turns(offset_turns);
        for _ in 0..steps {
            lfo.advance();
            let left = lfo.unipolar();
            let right = lfo.unipolar_offset(&offset);
            prop_assert!((-1e-3..=1.0 + 1e-3).contains(&left), "left {}", left);
            prop_assert!((-1e-3..=1.0 + 1e-3).contains(&right), "right {}", right);
        }
    }

    /// Any pair of bounds yields a valid, non-empty range.
    #[test]
    fn coefficient_range_always_valid(min in -5.0f32..5.0, max in -5.0f32..5.0) {
        let range = CoefficientRange::new(min, max);
        prop_assert!((0.0..=0.99).contains(&range.min()));
        prop_assert!(range.max() - range.min() >= CoefficientRange::MIN_SPAN - 1e-6);
        prop_assert!(range.max() <= 1.0 + 1e-6);
    }

    /// The swept coefficient never leaves [min, max].
    #[test]
    fn coefficient_within_bounds(
        min in 0.0f32..0.99,
        max in 0.0f32..0.99,
        depth in 0.0f32..=1.0,
        m in 0.0f32..=1.0,
    ) {
        let range = CoefficientRange::new(min, max);
        let a = range.coefficient(depth, m);
        prop_assert!(a >= range.min() - 1e-6 && a <= range.max() + 1e-6, "a = {}", a);
    }

    /// A cascade driven by bounded input stays finite and within the
    /// per-section peak gain bound (1 + 2a) raised to the stage count.
    #[test]
    fn cascade_bounded(
        stages in 0usize..=12,
        a in 0.0f32..0.99,
        input in prop::collection::vec(-1.0f32..=1.0, 1..512),
    ) {
        let mut cascade = AllpassCascade::new();
        let bound = (1.0 + 2.0 * a).powi(stages as i32) * (1.0 + 1e-3);
        for &x in &input {
            let y = cascade.process(x, a, stages);
            prop_assert!(y.is_finite());
            prop_assert!(y.abs() <= bound, "|{}| > {}", y, bound);
        }
    }

    /// 16-bit PCM survives conversion to float and back unchanged.
    #[test]
    fn pcm16_roundtrip(sample in any::<i16>()) {
        prop_assert_eq!(f32_to_pcm16(pcm16_to_f32(sample)), sample);
    }

    /// `clamp_or_min` always lands at or above the lower bound.
    #[test]
    fn clamp_or_min_respects_lower_bound(
        value in prop::num::f32::ANY,
        min in -10.0f32..10.0,
        max in -10.0f32..10.0,
    ) {
        let out = clamp_or_min(value, min, max);
        prop_assert!(out >= min);
        if min <= max {
            prop_assert!(out <= max);
        }
    }
}
