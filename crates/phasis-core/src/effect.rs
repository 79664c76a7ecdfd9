//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between the DSP code and whatever drives
//! it: the block layer in [`crate::block`], the offline host in `phasis-io`,
//! or a test harness feeding samples directly.
//!
//! ## Design Decisions
//!
//! - **Stereo processing**: One normalized `f32` sample per channel in,
//!   one per channel out. Effects that modulate the channels differently
//!   (the phaser's offset LFOs) need both channels in the same call.
//!
//! - **Object-safe**: `dyn Effect` works for runtime dispatch, but generic
//!   dispatch is what the block layer uses.
//!
//! - **No allocations**: All methods may be called from the audio context.
//!
//! - **Caller-serialized**: Nothing here synchronizes. Parameter writes must
//!   not overlap an in-flight `process_*` call on the same instance; hosts
//!   that change parameters from another thread have to serialize those
//!   writes against block processing themselves.

/// Sample rate used when none is given (Hz).
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

/// Core trait for stereo audio effects.
///
/// # Example
///
/// ```rust
/// use phasis_core::Effect;
///
/// struct Swap;
///
/// impl Effect for Swap {
///     fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
///         (right, left)
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut swap = Swap;
/// assert_eq!(swap.process_stereo(0.25, -0.5), (-0.5, 0.25));
/// ```
pub trait Effect {
    /// Process one stereo sample frame.
    ///
    /// Inputs are nominally in [-1.0, 1.0]. Outputs are not clamped here;
    /// saturation happens when converting back to the block's PCM format.
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32);

    /// Process a block of stereo samples in place.
    ///
    /// Default implementation calls `process_stereo()` once per frame, in order.
    ///
    /// # Panics
    /// Default implementation debug-asserts `left.len() == right.len()`.
    fn process_block_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "Left and right buffers must have same length"
        );
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let (out_l, out_r) = self.process_stereo(*l, *r);
            *l = out_l;
            *r = out_r;
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any sample-rate-dependent values (LFO increments,
    /// filter coefficients) here.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset the effect.
    ///
    /// What a reset restores is effect-specific; see the implementor's docs.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gain(f32);

    impl Effect for Gain {
        fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
            (left * self.0, right * self.0)
        }
        fn set_sample_rate(&mut self, _: f32) {}
        fn reset(&mut self) {}
    }

    #[test]
    fn test_block_default_processes_every_frame() {
        let mut gain = Gain(2.0);
        let mut left = [1.0, 2.0, 3.0];
        let mut right = [-1.0, 0.5, 0.0];
        gain.process_block_stereo(&mut left, &mut right);
        assert_eq!(left, [2.0, 4.0, 6.0]);
        assert_eq!(right, [-2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_block_preserves_order() {
        struct Counter(f32);
        impl Effect for Counter {
            fn process_stereo(&mut self, _: f32, _: f32) -> (f32, f32) {
                self.0 += 1.0;
                (self.0, -self.0)
            }
            fn set_sample_rate(&mut self, _: f32) {}
            fn reset(&mut self) {
                self.0 = 0.0;
            }
        }

        let mut counter = Counter(0.0);
        let mut left = [0.0; 4];
        let mut right = [0.0; 4];
        counter.process_block_stereo(&mut left, &mut right);
        assert_eq!(left, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(right, [-1.0, -2.0, -3.0, -4.0]);
    }
}
