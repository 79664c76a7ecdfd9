//! Stereo phaser with a quadrature LFO and per-channel feedback.
//!
//! Each channel runs its input through a cascade of first-order allpass
//! sections and blends the result with the dry signal. Where the cascade's
//! phase shift reaches 180° the blend cancels, producing notches; sweeping
//! the shared allpass coefficient with an LFO moves the notches up and down
//! the spectrum.
//!
//! Both channels are driven from one rotation-based oscillator. The right
//! channel reads the oscillator's phase vector rotated by a fixed offset,
//! so the two sweeps stay locked at a constant phase distance (180° by
//! default, giving the widest stereo image).
//!
//! # Signal Flow (per channel, per sample)
//!
//! ```text
//!            ┌──────────────── fb · z⁻¹ ◄──────────────┐
//!            ▼                                          │
//! x ──┬──► (+) ──► AP₀ ──► AP₁ ──► … ──► AP_{n-1} ──┬──┘
//!     │                                             │
//!     └──────► dry·x ──────► (+) ◄──────── wet·y ◄──┘ ──► out
//! ```

use libm::roundf;
use phasis_core::{
    AllpassCascade, AudioBlock, BlockAllocator, CoefficientRange, DEFAULT_SAMPLE_RATE, Effect,
    MAX_STAGES, ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo, PhaseRotation,
    QuadratureLfo, clamp_or_min, process_stereo_blocks, wet_dry_mix,
};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Stereo phaser effect.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Rate | 0.01–10.0 Hz | 0.35 |
/// | 1 | Depth | 0–100% | 80.0 |
/// | 2 | Feedback | −99–99% | 60.0 |
/// | 3 | Mix | 0–100% | 70.0 |
/// | 4 | Stages | 1–12 | 6 |
/// | 5 | Coeff Min | 0.0–0.99 | 0.2 |
/// | 6 | Coeff Max | 0.01–0.99 | 0.8 |
/// | 7 | Phase Offset | 0–360° | 180.0 |
/// | 8 | Neg Resonance | Off/On | Off |
///
/// Values set through [`ParameterInfo`] use the display units above; the
/// typed setters take the plain values (fractions, normalized offset).
///
/// # Concurrency
///
/// Setters are plain field writes. They may be called at any time between
/// blocks, but never while [`update`](Self::update) or any `Effect` method is
/// running on the same instance; serializing the two is the caller's job.
///
/// # Example
///
/// ```rust
/// use phasis_core::Effect;
/// use phasis_effects::StereoPhaser;
///
/// let mut phaser = StereoPhaser::new(48000.0);
/// phaser.set_rate(0.5);
/// phaser.set_depth(1.0);
/// phaser.set_feedback(-0.7);
/// phaser.set_mix(0.5);
///
/// let (left, right) = phaser.process_stereo(0.25, 0.25);
/// assert!(left.is_finite() && right.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct StereoPhaser {
    /// Allpass stage memory, one cascade per channel
    cascade: [AllpassCascade; 2],
    /// Last cascade output per channel, fed back on the next sample
    fb_state: [f32; 2],
    /// Shared modulation source
    lfo: QuadratureLfo,
    /// Modulation depth (0-1)
    depth: f32,
    /// Feedback amount (-0.99-0.99), sign not yet flipped
    feedback: f32,
    /// Wet share of the output (0-1)
    mix: f32,
    /// Active stage count (1-12)
    stages: usize,
    /// Allpass coefficient sweep bounds
    coeff: CoefficientRange,
    /// Right-channel LFO offset as a fraction of a turn (0-1)
    phase_offset: f32,
    /// `phase_offset` as a rotation, recomputed by its setter
    offset_rotation: PhaseRotation,
    /// Flip the feedback sign
    negative_resonance: bool,
}

impl StereoPhaser {
    /// Default LFO rate (Hz).
    pub const DEFAULT_RATE: f32 = 0.35;
    /// Default modulation depth.
    pub const DEFAULT_DEPTH: f32 = 0.8;
    /// Default feedback amount.
    pub const DEFAULT_FEEDBACK: f32 = 0.6;
    /// Default wet/dry mix.
    pub const DEFAULT_MIX: f32 = 0.7;
    /// Default number of allpass stages.
    pub const DEFAULT_STAGES: usize = 6;
    /// Default right-channel phase offset (half a turn).
    pub const DEFAULT_PHASE_OFFSET: f32 = 0.5;
    /// Largest feedback magnitude accepted.
    pub const MAX_FEEDBACK: f32 = 0.99;

    /// Create a phaser with default parameters and cleared state.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            cascade: [AllpassCascade::new(); 2],
            fb_state: [0.0; 2],
            lfo: QuadratureLfo::new(sample_rate, Self::DEFAULT_RATE),
            depth: Self::DEFAULT_DEPTH,
            feedback: Self::DEFAULT_FEEDBACK,
            mix: Self::DEFAULT_MIX,
            stages: Self::DEFAULT_STAGES,
            coeff: CoefficientRange::default(),
            phase_offset: Self::DEFAULT_PHASE_OFFSET,
            offset_rotation: PhaseRotation::from_turns(Self::DEFAULT_PHASE_OFFSET),
            negative_resonance: false,
        }
    }

    /// Set LFO rate in Hz (0.01-10).
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.lfo.set_rate(rate_hz);
    }

    /// Get current LFO rate in Hz.
    pub fn rate(&self) -> f32 {
        self.lfo.rate()
    }

    /// Set modulation depth (0-1).
    ///
    /// Scales the sweep upward from the minimum coefficient; zero depth
    /// holds the coefficient at the minimum.
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = clamp_or_min(depth, 0.0, 1.0);
    }

    /// Get current modulation depth.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Set feedback amount (-0.99-0.99).
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = clamp_or_min(feedback, -Self::MAX_FEEDBACK, Self::MAX_FEEDBACK);
    }

    /// Get current feedback amount, as set (before negative resonance).
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Set wet/dry mix (0-1).
    pub fn set_mix(&mut self, mix: f32) {
        self.mix = clamp_or_min(mix, 0.0, 1.0);
    }

    /// Get current wet/dry mix.
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Set number of allpass stages (1-12).
    ///
    /// Stage memory is left alone: sections that become active again
    /// resume from whatever they held when they were last used.
    pub fn set_stages(&mut self, stages: usize) {
        self.stages = stages.clamp(1, MAX_STAGES);
    }

    /// Get current number of stages.
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Set the coefficient sweep bounds.
    ///
    /// See [`CoefficientRange::new`] for the clamping rules.
    pub fn set_coeff_range(&mut self, min: f32, max: f32) {
        self.coeff = CoefficientRange::new(min, max);
    }

    /// Get current coefficient sweep bounds.
    pub fn coeff_range(&self) -> CoefficientRange {
        self.coeff
    }

    /// Lower coefficient bound.
    pub fn coeff_min(&self) -> f32 {
        self.coeff.min()
    }

    /// Upper coefficient bound.
    pub fn coeff_max(&self) -> f32 {
        self.coeff.max()
    }

    /// Set the right channel's LFO phase offset as a fraction of a turn (0-1).
    pub fn set_lfo_phase_offset(&mut self, offset: f32) {
        self.phase_offset = clamp_or_min(offset, 0.0, 1.0);
        self.offset_rotation = PhaseRotation::from_turns(self.phase_offset);
    }

    /// Get current LFO phase offset (0-1).
    pub fn lfo_phase_offset(&self) -> f32 {
        self.phase_offset
    }

    /// Invert the feedback sign.
    pub fn set_negative_resonance(&mut self, enabled: bool) {
        self.negative_resonance = enabled;
    }

    /// Whether the feedback sign is inverted.
    pub fn negative_resonance(&self) -> bool {
        self.negative_resonance
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.lfo.sample_rate()
    }

    /// LFO phase vector as `(cos, sin)`.
    pub fn lfo_phase_vector(&self) -> (f32, f32) {
        self.lfo.phase_vector()
    }

    /// Feedback memory as `(left, right)`.
    pub fn feedback_state(&self) -> (f32, f32) {
        (self.fb_state[LEFT], self.fb_state[RIGHT])
    }

    /// Stage memory as `(left, right)`, all cells including inactive ones.
    pub fn stage_state(&self) -> (&[f32; MAX_STAGES], &[f32; MAX_STAGES]) {
        (self.cascade[LEFT].state(), self.cascade[RIGHT].state())
    }

    /// Feedback with negative resonance applied.
    #[inline]
    fn signed_feedback(&self) -> f32 {
        if self.negative_resonance {
            -self.feedback
        } else {
            self.feedback
        }
    }

    /// Run one channel: feedback injection, cascade, memory update, blend.
    #[inline]
    fn channel(&mut self, ch: usize, input: f32, a: f32, fb: f32) -> f32 {
        let wet = self.cascade[ch].process(input + fb * self.fb_state[ch], a, self.stages);
        self.fb_state[ch] = wet;
        wet_dry_mix(input, wet, self.mix)
    }

    /// Process one tick of 16-bit blocks.
    ///
    /// If one channel is missing it is synthesized from the other using a
    /// block taken from `allocator`. Returns `None` when both are missing,
    /// or when the allocator has nothing to give; in that case the block is
    /// dropped whole and the phaser state does not move.
    pub fn update<A, const N: usize>(
        &mut self,
        left: Option<AudioBlock<N>>,
        right: Option<AudioBlock<N>>,
        allocator: &mut A,
    ) -> Option<(AudioBlock<N>, AudioBlock<N>)>
    where
        A: BlockAllocator<N> + ?Sized,
    {
        process_stereo_blocks(self, left, right, allocator)
    }
}

impl Default for StereoPhaser {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl Effect for StereoPhaser {
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        self.lfo.advance();
        let m_l = self.lfo.unipolar();
        let m_r = self.lfo.unipolar_offset(&self.offset_rotation);

        let a_l = self.coeff.coefficient(self.depth, m_l);
        let a_r = self.coeff.coefficient(self.depth, m_r);
        let fb = self.signed_feedback();

        (
            self.channel(LEFT, left, a_l, fb),
            self.channel(RIGHT, right, a_r, fb),
        )
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.lfo.set_sample_rate(sample_rate);
    }

    /// Restore every parameter to its default and clear all state.
    ///
    /// The sample rate is kept.
    fn reset(&mut self) {
        *self = Self::new(self.sample_rate());
    }
}

impl ParameterInfo for StereoPhaser {
    fn param_count(&self) -> usize {
        9
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        let stepped = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
        let desc = match index {
            0 => ParamDescriptor::rate_hz(
                QuadratureLfo::MIN_RATE,
                QuadratureLfo::MAX_RATE,
                Self::DEFAULT_RATE,
            )
            .with_id(ParamId(100), "phsr_rate"),
            1 => ParamDescriptor {
                default: Self::DEFAULT_DEPTH * 100.0,
                ..ParamDescriptor::depth()
            }
            .with_id(ParamId(101), "phsr_depth"),
            2 => ParamDescriptor {
                default: Self::DEFAULT_FEEDBACK * 100.0,
                ..ParamDescriptor::feedback()
            }
            .with_id(ParamId(102), "phsr_feedback"),
            3 => ParamDescriptor {
                default: Self::DEFAULT_MIX * 100.0,
                ..ParamDescriptor::mix()
            }
            .with_id(ParamId(103), "phsr_mix"),
            4 => ParamDescriptor::custom(
                "Stages",
                "Stg",
                1.0,
                MAX_STAGES as f32,
                Self::DEFAULT_STAGES as f32,
            )
            .with_step(1.0)
            .with_id(ParamId(104), "phsr_stages")
            .with_flags(stepped),
            5 => ParamDescriptor::custom(
                "Coeff Min",
                "CoefMin",
                0.0,
                CoefficientRange::LIMIT,
                CoefficientRange::DEFAULT_MIN,
            )
            .with_id(ParamId(105), "phsr_coeff_min"),
            6 => ParamDescriptor::custom(
                "Coeff Max",
                "CoefMax",
                CoefficientRange::MIN_SPAN,
                CoefficientRange::LIMIT,
                CoefficientRange::DEFAULT_MAX,
            )
            .with_id(ParamId(106), "phsr_coeff_max"),
            7 => ParamDescriptor::custom(
                "Phase Offset",
                "Offset",
                0.0,
                360.0,
                Self::DEFAULT_PHASE_OFFSET * 360.0,
            )
            .with_unit(ParamUnit::Degrees)
            .with_step(1.0)
            .with_id(ParamId(107), "phsr_phase_offset"),
            8 => ParamDescriptor::custom("Neg Resonance", "NegRes", 0.0, 1.0, 0.0)
                .with_step(1.0)
                .with_id(ParamId(108), "phsr_neg_resonance")
                .with_flags(stepped),
            _ => return None,
        };
        Some(desc)
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.rate(),
            1 => self.depth * 100.0,
            2 => self.feedback * 100.0,
            3 => self.mix * 100.0,
            4 => self.stages as f32,
            5 => self.coeff.min(),
            6 => self.coeff.max(),
            7 => self.phase_offset * 360.0,
            8 => {
                if self.negative_resonance {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_rate(value),
            1 => self.set_depth(value / 100.0),
            2 => self.set_feedback(value / 100.0),
            3 => self.set_mix(value / 100.0),
            // NaN and negatives saturate to 0 and then clamp to 1
            4 => self.set_stages(roundf(value) as usize),
            5 => self.set_coeff_range(value, self.coeff.max()),
            6 => self.set_coeff_range(self.coeff.min(), value),
            7 => self.set_lfo_phase_offset(value / 360.0),
            8 => self.set_negative_resonance(value > 0.5),
            _ => {}
        }
    }
}
