//! Property-based tests for the stereo phaser.
//!
//! Parameter clamping, the mix=0 identity, bounded output under extreme
//! settings and reset reproducibility, using proptest for randomized
//! parameters and input.

use phasis_core::{AudioBlock, BlockPool, Effect, MAX_STAGES};
use phasis_effects::StereoPhaser;
use proptest::prelude::*;

const BLOCK: usize = 64;

/// Every setter input, including non-finite values.
fn any_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        -100.0f32..100.0,
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

/// A configured phaser.
#[derive(Debug, Clone)]
struct Settings {
    rate: f32,
    depth: f32,
    feedback: f32,
    mix: f32,
    stages: usize,
    coeff_min: f32,
    coeff_max: f32,
    offset: f32,
    negative: bool,
}

fn settings() -> impl Strategy<Value = Settings> {
    (
        (0.01f32..10.0, 0.0f32..=1.0, -0.99f32..=0.99, 0.0f32..=1.0),
        (1usize..=MAX_STAGES, 0.0f32..0.99, 0.0f32..0.99, 0.0f32..=1.0),
        any::<bool>(),
    )
        .prop_map(
            |((rate, depth, feedback, mix), (stages, coeff_min, coeff_max, offset), negative)| {
                Settings {
                    rate,
                    depth,
                    feedback,
                    mix,
                    stages,
                    coeff_min,
                    coeff_max,
                    offset,
                    negative,
                }
            },
        )
}

fn configure(phaser: &mut StereoPhaser, s: &Settings) {
    phaser.set_rate(s.rate);
    phaser.set_depth(s.depth);
    phaser.set_feedback(s.feedback);
    phaser.set_mix(s.mix);
    phaser.set_stages(s.stages);
    phaser.set_coeff_range(s.coeff_min, s.coeff_max);
    phaser.set_lfo_phase_offset(s.offset);
    phaser.set_negative_resonance(s.negative);
}

fn blocks(samples: &[i16]) -> Vec<AudioBlock<BLOCK>> {
    samples
        .chunks(BLOCK)
        .map(|chunk| {
            let mut block = AudioBlock::<BLOCK>::silent();
            block.samples_mut()[..chunk.len()].copy_from_slice(chunk);
            block
        })
        .collect()
}

fn run(phaser: &mut StereoPhaser, left: &[i16], right: &[i16]) -> (Vec<i16>, Vec<i16>) {
    let mut pool: BlockPool<BLOCK> = BlockPool::new(0);
    let mut out_l = Vec::new();
    let mut out_r = Vec::new();
    for (l, r) in blocks(left).into_iter().zip(blocks(right)) {
        let (l, r) = phaser
            .update(Some(l), Some(r), &mut pool)
            .expect("stereo blocks are always processed");
        out_l.extend_from_slice(l.samples());
        out_r.extend_from_slice(r.samples());
    }
    (out_l, out_r)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn setters_stay_in_range(
        rate in any_f32(),
        depth in any_f32(),
        feedback in any_f32(),
        mix in any_f32(),
        stages in any::<usize>(),
        coeff_min in any_f32(),
        coeff_max in any_f32(),
        offset in any_f32(),
    ) {
        let mut phaser = StereoPhaser::new(44100.0);
        phaser.set_rate(rate);
        phaser.set_depth(depth);
        phaser.set_feedback(feedback);
        phaser.set_mix(mix);
        phaser.set_stages(stages);
        phaser.set_coeff_range(coeff_min, coeff_max);
        phaser.set_lfo_phase_offset(offset);

        prop_assert!((0.01..=10.0).contains(&phaser.rate()));
        prop_assert!((0.0..=1.0).contains(&phaser.depth()));
        prop_assert!((-0.99..=0.99).contains(&phaser.feedback()));
        prop_assert!((0.0..=1.0).contains(&phaser.mix()));
        prop_assert!((1..=MAX_STAGES).contains(&phaser.stages()));
        prop_assert!((0.0..=0.99).contains(&phaser.coeff_min()));
        prop_assert!(phaser.coeff_max() - phaser.coeff_min() >= 0.01 - 1e-6);
        prop_assert!(phaser.coeff_max() <= 1.0);
        prop_assert!((0.0..=1.0).contains(&phaser.lfo_phase_offset()));
    }

    #[test]
    fn zero_mix_is_identity(
        s in settings(),
        left in prop::collection::vec(any::<i16>(), BLOCK * 4),
        right in prop::collection::vec(any::<i16>(), BLOCK * 4),
    ) {
        let mut phaser = StereoPhaser::new(44100.0);
        configure(&mut phaser, &s);
        phaser.set_mix(0.0);

        let (out_l, out_r) = run(&mut phaser, &left, &right);
        prop_assert_eq!(out_l, left);
        prop_assert_eq!(out_r, right);
    }

    #[test]
    fn output_finite_under_extreme_settings(
        s in settings(),
        feedback in prop_oneof![Just(0.99f32), Just(-0.99f32)],
        input in prop::collection::vec(-1.0f32..=1.0, 1..2048),
    ) {
        let mut phaser = StereoPhaser::new(44100.0);
        configure(&mut phaser, &s);
        phaser.set_feedback(feedback);
        phaser.set_mix(1.0);

        for &x in &input {
            let (l, r) = phaser.process_stereo(x, -x);
            prop_assert!(l.is_finite() && r.is_finite());
        }
    }

    #[test]
    fn reset_reproduces_fresh_instance(
        s in settings(),
        warmup in prop::collection::vec(any::<i16>(), BLOCK * 2),
        input in prop::collection::vec(any::<i16>(), BLOCK * 2),
    ) {
        let mut used = StereoPhaser::new(44100.0);
        configure(&mut used, &s);
        run(&mut used, &warmup, &warmup);
        used.reset();
        configure(&mut used, &s);

        let mut fresh = StereoPhaser::new(44100.0);
        configure(&mut fresh, &s);

        prop_assert_eq!(run(&mut used, &input, &input), run(&mut fresh, &input, &input));
    }
}
