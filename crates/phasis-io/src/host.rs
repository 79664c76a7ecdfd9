//! Offline block host.
//!
//! Drives an effect over a whole signal the way a real-time audio graph
//! would: one tick per block, a fixed block length, and a bounded pool of
//! spare blocks for the effect to draw from. Running a file through it
//! exercises exactly the block path a live host would take, including the
//! mono-to-stereo fallback and the drop-on-exhaustion rule.

use phasis_core::{
    AudioBlock, BlockAllocator, BlockPool, DEFAULT_BLOCK_SAMPLES, DEFAULT_SAMPLE_RATE, Effect,
    process_stereo_blocks,
};

use crate::wav::PcmAudio;

/// Host-level settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostConfig {
    /// Sample rate the effect is run at (Hz).
    pub sample_rate: f32,
    /// Number of spare blocks in the pool.
    ///
    /// Mono input needs one spare block per tick to synthesize the right
    /// channel; with zero spares every mono block is dropped.
    pub pool_blocks: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            pool_blocks: 4,
        }
    }
}

/// Counters for a host run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    /// Ticks that produced output.
    pub blocks_processed: u64,
    /// Ticks dropped because no spare block was available.
    pub blocks_dropped: u64,
}

/// Feeds a signal through an [`Effect`] in blocks of `N` samples.
///
/// The final partial block is padded with silence; the padding is trimmed
/// from the output again. Dropped ticks come out as silence, so the output
/// always has exactly as many frames as the input.
///
/// # Example
///
/// ```rust
/// use phasis_effects::StereoPhaser;
/// use phasis_io::{BlockHost, HostConfig, PcmAudio};
///
/// let mut phaser = StereoPhaser::new(44100.0);
/// let mut host: BlockHost = BlockHost::new(HostConfig::default());
///
/// let out = host.run(&mut phaser, &PcmAudio::mono(vec![1000; 300]));
/// assert_eq!(out.frames(), 300);
/// assert_eq!(out.channels(), 2);
/// assert_eq!(host.stats().blocks_processed, 3);
/// ```
#[derive(Debug)]
pub struct BlockHost<const N: usize = DEFAULT_BLOCK_SAMPLES> {
    config: HostConfig,
    pool: BlockPool<N>,
    stats: HostStats,
}

impl<const N: usize> BlockHost<N> {
    /// Create a host with a freshly filled pool.
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            pool: BlockPool::new(config.pool_blocks),
            stats: HostStats::default(),
        }
    }

    /// Host settings.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Counters accumulated since creation or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> HostStats {
        self.stats
    }

    /// Zero the counters.
    pub fn reset_stats(&mut self) {
        self.stats = HostStats::default();
    }

    /// Block length in samples.
    pub const fn block_size(&self) -> usize {
        N
    }

    /// Run `input` through `effect`, returning stereo output.
    ///
    /// The effect's sample rate is set from the host config first. Mono
    /// input is delivered on the left channel only.
    pub fn run<E: Effect + ?Sized>(&mut self, effect: &mut E, input: &PcmAudio) -> PcmAudio {
        effect.set_sample_rate(self.config.sample_rate);

        let frames = input.frames();
        let mut out_l = Vec::with_capacity(frames);
        let mut out_r = Vec::with_capacity(frames);
        let dropped_before = self.stats.blocks_dropped;

        for start in (0..frames).step_by(N) {
            let len = N.min(frames - start);
            let left = Some(load_block::<N>(&input.left[start..start + len]));
            let right = input
                .right
                .as_ref()
                .map(|r| load_block::<N>(&r[start..start + len]));

            match process_stereo_blocks(effect, left, right, &mut self.pool) {
                Some((l, r)) => {
                    out_l.extend_from_slice(&l.samples()[..len]);
                    out_r.extend_from_slice(&r.samples()[..len]);
                    self.pool.release(l);
                    self.pool.release(r);
                    self.stats.blocks_processed += 1;
                }
                None => {
                    out_l.resize(out_l.len() + len, 0);
                    out_r.resize(out_r.len() + len, 0);
                    self.stats.blocks_dropped += 1;
                }
            }
        }

        let dropped = self.stats.blocks_dropped - dropped_before;
        if dropped > 0 {
            tracing::debug!(dropped, "blocks dropped: no spare block for missing channel");
        }

        PcmAudio::stereo(out_l, out_r)
    }
}

/// Copy up to `N` samples into a block, zero-padding the rest.
fn load_block<const N: usize>(samples: &[i16]) -> AudioBlock<N> {
    let mut block = AudioBlock::<N>::silent();
    block.samples_mut()[..samples.len()].copy_from_slice(samples);
    block
}
