//! Fixed-length PCM blocks and the per-block processing entry point.
//!
//! The host delivers audio as [`AudioBlock`]s of `N` signed 16-bit samples,
//! one per channel per tick, at a fixed sample rate. Blocks come from and go
//! back to a [`BlockAllocator`]; how that allocator manages its memory is the
//! host's business. [`BlockPool`] is a bounded free list good enough for the
//! offline host and for tests.
//!
//! [`process_stereo_blocks`] runs an [`Effect`] over one tick's worth of
//! blocks, synthesizing a missing channel from the present one.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::effect::Effect;
use crate::math::{f32_to_pcm16, pcm16_to_f32};

/// Default number of samples per block.
pub const DEFAULT_BLOCK_SAMPLES: usize = 128;

/// A fixed-length block of 16-bit PCM samples for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBlock<const N: usize = DEFAULT_BLOCK_SAMPLES> {
    data: [i16; N],
}

impl<const N: usize> AudioBlock<N> {
    /// Number of samples in every block of this type.
    pub const LEN: usize = N;

    /// A block of silence.
    pub const fn silent() -> Self {
        Self { data: [0; N] }
    }

    /// Wrap an existing sample array.
    pub const fn from_array(data: [i16; N]) -> Self {
        Self { data }
    }

    /// Samples as a slice.
    #[inline]
    pub fn samples(&self) -> &[i16; N] {
        &self.data
    }

    /// Samples as a mutable slice.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [i16; N] {
        &mut self.data
    }

    /// Overwrite this block with another block's samples.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) {
        self.data = other.data;
    }

    /// Fill the block with zeros.
    pub fn clear(&mut self) {
        self.data = [0; N];
    }
}

impl<const N: usize> Default for AudioBlock<N> {
    fn default() -> Self {
        Self::silent()
    }
}

/// Source and sink of audio blocks.
///
/// `allocate` returns `None` when no block is available; callers must treat
/// that as a normal condition, not a fault.
pub trait BlockAllocator<const N: usize = DEFAULT_BLOCK_SAMPLES> {
    /// Take a block. Its contents are unspecified.
    fn allocate(&mut self) -> Option<AudioBlock<N>>;

    /// Give a block back.
    fn release(&mut self, block: AudioBlock<N>);
}

/// Bounded pool of reusable blocks.
///
/// All blocks are allocated up front; `allocate` and `release` only move
/// them in and out of a free list, so neither allocates once the pool
/// exists. Releasing into a full pool drops the extra block.
///
/// # Example
///
/// ```rust
/// use phasis_core::{AudioBlock, BlockAllocator, BlockPool};
///
/// let mut pool: BlockPool<64> = BlockPool::new(1);
/// let block = pool.allocate().unwrap();
/// assert!(pool.allocate().is_none());
/// pool.release(block);
/// assert_eq!(pool.available(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BlockPool<const N: usize = DEFAULT_BLOCK_SAMPLES> {
    free: Vec<AudioBlock<N>>,
    capacity: usize,
}

impl<const N: usize> BlockPool<N> {
    /// Create a pool holding `capacity` silent blocks.
    pub fn new(capacity: usize) -> Self {
        let mut free = Vec::with_capacity(capacity);
        free.resize_with(capacity, AudioBlock::silent);
        Self { free, capacity }
    }

    /// Total number of blocks the pool manages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of blocks currently free.
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

impl<const N: usize> BlockAllocator<N> for BlockPool<N> {
    fn allocate(&mut self) -> Option<AudioBlock<N>> {
        self.free.pop()
    }

    fn release(&mut self, block: AudioBlock<N>) {
        if self.free.len() < self.capacity {
            self.free.push(block);
        }
    }
}

/// Process one tick of stereo blocks through `effect`.
///
/// - Both channels absent: nothing is produced.
/// - One channel absent: a block is taken from `allocator` and filled with a
///   copy of the present channel. If the allocator is exhausted, the
///   present block is released and nothing is produced; a block is never
///   processed with a missing or partial partner.
/// - Otherwise every frame is converted to float, run through
///   [`Effect::process_stereo`] in order, saturated and written back in place.
///
/// On success the returned `(left, right)` blocks are owned by the caller,
/// which hands them on and eventually releases them to the allocator.
pub fn process_stereo_blocks<E, A, const N: usize>(
    effect: &mut E,
    left: Option<AudioBlock<N>>,
    right: Option<AudioBlock<N>>,
    allocator: &mut A,
) -> Option<(AudioBlock<N>, AudioBlock<N>)>
where
    E: Effect + ?Sized,
    A: BlockAllocator<N> + ?Sized,
{
    let (mut left, mut right) = match (left, right) {
        (None, None) => return None,
        (Some(left), Some(right)) => (left, right),
        (Some(left), None) => with_duplicate(left, allocator)?,
        (None, Some(right)) => {
            let (right, left) = with_duplicate(right, allocator)?;
            (left, right)
        }
    };

    for (l, r) in left
        .samples_mut()
        .iter_mut()
        .zip(right.samples_mut().iter_mut())
    {
        let (out_l, out_r) = effect.process_stereo(pcm16_to_f32(*l), pcm16_to_f32(*r));
        *l = f32_to_pcm16(out_l);
        *r = f32_to_pcm16(out_r);
    }

    Some((left, right))
}

/// Pair `present` with a fresh copy of itself, or release it and give up.
fn with_duplicate<A, const N: usize>(
    present: AudioBlock<N>,
    allocator: &mut A,
) -> Option<(AudioBlock<N>, AudioBlock<N>)>
where
    A: BlockAllocator<N> + ?Sized,
{
    let Some(mut copy) = allocator.allocate() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("block dropped: no block available to duplicate missing channel");
        allocator.release(present);
        return None;
    };
    copy.copy_from(&present);
    Some((present, copy))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Passes left through and negates right.
    struct Probe {
        frames: usize,
    }

    impl Effect for Probe {
        fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
            self.frames += 1;
            (left, -right)
        }
        fn set_sample_rate(&mut self, _: f32) {}
        fn reset(&mut self) {}
    }

    fn ramp<const N: usize>(start: i16) -> AudioBlock<N> {
        let mut block = AudioBlock::<N>::silent();
        for (i, s) in block.samples_mut().iter_mut().enumerate() {
            *s = start + i as i16;
        }
        block
    }

    #[test]
    fn test_both_absent_produces_nothing() {
        let mut probe = Probe { frames: 0 };
        let mut pool: BlockPool<8> = BlockPool::new(2);
        assert!(process_stereo_blocks(&mut probe, None, None, &mut pool).is_none());
        assert_eq!(probe.frames, 0);
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_stereo_processes_every_frame() {
        let mut probe = Probe { frames: 0 };
        let mut pool: BlockPool<8> = BlockPool::new(0);
        let (l, r) =
            process_stereo_blocks(&mut probe, Some(ramp(10)), Some(ramp(100)), &mut pool).unwrap();
        assert_eq!(probe.frames, 8);
        assert_eq!(l, ramp::<8>(10));
        for (i, s) in r.samples().iter().enumerate() {
            assert_eq!(*s, -(100 + i as i16));
        }
    }

    #[test]
    fn test_missing_right_duplicates_left() {
        let mut probe = Probe { frames: 0 };
        let mut pool: BlockPool<8> = BlockPool::new(1);
        let (l, r) = process_stereo_blocks(&mut probe, Some(ramp(5)), None, &mut pool).unwrap();
        assert_eq!(pool.available(), 0);
        assert_eq!(l, ramp::<8>(5));
        for (a, b) in l.samples().iter().zip(r.samples()) {
            assert_eq!(*b, -*a);
        }
    }

    #[test]
    fn test_missing_left_duplicates_right() {
        let mut probe = Probe { frames: 0 };
        let mut pool: BlockPool<8> = BlockPool::new(1);
        let (l, r) = process_stereo_blocks(&mut probe, None, Some(ramp(-20)), &mut pool).unwrap();
        assert_eq!(l, ramp::<8>(-20));
        for (a, b) in l.samples().iter().zip(r.samples()) {
            assert_eq!(*b, -*a);
        }
    }

    #[test]
    fn test_exhausted_pool_drops_block() {
        let mut probe = Probe { frames: 0 };
        let mut pool: BlockPool<8> = BlockPool::new(0);
        assert!(process_stereo_blocks(&mut probe, Some(ramp(1)), None, &mut pool).is_none());
        assert!(process_stereo_blocks(&mut probe, None, Some(ramp(1)), &mut pool).is_none());
        assert_eq!(probe.frames, 0, "no frame may be processed for a dropped block");
    }

    #[test]
    fn test_output_saturates() {
        struct Boost;
        impl Effect for Boost {
            fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
                (left * 10.0, right * 10.0)
            }
            fn set_sample_rate(&mut self, _: f32) {}
            fn reset(&mut self) {}
        }

        let mut pool: BlockPool<4> = BlockPool::new(0);
        let l = AudioBlock::from_array([20000, -20000, 0, 1000]);
        let r = AudioBlock::from_array([i16::MAX, i16::MIN, 1, -1]);
        let (l, r) = process_stereo_blocks(&mut Boost, Some(l), Some(r), &mut pool).unwrap();
        assert_eq!(l.samples(), &[i16::MAX, i16::MIN, 0, 10000]);
        assert_eq!(r.samples(), &[i16::MAX, i16::MIN, 10, -10]);
    }

    #[test]
    fn test_pool_release_bounded() {
        let mut pool: BlockPool<4> = BlockPool::new(1);
        pool.release(AudioBlock::silent());
        assert_eq!(pool.available(), 1);
        let a = pool.allocate().unwrap();
        assert!(pool.allocate().is_none());
        pool.release(a);
        assert_eq!(pool.available(), 1);
        assert_eq!(pool.capacity(), 1);
    }
}
