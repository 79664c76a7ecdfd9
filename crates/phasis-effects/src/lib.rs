//! Phasis Effects - the stereo phaser
//!
//! This crate assembles the primitives in phasis-core into a complete
//! effect:
//!
//! - [`StereoPhaser`] - LFO-swept allpass cascade per channel with feedback
//!   and a configurable stereo phase offset between the two sweeps
//!
//! ## Example
//!
//! ```rust
//! use phasis_core::{AudioBlock, BlockPool};
//! use phasis_effects::StereoPhaser;
//!
//! let mut phaser = StereoPhaser::new(44100.0);
//! phaser.set_stages(8);
//! phaser.set_negative_resonance(true);
//!
//! let mut pool: BlockPool = BlockPool::new(2);
//! let left = AudioBlock::from_array([1000; 128]);
//! let (left, right) = phaser.update(Some(left), None, &mut pool).unwrap();
//! assert_eq!(left.samples().len(), right.samples().len());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod phaser;

// Re-export main types at crate root
pub use phaser::StereoPhaser;
