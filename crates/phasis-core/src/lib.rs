//! Phasis Core - DSP primitives for the stereo phaser
//!
//! This crate provides the building blocks the phaser is assembled from,
//! designed for real-time audio processing with zero allocation in the
//! per-sample path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for stereo audio effects
//! - [`ParameterInfo`] - Index-based parameter introspection
//!
//! ## Modulation
//!
//! - [`QuadratureLfo`] - Rotation-based sine/cosine oscillator
//! - [`PhaseRotation`] - Fixed angular offset applied to an LFO phase vector
//!
//! ## Filters
//!
//! - [`AllpassCascade`] - Fixed-capacity chain of first-order allpass sections
//! - [`CoefficientRange`] - Maps a unipolar modulation value to an allpass coefficient
//!
//! ## Blocks
//!
//! - [`AudioBlock`] - Fixed-length 16-bit PCM block exchanged with the host
//! - [`BlockAllocator`] / [`BlockPool`] - Where blocks come from and go back to
//! - [`process_stereo_blocks`] - Per-block entry point with mono fallback
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! phasis-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Clamp, never fail**: Parameter writes are silently limited to their range

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod block;
pub mod coeff;
pub mod effect;
pub mod lfo;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use allpass::{AllpassCascade, MAX_STAGES, allpass_section};
pub use block::{
    AudioBlock, BlockAllocator, BlockPool, DEFAULT_BLOCK_SAMPLES, process_stereo_blocks,
};
pub use coeff::CoefficientRange;
pub use effect::{DEFAULT_SAMPLE_RATE, Effect};
pub use lfo::{PhaseRotation, QuadratureLfo};
pub use math::{clamp_or_min, f32_to_pcm16, hard_clip, pcm16_to_f32, wet_dry_mix};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};
