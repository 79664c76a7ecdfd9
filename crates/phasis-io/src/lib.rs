//! Audio I/O layer for the phasis stereo phaser.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav_pcm16`] and [`write_wav_pcm16`] for 16-bit
//!   mono and stereo files
//! - **Offline block host**: [`BlockHost`] feeds a whole signal through an
//!   effect in fixed-size blocks, the way a real-time host would
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use phasis_io::{BlockHost, HostConfig, read_wav_pcm16, write_wav_pcm16};
//! use phasis_effects::StereoPhaser;
//!
//! let (audio, spec) = read_wav_pcm16("input.wav")?;
//!
//! let mut phaser = StereoPhaser::new(spec.sample_rate as f32);
//! let mut host: BlockHost = BlockHost::new(HostConfig::default());
//! let processed = host.run(&mut phaser, &audio);
//!
//! write_wav_pcm16("output.wav", &processed, spec.sample_rate)?;
//! ```

mod host;
mod wav;

pub use host::{BlockHost, HostConfig, HostStats};
pub use wav::{PcmAudio, WavSpec, read_wav_pcm16, write_wav_pcm16};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file has a channel count other than one or two.
    #[error("Unsupported channel count: {0} (expected 1 or 2)")]
    UnsupportedChannels(u16),

    /// The sample encoding cannot be converted to 16-bit PCM.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
