//! 16-bit WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use phasis_core::f32_to_pcm16;
use std::path::Path;

/// Format of a WAV file as read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth of the source file, before conversion to 16-bit.
    pub bits_per_sample: u16,
}

/// De-interleaved 16-bit audio, one or two channels.
///
/// A mono signal has `right == None`. Both channels of a stereo signal have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmAudio {
    /// Left (or only) channel.
    pub left: Vec<i16>,
    /// Right channel, absent for mono.
    pub right: Option<Vec<i16>>,
}

impl PcmAudio {
    /// Mono signal.
    pub fn mono(samples: Vec<i16>) -> Self {
        Self {
            left: samples,
            right: None,
        }
    }

    /// Stereo signal. The shorter channel is padded with silence.
    pub fn stereo(mut left: Vec<i16>, mut right: Vec<i16>) -> Self {
        let len = left.len().max(right.len());
        left.resize(len, 0);
        right.resize(len, 0);
        Self {
            left,
            right: Some(right),
        }
    }

    /// Number of channels (1 or 2).
    pub fn channels(&self) -> u16 {
        if self.right.is_some() { 2 } else { 1 }
    }

    /// Number of sample frames.
    pub fn frames(&self) -> usize {
        self.left.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Scale an integer sample of `bits` width to 16 bits.
fn to_pcm16(sample: i32, bits: u16) -> i16 {
    if bits <= 16 {
        (sample << (16 - bits)) as i16
    } else {
        (sample >> (bits - 16)) as i16
    }
}

/// Read a mono or stereo WAV file as 16-bit PCM.
///
/// 16-bit integer files are read as-is. Other integer depths (8, 24, 32 bit)
/// and 32-bit float files are converted to 16-bit; a warning is logged
/// because the conversion is lossy or changes the noise floor.
///
/// # Errors
///
/// [`Error::UnsupportedChannels`] for anything but one or two channels,
/// [`Error::UnsupportedFormat`] for float files that are not 32-bit, and
/// [`Error::Wav`] for unreadable files.
pub fn read_wav_pcm16<P: AsRef<Path>>(path: P) -> Result<(PcmAudio, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec {
        channels: hound_spec.channels,
        sample_rate: hound_spec.sample_rate,
        bits_per_sample: hound_spec.bits_per_sample,
    };

    if !(1..=2).contains(&spec.channels) {
        return Err(Error::UnsupportedChannels(spec.channels));
    }

    tracing::info!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "reading wav"
    );

    let interleaved: Vec<i16> = match (hound_spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        (SampleFormat::Int, bits) => {
            tracing::warn!(bits, "converting integer samples to 16-bit");
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| to_pcm16(v, bits)))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
        (SampleFormat::Float, 32) => {
            tracing::warn!("converting float samples to 16-bit");
            reader
                .into_samples::<f32>()
                .map(|s| s.map(f32_to_pcm16))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
        (SampleFormat::Float, bits) => {
            return Err(Error::UnsupportedFormat(format!("{bits}-bit float")));
        }
    };

    let audio = if spec.channels == 2 {
        let (left, right) = interleaved
            .chunks_exact(2)
            .map(|frame| (frame[0], frame[1]))
            .unzip();
        PcmAudio::stereo(left, right)
    } else {
        PcmAudio::mono(interleaved)
    };

    tracing::debug!(frames = audio.frames(), "wav loaded");
    Ok((audio, spec))
}

/// Write 16-bit PCM to a WAV file, mono or stereo depending on `audio`.
///
/// # Example
/// ```ignore
/// let audio = PcmAudio::mono(vec![0; 44100]); // 1 second of silence
/// write_wav_pcm16("output.wav", &audio, 44100)?;
/// ```
pub fn write_wav_pcm16<P: AsRef<Path>>(path: P, audio: &PcmAudio, sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let hound_spec = hound::WavSpec {
        channels: audio.channels(),
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, hound_spec)?;

    match &audio.right {
        Some(right) => {
            if right.len() != audio.left.len() {
                return Err(Error::UnsupportedFormat(format!(
                    "channel lengths differ ({} vs {})",
                    audio.left.len(),
                    right.len()
                )));
            }
            for (&l, &r) in audio.left.iter().zip(right) {
                writer.write_sample(l)?;
                writer.write_sample(r)?;
            }
        }
        None => {
            for &s in &audio.left {
                writer.write_sample(s)?;
            }
        }
    }

    writer.finalize()?;
    tracing::info!(
        path = %path.display(),
        frames = audio.frames(),
        channels = audio.channels(),
        sample_rate,
        "wrote wav"
    );
    Ok(())
}
