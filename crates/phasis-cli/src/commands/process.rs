//! File-based phaser processing command.

use anyhow::Context;
use clap::Args;
use phasis_config::{PhaserConfig, parse_param_value};
use phasis_core::ParameterInfo;
use phasis_effects::StereoPhaser;
use phasis_io::{BlockHost, HostConfig, PcmAudio, read_wav_pcm16, write_wav_pcm16};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always 16-bit stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Phaser configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Parameter override in display units (e.g., "stages=10", "mix=50%")
    #[arg(long = "set", value_parser = parse_key_val, number_of_values = 1)]
    set: Vec<(String, String)>,

    /// Spare blocks available for mono-to-stereo duplication
    #[arg(long, default_value = "4")]
    pool_blocks: usize,

    /// Write the effective configuration to this file after processing
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid parameter format: '{}' (expected key=value)", s));
    }
    Ok((parts[0].trim().to_string(), parts[1].to_string()))
}

/// Apply one `name=value` override through the parameter interface.
fn apply_override(phaser: &mut StereoPhaser, name: &str, value: &str) -> anyhow::Result<()> {
    let index = phaser
        .find_param_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {}", name))?;
    let parsed = parse_param_value(value)
        .ok_or_else(|| anyhow::anyhow!("Invalid value for {}: '{}'", name, value))?;

    if let Some(desc) = phaser.param_info(index).filter(|d| !d.contains(parsed)) {
        tracing::warn!(
            param = desc.name,
            value = parsed,
            min = desc.min,
            max = desc.max,
            "value out of range, clamping"
        );
    }

    phaser.set_param(index, parsed);
    Ok(())
}

fn peak(samples: &[i16]) -> f32 {
    samples
        .iter()
        .map(|&s| (f32::from(s) / 32768.0).abs())
        .fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    20.0 * linear.max(1e-10).log10()
}

fn audio_peak(audio: &PcmAudio) -> f32 {
    let left = peak(&audio.left);
    audio.right.as_deref().map_or(left, |r| left.max(peak(r)))
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (input, spec) = read_wav_pcm16(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        input.frames(),
        spec.channels,
        spec.sample_rate,
        input.frames() as f32 / sample_rate
    );

    let mut phaser = StereoPhaser::new(sample_rate);

    if let Some(config_path) = &args.config {
        let config = PhaserConfig::load(config_path)?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", config_path.display()))?;
        println!("Loaded configuration: {}", config_path.display());
        config.apply(&mut phaser);
    }

    for (name, value) in &args.set {
        apply_override(&mut phaser, name, value)?;
    }

    tracing::info!(
        rate = phaser.rate(),
        depth = phaser.depth(),
        feedback = phaser.feedback(),
        mix = phaser.mix(),
        stages = phaser.stages(),
        "phaser configured"
    );

    let mut host: BlockHost = BlockHost::new(HostConfig {
        sample_rate,
        pool_blocks: args.pool_blocks,
    });

    println!("Processing in blocks of {}...", host.block_size());
    let output = host.run(&mut phaser, &input);
    let stats = host.stats();

    write_wav_pcm16(&args.output, &output, spec.sample_rate)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if let Some(path) = &args.save_config {
        PhaserConfig::from_phaser(&phaser).save(path)?;
        println!("Saved configuration: {}", path.display());
    }

    println!("\nStats:");
    println!(
        "  Blocks: {} processed, {} dropped",
        stats.blocks_processed, stats.blocks_dropped
    );
    println!("  Input peak:  {:.1} dB", linear_to_db(audio_peak(&input)));
    println!("  Output peak: {:.1} dB", linear_to_db(audio_peak(&output)));
    println!("\nWrote {}", args.output.display());

    Ok(())
}
