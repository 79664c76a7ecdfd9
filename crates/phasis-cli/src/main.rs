//! Phasis CLI - run WAV files through the stereo phaser.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phasis")]
#[command(author, version, about = "Phasis stereo phaser CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the phaser
    Process(commands::process::ProcessArgs),

    /// List phaser parameters with their ranges and defaults
    Params(commands::params::ParamsArgs),

    /// Print the default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
