//! Default configuration command.

use clap::Args;
use phasis_config::PhaserConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write to this file instead of printing
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config = PhaserConfig::default();

    match &args.output {
        Some(path) => {
            config.save(path)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", config.to_toml_string()?),
    }

    Ok(())
}
