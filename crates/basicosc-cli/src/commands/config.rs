//! Print or write the default configuration.

use basicosc_core::ChainConfig;
use clap::Args;
use std::path::PathBuf;

/// Dump the default configuration.
#[derive(Args)]
pub struct ConfigArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Run the config command.
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config = ChainConfig::default();
    match args.output {
        Some(path) => {
            crate::config::save(&path, &config)?;
            println!("Wrote default configuration to {}", path.display());
        }
        None => print!("{}", crate::config::to_toml_string(&config)?),
    }
    Ok(())
}
