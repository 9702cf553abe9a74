//! Validate a configuration file.

use clap::Args;
use std::path::PathBuf;

/// Validate a configuration file.
#[derive(Args)]
pub struct CheckArgs {
    /// Configuration file to validate
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Run the check command. Fails with the parse or validation error.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = crate::config::load(&args.file)?;
    println!(
        "{}: ok ({:.3} Hz + {:.3} Hz, gain {})",
        args.file.display(),
        config.osc_a.frequency_hz,
        config.osc_b.frequency_hz,
        config.gain.linear
    );
    Ok(())
}
