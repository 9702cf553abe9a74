//! BasicOsc CLI - offline rendering and configuration tools.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basicosc")]
#[command(author, version, about = "BasicOsc signal chain CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the signal chain to a WAV file
    Render(commands::render::RenderArgs),

    /// Show processor metadata and the effective configuration
    Info(commands::info::InfoArgs),

    /// Print or write the default configuration as TOML
    Config(commands::config::ConfigArgs),

    /// Validate a configuration file
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for TOML output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Check(args) => commands::check::run(args),
    }
}
