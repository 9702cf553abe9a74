//! Display processor metadata and the effective configuration.

use basicosc_core::{Composition, Oscillator};
use basicosc_host::{BasicOscProcessor, ProcessorKind};
use clap::Args;
use std::path::PathBuf;

/// Show processor metadata.
#[derive(Args)]
pub struct InfoArgs {
    /// Chain configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let config = crate::config::load_or_default(args.config.as_deref())?;
    let processor = BasicOscProcessor::with_config(config)?;
    let chain = processor.chain();

    let slot = match processor.kind() {
        ProcessorKind::Effect => "effect",
        ProcessorKind::Instrument => "instrument",
    };
    let composition = match chain.config().composition {
        Composition::Additive => "additive",
        Composition::Replace => "replace",
    };
    let midi = midi_description(processor.accepts_midi(), processor.produces_midi());

    println!("Name:        {}", processor.name());
    println!("Slot:        {slot}");
    println!("Layout:      {}", processor.buses_layout());
    println!("Latency:     {} samples", processor.latency_samples());
    println!("Tail:        {:.1}s", processor.tail_length_seconds());
    println!("MIDI:        {midi}");
    println!("Editor:      {}", if processor.has_editor() { "yes" } else { "no" });
    println!("Programs:    {}", processor.num_programs());
    println!();
    println!("Osc A:       {}", describe_oscillator(chain.oscillator_a()));
    println!("Osc B:       {}", describe_oscillator(chain.oscillator_b()));
    println!(
        "Gain:        {} ({:.1} dB)",
        chain.gain().linear(),
        chain.gain().db()
    );
    println!("Composition: {composition}");

    Ok(())
}

fn describe_oscillator(osc: &Oscillator) -> String {
    let waveform = format!("{:?}", osc.waveform()).to_lowercase();
    format!("{:.3} Hz {waveform}", osc.frequency_hz())
}

fn midi_description(accepts: bool, produces: bool) -> &'static str {
    match (accepts, produces) {
        (false, false) => "none",
        (true, false) => "in",
        (false, true) => "out",
        (true, true) => "in/out",
    }
}
