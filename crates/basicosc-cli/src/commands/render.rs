//! Offline rendering of the signal chain to a WAV file.

use anyhow::{Context, bail};
use basicosc_host::{BasicOscProcessor, BusesLayout, ChannelSet, ProcessorKind};
use clap::Args;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::PathBuf;

/// Render the chain to a WAV file.
#[derive(Args)]
pub struct RenderArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Duration in seconds
    #[arg(long, default_value = "2.0")]
    duration: f64,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Samples per processing block
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output channels (1 or 2)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..=2))]
    channels: u16,

    /// Chain configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Run the render command.
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    if !(args.duration.is_finite() && args.duration >= 0.0) {
        bail!("duration must be a non-negative number of seconds");
    }

    let config = crate::config::load_or_default(args.config.as_deref())?;
    let mut processor =
        BasicOscProcessor::with_config(config)?.with_kind(ProcessorKind::Instrument);

    let num_channels = usize::from(args.channels);
    let layout = BusesLayout::new(ChannelSet::Disabled, ChannelSet::from_count(num_channels));
    processor.set_buses_layout(layout)?;
    processor.prepare_to_play(f64::from(args.sample_rate), args.block_size)?;

    let total_frames = (args.duration * f64::from(args.sample_rate)).round() as usize;
    let spec = WavSpec {
        channels: args.channels,
        sample_rate: args.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&args.output, spec)
        .with_context(|| format!("failed to create '{}'", args.output.display()))?;

    tracing::info!(
        output = %args.output.display(),
        frames = total_frames,
        channels = num_channels,
        block_size = args.block_size,
        "rendering"
    );

    let mut buffers = vec![vec![0.0_f32; args.block_size]; num_channels];
    let mut remaining = total_frames;
    while remaining > 0 {
        let frames = remaining.min(args.block_size);
        {
            let mut channels: Vec<&mut [f32]> =
                buffers.iter_mut().map(|buf| &mut buf[..frames]).collect();
            processor.process_block(&mut channels);
        }
        for i in 0..frames {
            for buf in &buffers {
                writer.write_sample(buf[i])?;
            }
        }
        remaining -= frames;
    }

    writer.finalize()?;
    processor.release_resources();

    println!(
        "Rendered {:.3}s ({} frames, {} ch @ {} Hz) to {}",
        args.duration,
        total_frames,
        num_channels,
        args.sample_rate,
        args.output.display()
    );

    Ok(())
}
