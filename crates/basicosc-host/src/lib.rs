//! Host lifecycle adapter for the BasicOsc signal chain.
//!
//! A plugin host drives audio code through a fixed contract: it negotiates a
//! bus layout, prepares the processor for a sample rate and block size, then
//! calls it once per block on the real-time thread. This crate implements
//! that contract around [`basicosc_core::SignalChain`] without tying it to
//! any particular plugin format.
//!
//! # Architecture
//!
//! | Host call | Adapter |
//! |-----------|---------|
//! | bus layout query | [`BasicOscProcessor::is_buses_layout_supported`] |
//! | stream start / format change | [`BasicOscProcessor::prepare_to_play`] |
//! | stream stop | [`BasicOscProcessor::release_resources`] |
//! | audio callback | [`BasicOscProcessor::process_block`] |
//! | program list | [`BasicOscProcessor::num_programs`] and friends |
//!
//! # Example
//!
//! ```rust
//! use basicosc_host::BasicOscProcessor;
//!
//! let mut processor = BasicOscProcessor::new();
//! processor.prepare_to_play(48000.0, 256)?;
//!
//! let mut left = vec![0.0_f32; 256];
//! let mut right = vec![0.0_f32; 256];
//! let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
//! processor.process_block(&mut channels);
//! # Ok::<(), basicosc_host::HostError>(())
//! ```

pub mod error;
pub mod layout;
pub mod processor;

pub use error::HostError;
pub use layout::{BusesLayout, ChannelSet};
pub use processor::{BasicOscProcessor, PLUGIN_NAME, ProcessorKind};
