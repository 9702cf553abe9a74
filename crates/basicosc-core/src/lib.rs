//! BasicOsc Core - the signal path of the BasicOsc plugin
//!
//! Two sine oscillators and a linear gain stage, applied in place to every
//! audio block the host delivers. Everything here is real-time safe: once a
//! stage has been prepared, processing performs no allocation, locking or I/O.
//!
//! # Core Abstractions
//!
//! - [`ProcessSpec`] - Sample rate, maximum block size and channel count
//! - [`AudioBlock`] - Borrowed, host-owned view over N channels of samples
//! - [`Processor`] - Object-safe prepare/process/reset trait for every stage
//! - [`Chain`] - Zero-cost serial combinator built with [`ProcessorExt::chain`]
//!
//! # Stages
//!
//! - [`Oscillator`] - Phase-accumulating sine generator (one accumulator per channel)
//! - [`Gain`] - Fixed linear gain
//! - [`SignalChain`] - Oscillator A, Oscillator B, Gain, in that order
//!
//! # Configuration
//!
//! [`ChainConfig`] carries the frequencies, gain and [`Composition`] policy.
//! Its default holds the shipped constants (155.563 Hz, 233.082 Hz, 0.1).
//! Enable the `serde` feature to (de)serialize it.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. `prepare` needs `alloc` to size the
//! per-channel phase accumulators:
//!
//! ```toml
//! [dependencies]
//! basicosc-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use basicosc_core::{AudioBlock, ProcessSpec, Processor, SignalChain};
//!
//! let mut chain = SignalChain::default();
//! chain.prepare(&ProcessSpec::new(48000.0, 256, 2));
//!
//! let mut left = [0.0_f32; 256];
//! let mut right = [0.0_f32; 256];
//! let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
//! chain.process(&mut AudioBlock::new(&mut channels));
//!
//! assert!(left.iter().all(|s| s.abs() <= 0.2));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod block;
pub mod chain;
pub mod config;
pub mod error;
pub mod gain;
pub mod math;
pub mod oscillator;
pub mod process_spec;
pub mod processor;

pub use block::AudioBlock;
pub use chain::SignalChain;
pub use config::{
    ChainConfig, GainConfig, OSC_A_FREQUENCY_HZ, OSC_B_FREQUENCY_HZ, OUTPUT_GAIN_LINEAR,
    OscillatorConfig,
};
pub use error::{ConfigError, ContractViolation};
pub use gain::Gain;
pub use math::linear_to_db;
pub use oscillator::{Composition, Oscillator, Waveform};
pub use process_spec::ProcessSpec;
pub use processor::{Chain, Processor, ProcessorExt};
