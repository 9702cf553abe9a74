//! Errors surfaced to the host.

use crate::layout::BusesLayout;
use basicosc_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while the host configures the processor.
///
/// Nothing on the audio thread returns an error; contract violations there
/// produce silence instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// The host asked for a bus layout the processor cannot run.
    #[error("unsupported bus layout: {0}")]
    UnsupportedLayout(BusesLayout),

    /// Sample rate, block size or channel count cannot be processed.
    #[error("invalid process spec")]
    InvalidSpec(#[source] ConfigError),

    /// The chain configuration holds an unusable value.
    #[error("invalid chain configuration")]
    InvalidConfig(#[source] ConfigError),
}
