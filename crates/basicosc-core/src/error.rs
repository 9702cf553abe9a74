//! Error types for the signal path.
//!
//! Nothing in the audio path is fallible. [`ConfigError`] covers values that
//! are rejected before a chain is built or prepared, and [`ContractViolation`]
//! names the ways a caller can misuse a prepared chain.

use thiserror::Error;

/// A configuration or process spec value that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Oscillator frequency is negative, NaN or infinite.
    #[error("invalid frequency {0} Hz: must be finite and non-negative")]
    InvalidFrequency(f64),

    /// Gain is NaN or infinite.
    #[error("invalid gain {0}: must be finite")]
    InvalidGain(f64),

    /// Sample rate is zero, negative, NaN or infinite.
    #[error("invalid sample rate {0} Hz: must be finite and positive")]
    InvalidSampleRate(f64),

    /// Process spec declares zero channels.
    #[error("process spec must have at least one channel")]
    NoChannels,

    /// Process spec declares a zero maximum block size.
    #[error("process spec must have a non-zero maximum block size")]
    ZeroBlockSize,
}

/// Misuse of a [`SignalChain`](crate::SignalChain) by its caller.
///
/// These cannot happen under a correct host. They are programmer errors,
/// reported by [`SignalChain::check_block`](crate::SignalChain::check_block)
/// and asserted in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// `process` was reached before any `prepare`.
    #[error("process called before prepare")]
    NotPrepared,

    /// Block is longer than the prepared maximum block size.
    #[error("block of {len} samples exceeds the prepared maximum of {max}")]
    BlockTooLong {
        /// Samples per channel in the offending block.
        len: usize,
        /// Maximum block size from the last `prepare`.
        max: usize,
    },

    /// Channels in the block differ in length.
    #[error("channels in the block differ in length")]
    RaggedChannels,
}
