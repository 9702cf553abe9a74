//! Processing context shared by every stage.

use crate::error::ConfigError;

/// Format of the audio stream a stage is prepared for.
///
/// Handed to [`Processor::prepare`](crate::Processor::prepare) before audio
/// starts and again whenever the host renegotiates the format. It does not
/// change for the duration of a processing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest number of samples per channel a single block may carry.
    pub max_block_size: usize,
    /// Number of channels the stages generate into.
    pub num_channels: usize,
}

impl ProcessSpec {
    /// Create a new process spec.
    pub const fn new(sample_rate: f64, max_block_size: usize, num_channels: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            num_channels,
        }
    }

    /// Check that the spec describes a stream the chain can run on.
    ///
    /// Stages assume a validated spec; the host layer calls this before
    /// preparing them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if self.num_channels == 0 {
            return Err(ConfigError::NoChannels);
        }
        if self.max_block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}
