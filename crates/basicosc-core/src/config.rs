//! Construction-time configuration for the signal chain.
//!
//! The plugin ships with two fixed tones and a fixed output level. They are
//! plain data here so tests and tools can build chains with other values.
//!
//! # TOML Format (with the `serde` feature)
//!
//! ```toml
//! composition = "additive"
//!
//! [osc_a]
//! frequency_hz = 155.563
//! waveform = "sine"
//!
//! [osc_b]
//! frequency_hz = 233.082
//!
//! [gain]
//! linear = 0.1
//! ```
//!
//! Missing sections fall back to [`ChainConfig::default`].

use crate::error::ConfigError;
use crate::oscillator::{Composition, Waveform};

/// Frequency of oscillator A in Hz (D#3).
pub const OSC_A_FREQUENCY_HZ: f64 = 155.563;

/// Frequency of oscillator B in Hz (A#3).
pub const OSC_B_FREQUENCY_HZ: f64 = 233.082;

/// Linear output gain applied after both oscillators.
pub const OUTPUT_GAIN_LINEAR: f64 = 0.1;

/// Settings for one oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct OscillatorConfig {
    /// Frequency in Hz.
    pub frequency_hz: f64,
    /// Waveform shape.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waveform: Waveform,
}

impl OscillatorConfig {
    /// A sine oscillator at `frequency_hz`.
    pub const fn sine(frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            waveform: Waveform::Sine,
        }
    }

    /// Reject negative or non-finite frequencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frequency_hz.is_finite() && self.frequency_hz >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidFrequency(self.frequency_hz))
        }
    }
}

/// Settings for the gain stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct GainConfig {
    /// Linear gain factor. Narrowed to `f32` by the gain stage.
    pub linear: f64,
}

impl GainConfig {
    /// Gain from a linear factor.
    pub const fn linear(linear: f64) -> Self {
        Self { linear }
    }

    /// Reject non-finite gains. Negative gains (polarity flip) are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.linear.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidGain(self.linear))
        }
    }
}

impl Default for GainConfig {
    fn default() -> Self {
        Self::linear(OUTPUT_GAIN_LINEAR)
    }
}

/// Full configuration of a [`SignalChain`](crate::SignalChain).
///
/// # Example
///
/// ```rust
/// use basicosc_core::{ChainConfig, Composition, OscillatorConfig};
///
/// let config = ChainConfig::default()
///     .with_osc_a(OscillatorConfig::sine(440.0))
///     .with_composition(Composition::Replace);
/// assert_eq!(config.osc_b.frequency_hz, 233.082);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ChainConfig {
    /// How each oscillator combines with the block content.
    pub composition: Composition,
    /// First oscillator.
    pub osc_a: OscillatorConfig,
    /// Second oscillator.
    pub osc_b: OscillatorConfig,
    /// Output gain.
    pub gain: GainConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            composition: Composition::default(),
            osc_a: OscillatorConfig::sine(OSC_A_FREQUENCY_HZ),
            osc_b: OscillatorConfig::sine(OSC_B_FREQUENCY_HZ),
            gain: GainConfig::default(),
        }
    }
}

impl ChainConfig {
    /// Replace oscillator A.
    pub fn with_osc_a(mut self, osc: OscillatorConfig) -> Self {
        self.osc_a = osc;
        self
    }

    /// Replace oscillator B.
    pub fn with_osc_b(mut self, osc: OscillatorConfig) -> Self {
        self.osc_b = osc;
        self
    }

    /// Replace the gain.
    pub fn with_gain(mut self, gain: GainConfig) -> Self {
        self.gain = gain;
        self
    }

    /// Replace the composition policy.
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Validate every stage, reporting the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.osc_a.validate()?;
        self.osc_b.validate()?;
        self.gain.validate()
    }
}
