//! Phase-accumulating sine oscillator.
//!
//! Phase is tracked in radians as `f64` and wrapped into `[0, 2π)` every
//! sample, so long runs neither lose precision nor drift in frequency.

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::block::AudioBlock;
use crate::config::OscillatorConfig;
use crate::process_spec::ProcessSpec;
use crate::processor::Processor;

/// Oscillator waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Waveform {
    /// Pure sine, `sin(phase)`.
    #[default]
    Sine,
}

impl Waveform {
    /// Evaluate the waveform at `phase` radians.
    #[inline]
    pub fn evaluate(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => libm::sin(phase),
        }
    }
}

/// How an oscillator combines its output with what is already in the block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Composition {
    /// Add the oscillator to the existing content. Two oscillators in
    /// sequence therefore mix.
    #[default]
    Additive,
    /// Overwrite the existing content. Two oscillators in sequence leave only
    /// the second one audible.
    Replace,
}

/// Wrap a phase into `[0, 2π)`.
#[inline]
fn wrap_phase(phase: f64) -> f64 {
    if (0.0..TAU).contains(&phase) {
        phase
    } else if (TAU..2.0 * TAU).contains(&phase) {
        phase - TAU
    } else {
        // Negative frequencies, or frequencies above the sample rate
        let wrapped = phase - TAU * libm::floor(phase / TAU);
        // floor can leave a tiny negative phase rounding up to exactly 2π
        if wrapped < TAU { wrapped } else { 0.0 }
    }
}

/// Fixed-frequency oscillator with one phase accumulator per channel.
///
/// All accumulators start at zero, so every channel carries the same signal.
/// They persist across blocks and are re-seeded only by
/// [`prepare`](Processor::prepare) or [`reset`](Processor::reset).
///
/// # Example
///
/// ```rust
/// use basicosc_core::{Oscillator, OscillatorConfig, ProcessSpec, Processor};
///
/// let mut osc = Oscillator::new(OscillatorConfig::sine(12000.0));
/// osc.prepare(&ProcessSpec::new(48000.0, 64, 1));
///
/// // Quarter-cycle steps: 0, 1, 0, -1
/// let samples: Vec<f32> = (0..4).map(|_| osc.advance_channel(0)).collect();
/// assert!((samples[1] - 1.0).abs() < 1e-6);
/// assert!((samples[3] + 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator {
    config: OscillatorConfig,
    composition: Composition,
    /// Current phase per prepared channel, radians in [0, 2π)
    phases: Vec<f64>,
    /// Phase increment per sample, radians
    phase_inc: f64,
}

impl Oscillator {
    /// Create an unprepared oscillator. It renders nothing until prepared.
    pub fn new(config: OscillatorConfig) -> Self {
        Self {
            config,
            composition: Composition::default(),
            phases: Vec::new(),
            phase_inc: 0.0,
        }
    }

    /// Set the composition policy.
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Configured frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.config.frequency_hz
    }

    /// Configured waveform.
    pub fn waveform(&self) -> Waveform {
        self.config.waveform
    }

    /// Phase increment per sample in radians (`2π·f/sample_rate`).
    pub fn phase_increment(&self) -> f64 {
        self.phase_inc
    }

    /// Number of channels with a phase accumulator.
    pub fn num_channels(&self) -> usize {
        self.phases.len()
    }

    /// Current phase of `channel` in radians, if that channel is prepared.
    pub fn phase(&self, channel: usize) -> Option<f64> {
        self.phases.get(channel).copied()
    }

    /// Generate the next sample for one channel and advance its phase.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    #[inline]
    pub fn advance_channel(&mut self, channel: usize) -> f32 {
        let phase = &mut self.phases[channel];
        let output = self.config.waveform.evaluate(*phase);
        *phase = wrap_phase(*phase + self.phase_inc);
        output as f32
    }
}

impl Processor for Oscillator {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.phase_inc = TAU * self.config.frequency_hz / spec.sample_rate;
        self.phases.clear();
        self.phases.resize(spec.num_channels, 0.0);
    }

    /// Render into the first `num_channels()` channels of the block.
    ///
    /// Channels beyond the prepared count are left untouched.
    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        let waveform = self.config.waveform;
        let inc = self.phase_inc;
        let channels = block.num_channels().min(self.phases.len());

        for ch in 0..channels {
            let mut phase = self.phases[ch];
            let samples = block.channel_mut(ch);
            match self.composition {
                Composition::Additive => {
                    for sample in samples.iter_mut() {
                        *sample += waveform.evaluate(phase) as f32;
                        phase = wrap_phase(phase + inc);
                    }
                }
                Composition::Replace => {
                    for sample in samples.iter_mut() {
                        *sample = waveform.evaluate(phase) as f32;
                        phase = wrap_phase(phase + inc);
                    }
                }
            }
            self.phases[ch] = phase;
        }
    }

    fn reset(&mut self) {
        self.phases.fill(0.0);
    }
}
