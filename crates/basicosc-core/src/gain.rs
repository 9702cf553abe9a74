//! Fixed linear gain stage.
//!
//! One multiply per sample, no smoothing and no clipping: the output is
//! exactly `input * linear` for every representable input.

use crate::block::AudioBlock;
use crate::math::linear_to_db;
use crate::process_spec::ProcessSpec;
use crate::processor::Processor;

/// Scales every sample of a block by a constant factor.
///
/// # Example
///
/// ```rust
/// use basicosc_core::Gain;
///
/// let gain = Gain::new(0.1);
/// assert_eq!(gain.linear(), 0.1);
/// assert!((gain.db() - (-20.0)).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    linear: f32,
}

impl Gain {
    /// Gain from a linear factor.
    pub const fn new(linear: f32) -> Self {
        Self { linear }
    }

    /// Linear factor.
    #[inline]
    pub fn linear(&self) -> f32 {
        self.linear
    }

    /// Magnitude of the factor in decibels. Polarity is ignored.
    pub fn db(&self) -> f32 {
        linear_to_db(self.linear.abs())
    }
}

impl Processor for Gain {
    fn prepare(&mut self, _spec: &ProcessSpec) {
        // Gain has no sample-rate dependent state
    }

    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        let linear = self.linear;
        for channel in block.channels_mut() {
            for sample in channel.iter_mut() {
                *sample *= linear;
            }
        }
    }

    fn reset(&mut self) {}
}
