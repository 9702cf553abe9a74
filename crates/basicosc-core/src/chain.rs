//! The BasicOsc signal path: Oscillator A, Oscillator B, Gain.

use crate::block::AudioBlock;
use crate::config::ChainConfig;
use crate::error::ContractViolation;
use crate::gain::Gain;
use crate::oscillator::Oscillator;
use crate::process_spec::ProcessSpec;
use crate::processor::{Chain, Processor, ProcessorExt};

type Stages = Chain<Chain<Oscillator, Oscillator>, Gain>;

/// Two oscillators and a gain stage applied in fixed order to every block.
///
/// Frequencies, gain and composition come from the [`ChainConfig`] given at
/// construction and never change afterwards. Phase accumulators belong to
/// the oscillators and are re-seeded only by [`prepare`](Processor::prepare)
/// or [`reset`](Processor::reset).
///
/// Channels of a block beyond the prepared channel count are cleared to
/// exactly zero instead of being left with stale data.
///
/// # Example
///
/// ```rust
/// use basicosc_core::{AudioBlock, ChainConfig, ProcessSpec, Processor, SignalChain};
///
/// let mut chain = SignalChain::new(ChainConfig::default());
/// chain.prepare(&ProcessSpec::new(44100.0, 64, 1));
///
/// let mut mono = [0.0_f32; 64];
/// let mut channels: [&mut [f32]; 1] = [&mut mono];
/// let mut block = AudioBlock::new(&mut channels);
/// assert!(chain.check_block(&block).is_ok());
/// chain.process(&mut block);
/// ```
#[derive(Debug, Clone)]
pub struct SignalChain {
    config: ChainConfig,
    stages: Stages,
    spec: Option<ProcessSpec>,
}

impl Default for SignalChain {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

impl SignalChain {
    /// Build an unprepared chain from `config`.
    ///
    /// The config is taken as given; call [`ChainConfig::validate`] first if
    /// it comes from outside the program.
    pub fn new(config: ChainConfig) -> Self {
        let osc_a = Oscillator::new(config.osc_a).with_composition(config.composition);
        let osc_b = Oscillator::new(config.osc_b).with_composition(config.composition);
        let gain = Gain::new(config.gain.linear as f32);

        Self {
            config,
            stages: osc_a.chain(osc_b).chain(gain),
            spec: None,
        }
    }

    /// Configuration the chain was built with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Spec from the last `prepare`, if any.
    pub fn spec(&self) -> Option<&ProcessSpec> {
        self.spec.as_ref()
    }

    /// True once `prepare` has been called.
    pub fn is_prepared(&self) -> bool {
        self.spec.is_some()
    }

    /// First oscillator.
    pub fn oscillator_a(&self) -> &Oscillator {
        self.stages.first().first()
    }

    /// Second oscillator.
    pub fn oscillator_b(&self) -> &Oscillator {
        self.stages.first().second()
    }

    /// Gain stage.
    pub fn gain(&self) -> &Gain {
        self.stages.second()
    }

    /// Check that `block` may be handed to [`process`](Processor::process).
    ///
    /// Extra channels are not a violation; they are cleared by `process`.
    pub fn check_block(&self, block: &AudioBlock<'_, '_>) -> Result<(), ContractViolation> {
        let spec = self.spec.ok_or(ContractViolation::NotPrepared)?;
        if block.is_ragged() {
            return Err(ContractViolation::RaggedChannels);
        }
        if block.num_samples() > spec.max_block_size {
            return Err(ContractViolation::BlockTooLong {
                len: block.num_samples(),
                max: spec.max_block_size,
            });
        }
        Ok(())
    }
}

impl Processor for SignalChain {
    fn prepare(&mut self, spec: &ProcessSpec) {
        debug_assert!(spec.validate().is_ok(), "invalid process spec: {spec:?}");

        self.stages.prepare(spec);
        self.spec = Some(*spec);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = spec.sample_rate,
            max_block_size = spec.max_block_size,
            num_channels = spec.num_channels,
            "signal chain prepared"
        );
    }

    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        debug_assert_eq!(self.check_block(block), Ok(()), "signal chain contract violated");

        let Some(spec) = self.spec else {
            block.clear();
            return;
        };

        self.stages.process(block);
        block.clear_channels_from(spec.num_channels);
    }

    fn reset(&mut self) {
        self.stages.reset();
    }

    fn latency_samples(&self) -> usize {
        self.stages.latency_samples()
    }
}
