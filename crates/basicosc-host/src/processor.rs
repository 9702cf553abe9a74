//! The processor object a host drives.
//!
//! Owns the [`SignalChain`] and translates host lifecycle calls into
//! `prepare`/`process` on it. Everything apart from the signal path is
//! fixed: one unnamed program, no MIDI, no tail, no editor.

use basicosc_core::{AudioBlock, ChainConfig, ProcessSpec, Processor, SignalChain};

use crate::error::HostError;
use crate::layout::{BusesLayout, ChannelSet};

/// Name reported to the host.
pub const PLUGIN_NAME: &str = "BasicOsc";

/// Whether the processor sits on an effect slot or an instrument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessorKind {
    /// Has an input bus matching its output bus. The oscillators are
    /// composed with whatever arrives on the input.
    #[default]
    Effect,
    /// Output bus only.
    Instrument,
}

impl ProcessorKind {
    /// Layout a freshly created processor of this kind starts with.
    pub fn default_layout(self) -> BusesLayout {
        match self {
            ProcessorKind::Effect => BusesLayout::STEREO,
            ProcessorKind::Instrument => BusesLayout::STEREO_OUT,
        }
    }
}

/// Host-facing wrapper around the BasicOsc signal chain.
///
/// # Lifecycle
///
/// 1. Optionally [`set_buses_layout`](Self::set_buses_layout)
/// 2. [`prepare_to_play`](Self::prepare_to_play) (off the audio thread)
/// 3. [`process_block`](Self::process_block) once per block (audio thread)
/// 4. [`release_resources`](Self::release_resources) when playback stops
///
/// `process_block` before a successful `prepare_to_play` produces silence.
#[derive(Debug, Clone)]
pub struct BasicOscProcessor {
    chain: SignalChain,
    kind: ProcessorKind,
    layout: BusesLayout,
    active: bool,
}

impl Default for BasicOscProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicOscProcessor {
    /// Effect-slot processor with the shipped configuration.
    pub fn new() -> Self {
        Self::from_parts(SignalChain::default(), ProcessorKind::Effect)
    }

    /// Effect-slot processor with a custom configuration.
    pub fn with_config(config: ChainConfig) -> Result<Self, HostError> {
        config.validate().map_err(HostError::InvalidConfig)?;
        Ok(Self::from_parts(
            SignalChain::new(config),
            ProcessorKind::Effect,
        ))
    }

    /// Switch between effect and instrument slot, resetting the layout to
    /// that kind's default.
    pub fn with_kind(mut self, kind: ProcessorKind) -> Self {
        self.kind = kind;
        self.layout = kind.default_layout();
        self.active = false;
        self
    }

    fn from_parts(chain: SignalChain, kind: ProcessorKind) -> Self {
        Self {
            chain,
            kind,
            layout: kind.default_layout(),
            active: false,
        }
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    /// Name reported to the host.
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// The processor ignores MIDI input.
    pub fn accepts_midi(&self) -> bool {
        false
    }

    /// The processor never emits MIDI.
    pub fn produces_midi(&self) -> bool {
        false
    }

    /// The processor handles audio, not only MIDI.
    pub fn is_midi_effect(&self) -> bool {
        false
    }

    /// Output stops as soon as input stops being processed.
    pub fn tail_length_seconds(&self) -> f64 {
        0.0
    }

    /// No editor is provided.
    pub fn has_editor(&self) -> bool {
        false
    }

    /// Latency added by the signal chain in samples.
    pub fn latency_samples(&self) -> usize {
        self.chain.latency_samples()
    }

    /// Slot this processor was built for.
    pub fn kind(&self) -> ProcessorKind {
        self.kind
    }

    // ------------------------------------------------------------------
    // Programs
    // ------------------------------------------------------------------

    /// Always one: some hosts misbehave when told there are no programs.
    pub fn num_programs(&self) -> usize {
        1
    }

    /// Always program 0.
    pub fn current_program(&self) -> usize {
        0
    }

    /// Ignored; there is only one program.
    pub fn set_current_program(&mut self, _index: usize) {}

    /// Programs are unnamed.
    pub fn program_name(&self, _index: usize) -> &str {
        ""
    }

    /// Ignored; programs are unnamed.
    pub fn change_program_name(&mut self, _index: usize, _name: &str) {}

    // ------------------------------------------------------------------
    // Bus layout
    // ------------------------------------------------------------------

    /// Whether the processor can run with `layout`.
    ///
    /// The output must be mono or stereo. Effects need the input to match
    /// the output; instruments must not have an input.
    pub fn is_buses_layout_supported(&self, layout: &BusesLayout) -> bool {
        if !matches!(layout.output, ChannelSet::Mono | ChannelSet::Stereo) {
            return false;
        }
        match self.kind {
            ProcessorKind::Effect => layout.input == layout.output,
            ProcessorKind::Instrument => layout.input == ChannelSet::Disabled,
        }
    }

    /// Apply a host-proposed layout.
    ///
    /// A new layout deactivates the processor; the host prepares it again
    /// before the next block.
    pub fn set_buses_layout(&mut self, layout: BusesLayout) -> Result<(), HostError> {
        if !self.is_buses_layout_supported(&layout) {
            tracing::warn!(%layout, "rejected bus layout");
            return Err(HostError::UnsupportedLayout(layout));
        }
        if layout != self.layout {
            tracing::info!(%layout, "bus layout changed");
            self.layout = layout;
            self.active = false;
        }
        Ok(())
    }

    /// Current bus layout.
    pub fn buses_layout(&self) -> BusesLayout {
        self.layout
    }

    /// Channels on the input bus.
    pub fn total_num_input_channels(&self) -> usize {
        self.layout.num_input_channels()
    }

    /// Channels on the output bus.
    pub fn total_num_output_channels(&self) -> usize {
        self.layout.num_output_channels()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Prepare the chain for playback. Called off the audio thread.
    ///
    /// The chain is prepared for as many channels as the output bus carries.
    pub fn prepare_to_play(
        &mut self,
        sample_rate: f64,
        samples_per_block: usize,
    ) -> Result<(), HostError> {
        let spec = ProcessSpec::new(
            sample_rate,
            samples_per_block,
            self.total_num_output_channels(),
        );
        spec.validate().map_err(HostError::InvalidSpec)?;

        self.chain.prepare(&spec);
        self.active = true;

        tracing::info!(
            sample_rate,
            samples_per_block,
            channels = spec.num_channels,
            layout = %self.layout,
            "prepared to play"
        );
        Ok(())
    }

    /// Playback stopped. The chain keeps its allocation; the next
    /// `prepare_to_play` re-seeds it.
    pub fn release_resources(&mut self) {
        if self.active {
            tracing::debug!("released resources");
        }
        self.active = false;
    }

    /// True between `prepare_to_play` and `release_resources`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Process one host buffer in place. Called on the audio thread.
    ///
    /// The buffer holds one slice per channel, `max(inputs, outputs)` of
    /// them. Output channels that had no input are cleared first so stale
    /// host memory never reaches the oscillators. If the processor is not
    /// active, or the buffer breaks the prepared contract (too long, or
    /// channels of unequal length), the whole buffer is cleared instead.
    pub fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
        let num_inputs = self.total_num_input_channels();
        let num_outputs = self.total_num_output_channels();
        let mut block = AudioBlock::new(buffer);

        for ch in num_inputs..num_outputs.min(block.num_channels()) {
            block.clear_channel(ch);
        }

        if !self.active || self.chain.check_block(&block).is_err() {
            block.clear();
            return;
        }

        self.chain.process(&mut block);
    }

    /// Return the oscillators to zero phase without re-preparing.
    pub fn reset(&mut self) {
        self.chain.reset();
    }

    /// The wrapped signal chain.
    pub fn chain(&self) -> &SignalChain {
        &self.chain
    }
}
