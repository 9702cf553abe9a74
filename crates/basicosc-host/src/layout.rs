//! Bus layouts the host can propose.

use std::fmt;

/// Channel configuration of one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSet {
    /// Bus is absent or switched off.
    #[default]
    Disabled,
    /// One channel.
    Mono,
    /// Left and right.
    Stereo,
    /// More than two channels with no particular speaker arrangement.
    Discrete(usize),
}

impl ChannelSet {
    /// Canonical channel set for `count` channels.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ChannelSet::Disabled,
            1 => ChannelSet::Mono,
            2 => ChannelSet::Stereo,
            n => ChannelSet::Discrete(n),
        }
    }

    /// Number of channels in the set.
    pub fn size(self) -> usize {
        match self {
            ChannelSet::Disabled => 0,
            ChannelSet::Mono => 1,
            ChannelSet::Stereo => 2,
            ChannelSet::Discrete(n) => n,
        }
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelSet::Disabled => f.write_str("disabled"),
            ChannelSet::Mono => f.write_str("mono"),
            ChannelSet::Stereo => f.write_str("stereo"),
            ChannelSet::Discrete(n) => write!(f, "discrete({n})"),
        }
    }
}

/// Main input and output bus of the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusesLayout {
    /// Main input bus.
    pub input: ChannelSet,
    /// Main output bus.
    pub output: ChannelSet,
}

impl BusesLayout {
    /// Stereo in, stereo out.
    pub const STEREO: Self = Self::new(ChannelSet::Stereo, ChannelSet::Stereo);

    /// Mono in, mono out.
    pub const MONO: Self = Self::new(ChannelSet::Mono, ChannelSet::Mono);

    /// No input, stereo out.
    pub const STEREO_OUT: Self = Self::new(ChannelSet::Disabled, ChannelSet::Stereo);

    /// Create a layout.
    pub const fn new(input: ChannelSet, output: ChannelSet) -> Self {
        Self { input, output }
    }

    /// Channels on the input bus.
    pub fn num_input_channels(&self) -> usize {
        self.input.size()
    }

    /// Channels on the output bus.
    pub fn num_output_channels(&self) -> usize {
        self.output.size()
    }
}

impl fmt::Display for BusesLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in, {} out", self.input, self.output)
    }
}
