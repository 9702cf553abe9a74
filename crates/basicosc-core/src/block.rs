//! Non-owning view over a multi-channel audio buffer.
//!
//! The host owns the sample memory for the duration of one processing call.
//! [`AudioBlock`] borrows it as a slice of per-channel slices so stages can
//! mutate it in place; nothing can hold on to it past the call.

/// N channels × M samples of `f32` audio, borrowed from the host.
///
/// Channels are stored non-interleaved and should all have the same length.
/// A ragged set is viewed up to its shortest channel and flagged by
/// [`is_ragged`](Self::is_ragged), so slicing never goes out of bounds.
///
/// # Example
///
/// ```rust
/// use basicosc_core::AudioBlock;
///
/// let mut left = [1.0_f32; 4];
/// let mut right = [2.0_f32; 4];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
///
/// let mut block = AudioBlock::new(&mut channels);
/// assert_eq!(block.num_channels(), 2);
/// assert_eq!(block.num_samples(), 4);
///
/// block.clear_channel(1);
/// assert_eq!(right, [0.0; 4]);
/// ```
pub struct AudioBlock<'a, 'b> {
    channels: &'a mut [&'b mut [f32]],
    /// Length of the shortest channel
    num_samples: usize,
    ragged: bool,
}

impl<'a, 'b> AudioBlock<'a, 'b> {
    /// Wrap a set of channel slices.
    pub fn new(channels: &'a mut [&'b mut [f32]]) -> Self {
        let num_samples = channels.iter().map(|ch| ch.len()).min().unwrap_or(0);
        let ragged = channels.iter().any(|ch| ch.len() != num_samples);
        Self {
            channels,
            num_samples,
            ragged,
        }
    }

    /// True if the channels differ in length.
    #[inline]
    pub fn is_ragged(&self) -> bool {
        self.ragged
    }

    /// Number of channels in the block.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel (the shortest, if ragged).
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.channels[channel][..self.num_samples]
    }

    /// Mutable samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.channels[channel][..self.num_samples]
    }

    /// Iterate mutably over every channel.
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> + '_ {
        let len = self.num_samples;
        self.channels.iter_mut().map(move |ch| &mut ch[..len])
    }

    /// Zero one channel.
    pub fn clear_channel(&mut self, channel: usize) {
        self.channel_mut(channel).fill(0.0);
    }

    /// Zero every channel with index `>= first`. Out-of-range `first` is a no-op.
    pub fn clear_channels_from(&mut self, first: usize) {
        for ch in self.channels.iter_mut().skip(first) {
            ch.fill(0.0);
        }
    }

    /// Zero the whole block.
    pub fn clear(&mut self) {
        self.clear_channels_from(0);
    }
}
