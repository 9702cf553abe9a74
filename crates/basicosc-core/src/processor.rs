//! Core Processor trait and the serial [`Chain`] combinator.
//!
//! Every stage of the signal path implements [`Processor`]: it is prepared
//! once for a [`ProcessSpec`] and then fed [`AudioBlock`]s in place.
//!
//! ## Design Decisions
//!
//! - **Block-based, in place**: stages mutate the host's buffer directly.
//!   Generators (oscillators) and transforms (gain) share one signature.
//!
//! - **Object-safe**: `dyn Processor` works, but the signal chain itself is
//!   built with static dispatch via [`ProcessorExt::chain`].
//!
//! - **No allocations in `process`**: only `prepare` may allocate.

use crate::block::AudioBlock;
use crate::process_spec::ProcessSpec;

/// A stage in the signal path.
///
/// # Example
///
/// ```rust
/// use basicosc_core::{AudioBlock, ProcessSpec, Processor};
///
/// struct Invert;
///
/// impl Processor for Invert {
///     fn prepare(&mut self, _spec: &ProcessSpec) {}
///
///     fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
///         for channel in block.channels_mut() {
///             for sample in channel.iter_mut() {
///                 *sample = -*sample;
///             }
///         }
///     }
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Processor {
    /// Size and zero internal state for `spec`.
    ///
    /// Called off the audio thread before the first block and whenever the
    /// format changes. May allocate.
    fn prepare(&mut self, spec: &ProcessSpec);

    /// Process one block in place.
    ///
    /// Called on the real-time thread. Must not allocate, block or perform I/O.
    fn process(&mut self, block: &mut AudioBlock<'_, '_>);

    /// Return internal state to its just-prepared condition without
    /// changing the prepared spec or any configuration.
    fn reset(&mut self);

    /// Processing latency in samples. Default is 0.
    fn latency_samples(&self) -> usize {
        0
    }
}

/// Extension trait for chaining processors.
pub trait ProcessorExt: Processor + Sized {
    /// Run `self`, then `next`, over the same block.
    ///
    /// # Example
    /// ```rust,ignore
    /// let stages = osc_a.chain(osc_b).chain(gain);
    /// ```
    fn chain<P: Processor>(self, next: P) -> Chain<Self, P> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<T: Processor> ProcessorExt for T {}

/// Two processors run in series over one block.
///
/// Created by [`ProcessorExt::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Processor, B: Processor> Processor for Chain<A, B> {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.first.prepare(spec);
        self.second.prepare(spec);
    }

    #[inline]
    fn process(&mut self, block: &mut AudioBlock<'_, '_>) {
        self.first.process(block);
        self.second.process(block);
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    fn latency_samples(&self) -> usize {
        self.first.latency_samples() + self.second.latency_samples()
    }
}

impl<A, B> Chain<A, B> {
    /// Get a reference to the first processor in the chain.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a reference to the second processor in the chain.
    pub fn second(&self) -> &B {
        &self.second
    }
}
