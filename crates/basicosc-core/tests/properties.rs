//! Property-based tests for basicosc-core.
//!
//! Phase continuity across arbitrary block splits, exact gain linearity and
//! bounded output, using proptest for randomized inputs.

use basicosc_core::{
    AudioBlock, ChainConfig, Composition, Gain, GainConfig, OscillatorConfig, ProcessSpec,
    Processor, SignalChain,
};
use proptest::prelude::*;
use std::ops::Range;

const FRAMES: usize = 512;

fn process_range(chain: &mut SignalChain, bufs: &mut [Vec<f32>], range: Range<usize>) {
    let mut channels: Vec<&mut [f32]> = bufs.iter_mut().map(|b| &mut b[range.clone()]).collect();
    chain.process(&mut AudioBlock::new(&mut channels));
}

fn composition(replace: bool) -> Composition {
    if replace {
        Composition::Replace
    } else {
        Composition::Additive
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rendering N samples in one call is bit-identical to rendering them in
    /// two calls split anywhere.
    #[test]
    fn phase_continuity_across_splits(
        split in 0usize..=FRAMES,
        channels in 1usize..=3,
        freq_a in 1.0f64..20000.0,
        freq_b in 1.0f64..20000.0,
        gain in -2.0f64..2.0,
        replace in any::<bool>(),
        sample_rate in prop::sample::select(vec![22050.0, 44100.0, 48000.0, 96000.0]),
    ) {
        let config = ChainConfig::default()
            .with_osc_a(OscillatorConfig::sine(freq_a))
            .with_osc_b(OscillatorConfig::sine(freq_b))
            .with_gain(GainConfig::linear(gain))
            .with_composition(composition(replace));
        let spec = ProcessSpec::new(sample_rate, FRAMES, channels);

        let mut whole = SignalChain::new(config);
        whole.prepare(&spec);
        let mut whole_bufs = vec![vec![0.0_f32; FRAMES]; channels];
        process_range(&mut whole, &mut whole_bufs, 0..FRAMES);

        let mut split_chain = SignalChain::new(config);
        split_chain.prepare(&spec);
        let mut split_bufs = vec![vec![0.0_f32; FRAMES]; channels];
        process_range(&mut split_chain, &mut split_bufs, 0..split);
        process_range(&mut split_chain, &mut split_bufs, split..FRAMES);

        for (ch, (a, b)) in whole_bufs.iter().zip(&split_bufs).enumerate() {
            for (i, (x, y)) in a.iter().zip(b).enumerate() {
                prop_assert!(
                    x.to_bits() == y.to_bits(),
                    "channel {} sample {} differs: {} vs {} (split at {})",
                    ch, i, x, y, split
                );
            }
        }
    }

    /// Gain output is exactly input times the factor.
    #[test]
    fn gain_is_exactly_linear(
        factor in -10.0f32..10.0,
        input in prop::array::uniform32(-1.0e3f32..1.0e3),
    ) {
        let mut gain = Gain::new(factor);
        let mut buf = input;
        let mut channels: [&mut [f32]; 1] = [&mut buf];
        gain.process(&mut AudioBlock::new(&mut channels));

        for (out, inp) in buf.iter().zip(input.iter()) {
            prop_assert_eq!(out.to_bits(), (inp * factor).to_bits());
        }
    }

    /// With silent input the chain never exceeds the sum of both unit sines
    /// times the gain.
    #[test]
    fn output_bounded_by_gain(
        freq_a in 0.0f64..24000.0,
        freq_b in 0.0f64..24000.0,
        gain in -1.0f64..1.0,
    ) {
        let config = ChainConfig::default()
            .with_osc_a(OscillatorConfig::sine(freq_a))
            .with_osc_b(OscillatorConfig::sine(freq_b))
            .with_gain(GainConfig::linear(gain));
        let mut chain = SignalChain::new(config);
        chain.prepare(&ProcessSpec::new(48000.0, FRAMES, 1));

        let mut bufs = vec![vec![0.0_f32; FRAMES]];
        process_range(&mut chain, &mut bufs, 0..FRAMES);

        let bound = 2.0 * (gain as f32).abs() + 1e-6;
        for &s in &bufs[0] {
            prop_assert!(s.is_finite() && s.abs() <= bound, "sample {} exceeds {}", s, bound);
        }
    }

    /// Re-preparing with an unchanged spec reproduces the first block exactly.
    #[test]
    fn reprepare_is_idempotent(
        warmup in 1usize..2000,
        freq in 20.0f64..5000.0,
    ) {
        let config = ChainConfig::default().with_osc_a(OscillatorConfig::sine(freq));
        let spec = ProcessSpec::new(48000.0, 2048, 1);
        let mut chain = SignalChain::new(config);

        chain.prepare(&spec);
        let mut first = vec![vec![0.0_f32; 64]];
        process_range(&mut chain, &mut first, 0..64);

        let mut scratch = vec![vec![0.0_f32; warmup]];
        process_range(&mut chain, &mut scratch, 0..warmup);

        chain.prepare(&spec);
        let mut again = vec![vec![0.0_f32; 64]];
        process_range(&mut chain, &mut again, 0..64);

        prop_assert_eq!(first, again);
        prop_assert_eq!(*chain.config(), config);
    }
}
