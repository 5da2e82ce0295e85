//! Monophonic resynthesis engine.
//!
//! Takes one monophonic (or first-channel-of-multi) recording and
//! resynthesizes it through a chosen instrument preset: FFT-based pitch
//! tracking feeds a multi-oscillator additive synthesizer with envelope
//! and LFO modulation, chorus, and a four-tap feedback reverb. Entirely
//! synchronous and single-threaded; one call completes one buffer with no
//! internal suspension points.

pub mod analyzer;
pub mod buffer;
pub mod envelope;
pub mod error;
pub mod modulation;
pub mod oscillator;
pub mod post;
pub mod preset;
pub mod reverb;
pub mod rng;
pub mod synth;
pub mod waveform;

pub use buffer::SampleBuffer;
pub use error::{EngineError, EngineResult};
pub use preset::{InstrumentPreset, INSTRUMENT_NAMES, PRESETS};

use reverb::Reverb;

/// Reverb feedback coefficient; fixed by the source, not exposed per-preset.
const REVERB_DECAY: f64 = 0.8;

/// Fixed RNG base seed for the flute voice's noise component. The engine
/// exposes no seed parameter at its boundary (the contract in the source
/// takes none), so determinism is achieved with one constant seed rather
/// than process-wide mutable RNG state.
const NOISE_BASE_SEED: u32 = 0x5EED_0001;

/// Resynthesizes `input` through instrument `instrument_id`, transposed by
/// `semitones` and scaled by `volume`.
///
/// Returns an output buffer of identical frame count and channel layout to
/// `input`. All-silent or zero-frame input short-circuits to a
/// zero-filled output of the same shape — this is not an error.
pub fn process(
    input: &SampleBuffer,
    instrument_id: u8,
    semitones: f64,
    volume: f64,
) -> EngineResult<SampleBuffer> {
    if preset::preset_for_id(instrument_id).is_none() {
        return Err(EngineError::InvalidInstrument { id: instrument_id });
    }
    if !(1..=2).contains(&input.channels) {
        return Err(EngineError::InvalidChannels {
            channels: input.channels,
        });
    }
    if input.sample_rate == 0 {
        return Err(EngineError::InvalidSampleRate {
            rate: input.sample_rate,
        });
    }

    if input.frames == 0 || input.is_silent() {
        return Ok(SampleBuffer::silence(
            input.frames,
            input.channels,
            input.sample_rate,
        ));
    }

    let preset = preset::preset_for_id(instrument_id).expect("validated above");
    let sample_rate = input.sample_rate as f64;
    let noise_seed = rng::derive_component_seed(NOISE_BASE_SEED, "flute-noise");

    let mono = input.first_channel_f64();
    let freq_points = analyzer::analyze(&mono, sample_rate);

    let synth::SynthOutput { mut dry, chorus } = synth::synthesize(
        &freq_points,
        input.frames,
        input.channels,
        sample_rate,
        preset,
        instrument_id,
        semitones,
        noise_seed,
    );

    post::merge_chorus(&mut dry, &chorus, preset.chorus_mix);

    let mut reverb = Reverb::new();
    reverb.apply(&mut dry, input.channels, preset.reverb_mix, REVERB_DECAY);

    post::apply_volume(&mut dry, volume);

    Ok(SampleBuffer::new(dry, input.channels, input.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_buffer(freq: f64, amplitude: f32, sample_rate: u32, seconds: f64, channels: u16) -> SampleBuffer {
        let frames = (seconds * sample_rate as f64) as usize;
        let mut samples = Vec::with_capacity(frames * channels as usize);
        for i in 0..frames {
            let v = amplitude
                * (2.0 * std::f64::consts::PI * freq * i as f64 / sample_rate as f64).sin() as f32;
            for _ in 0..channels {
                samples.push(v);
            }
        }
        SampleBuffer::new(samples, channels, sample_rate)
    }

    #[test]
    fn rejects_unknown_instrument() {
        let input = SampleBuffer::silence(1000, 1, 44100);
        let err = process(&input, 10, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInstrument { id: 10 }));
    }

    #[test]
    fn rejects_bad_channel_count() {
        let input = SampleBuffer::silence(1000, 3, 44100);
        let err = process(&input, 0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidChannels { channels: 3 }));
    }

    #[test]
    fn silence_in_silence_out() {
        let input = SampleBuffer::silence(5000, 2, 44100);
        let output = process(&input, 4, 0.0, 1.0).unwrap();
        assert_eq!(output.frames, input.frames);
        assert_eq!(output.channels, input.channels);
        assert!(output.is_silent());
    }

    #[test]
    fn shape_is_preserved() {
        let input = sine_buffer(440.0, 0.5, 44100, 0.3, 2);
        let output = process(&input, 5, 0.0, 1.0).unwrap();
        assert_eq!(output.frames, input.frames);
        assert_eq!(output.channels, input.channels);
        assert_eq!(output.sample_rate, input.sample_rate);
    }

    #[test]
    fn no_sample_is_nan_or_infinite() {
        let input = sine_buffer(660.0, 0.8, 44100, 0.2, 1);
        for id in 0..10u8 {
            let output = process(&input, id, 3.0, 1.5).unwrap();
            assert!(output.samples.iter().all(|s| s.is_finite()), "preset {}", id);
        }
    }

    #[test]
    fn volume_doubling_doubles_every_sample() {
        let input = sine_buffer(440.0, 0.5, 44100, 0.3, 1);
        let a = process(&input, 0, 0.0, 1.0).unwrap();
        let b = process(&input, 0, 0.0, 2.0).unwrap();
        for (x, y) in a.samples.iter().zip(b.samples.iter()) {
            assert!((y - 2.0 * x).abs() < 1e-4);
        }
    }

    #[test]
    fn determinism_across_runs() {
        let input = sine_buffer(523.0, 0.6, 44100, 0.2, 1);
        let a = process(&input, 3, 0.0, 1.0).unwrap();
        let b = process(&input, 3, 0.0, 1.0).unwrap();
        assert_eq!(a.samples, b.samples);
    }
}
