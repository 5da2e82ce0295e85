//! Multi-oscillator additive synthesizer.
//!
//! Consumes the analyzer's frequency/amplitude track, interpolates
//! between frames, drives up to four detuned oscillators per sample
//! through the waveform library, and applies envelope, tremolo, and
//! filter modulation. Emits the dry and delayed-chorus buffers described
//! in the source; the caller merges them (see [`crate::post`]).

use crate::analyzer::{FrequencyPoint, HOP_SIZE};
use crate::envelope::{effective_note_length, envelope_at, AdsrParams};
use crate::modulation::ModulationState;
use crate::oscillator::PhaseAccumulator;
use crate::preset::InstrumentPreset;
use crate::rng::create_rng;
use crate::waveform::instrument_wave;

/// Master output gain applied before tremolo, ahead of reverb/volume.
pub const MASTER_VOLUME: f64 = 0.8;
/// Smoothing coefficient for per-sample amplitude interpolation.
const AMP_SMOOTH: f64 = 0.05;
/// Detune factor table indexed by oscillator slot.
fn detune_factor(slot: usize, detune_semitones: f64) -> f64 {
    match slot {
        0 => 1.0,
        1 => 2.0_f64.powf(detune_semitones / 12.0),
        2 => 2.0_f64.powf(-detune_semitones / 12.0),
        3 => 0.5,
        _ => 1.0,
    }
}

/// Mix weight for oscillator `slot` among `num_oscillators` active voices.
fn mix_weight(slot: usize, num_oscillators: u8, octave_mix: f64) -> f64 {
    if num_oscillators <= 1 {
        // Guarded per the source's own open question: the (N-1) divisor
        // formula is undefined for a single oscillator.
        return 1.0;
    }
    if slot == 3 {
        octave_mix
    } else {
        (1.0 - octave_mix) / (num_oscillators as f64 - 1.0)
    }
}

/// Output of one synthesis pass: the dry signal and the delayed-chorus
/// buffer, both interleaved at `channels` per frame.
pub struct SynthOutput {
    pub dry: Vec<f32>,
    pub chorus: Vec<f32>,
}

/// Runs the additive synthesizer over `freq_points`, producing `frames`
/// worth of interleaved output at `channels`.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    freq_points: &[FrequencyPoint],
    frames: usize,
    channels: u16,
    sample_rate: f64,
    preset: &InstrumentPreset,
    instrument_id: u8,
    semitones: f64,
    noise_seed: u32,
) -> SynthOutput {
    let channels_usize = channels as usize;
    let mut dry = vec![0.0_f32; frames * channels_usize];
    let mut chorus = vec![0.0_f32; frames * channels_usize];

    if freq_points.is_empty() || frames == 0 {
        return SynthOutput { dry, chorus };
    }

    let adsr = AdsrParams::new(
        preset.attack_time,
        preset.decay_time,
        preset.sustain_level,
        preset.release_time,
    );
    let raw_note_length = frames as f64 / sample_rate;
    let note_length = effective_note_length(&adsr, raw_note_length);

    let freq_multiplier = 2.0_f64.powf(semitones / 12.0);
    let mut smooth_amp = 0.0_f64;
    let mut phases: [PhaseAccumulator; 4] = [
        PhaseAccumulator::new(sample_rate),
        PhaseAccumulator::new(sample_rate),
        PhaseAccumulator::new(sample_rate),
        PhaseAccumulator::new(sample_rate),
    ];
    let mut modulation = ModulationState::new(sample_rate);
    let mut noise_rng = create_rng(noise_seed);

    let num_oscillators = preset.num_oscillators.clamp(1, 4);
    let windows = freq_points.len();

    for w in 0..windows {
        let start = w * HOP_SIZE;
        let end = if w + 1 == windows {
            frames
        } else {
            ((w + 1) * HOP_SIZE).min(frames)
        };
        if start >= frames {
            break;
        }
        let segment_len = end.saturating_sub(start);
        if segment_len == 0 {
            continue;
        }

        let freq_here = freq_points[w].frequency;
        let freq_next = if w + 1 < windows {
            freq_points[w + 1].frequency
        } else {
            freq_here
        };

        for i in 0..segment_len {
            let sample_index = start + i;
            let t = sample_index as f64 / sample_rate;

            let interp = if segment_len > 1 {
                i as f64 / segment_len as f64
            } else {
                0.0
            };
            let instantaneous_freq =
                (freq_here + (freq_next - freq_here) * interp) * freq_multiplier;

            smooth_amp = (1.0 - AMP_SMOOTH) * smooth_amp + AMP_SMOOTH * freq_points[w].amplitude;

            let envelope = envelope_at(&adsr, t, note_length);
            let modulation_sample = modulation.advance(
                preset.chorus_rate,
                preset.chorus_depth,
                preset.tremolo_rate,
                preset.tremolo_depth,
                preset.filter_mod,
            );

            let mut mixed = 0.0_f64;
            for slot in 0..num_oscillators as usize {
                let detune = detune_factor(slot, preset.detune_amount);
                let phase = phases[slot].advance(instantaneous_freq * detune);
                let brightness = preset.brightness * modulation_sample.filter_mod_amount;
                let osc_sample = instrument_wave(
                    phase,
                    instrument_id,
                    preset.wave_blend,
                    brightness,
                    preset.harmonics,
                    &mut noise_rng,
                );
                mixed += osc_sample * mix_weight(slot, num_oscillators, preset.octave_mix);
            }

            let sample = mixed
                * smooth_amp
                * envelope
                * MASTER_VOLUME
                * modulation_sample.tremolo_amount;

            let base = sample_index * channels_usize;
            for c in 0..channels_usize {
                dry[base + c] = sample as f32;
            }

            if preset.chorus_mix > 0.0 {
                let delay_seconds = 0.02 + 0.01 * modulation_sample.chorus_mod;
                let delay_samples = (delay_seconds * sample_rate).round() as usize;
                let target = sample_index + delay_samples;
                if target < frames {
                    let target_base = target * channels_usize;
                    let contribution = (sample * preset.chorus_mix) as f32;
                    for c in 0..channels_usize {
                        chorus[target_base + c] += contribution;
                    }
                }
            }
        }
    }

    SynthOutput { dry, chorus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::FrequencyPoint;
    use crate::preset::PRESETS;

    fn constant_track(freq: f64, amp: f64, windows: usize) -> Vec<FrequencyPoint> {
        vec![FrequencyPoint { frequency: freq, amplitude: amp }; windows]
    }

    #[test]
    fn silent_track_yields_silent_output() {
        let track = constant_track(440.0, 0.0, 10);
        let out = synthesize(&track, 1280, 1, 44100.0, &PRESETS[0], 0, 0.0, 1);
        assert!(out.dry.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn output_has_no_nan_or_inf_for_any_preset() {
        let track = constant_track(440.0, 0.8, 40);
        for (id, preset) in PRESETS.iter().enumerate() {
            let out = synthesize(&track, 40 * HOP_SIZE, 1, 44100.0, preset, id as u8, 0.0, 1);
            assert!(out.dry.iter().all(|s| s.is_finite()), "preset {} dry", id);
            assert!(out.chorus.iter().all(|s| s.is_finite()), "preset {} chorus", id);
        }
    }

    #[test]
    fn writes_identical_sample_to_all_channels() {
        let track = constant_track(440.0, 0.8, 20);
        let out = synthesize(&track, 20 * HOP_SIZE, 2, 44100.0, &PRESETS[1], 1, 0.0, 1);
        for frame in out.dry.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn determinism_given_fixed_seed() {
        let track = constant_track(523.0, 0.6, 30);
        let a = synthesize(&track, 30 * HOP_SIZE, 1, 44100.0, &PRESETS[3], 3, 0.0, 99);
        let b = synthesize(&track, 30 * HOP_SIZE, 1, 44100.0, &PRESETS[3], 3, 0.0, 99);
        assert_eq!(a.dry, b.dry);
        assert_eq!(a.chorus, b.chorus);
    }

    #[test]
    fn single_oscillator_guard_does_not_panic() {
        let mut preset = PRESETS[7];
        preset.num_oscillators = 1;
        let track = constant_track(300.0, 0.5, 10);
        let out = synthesize(&track, 10 * HOP_SIZE, 1, 44100.0, &preset, 7, 0.0, 1);
        assert!(out.dry.iter().all(|s| s.is_finite()));
    }
}
