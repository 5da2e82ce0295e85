//! Hann-windowed FFT pitch tracker with peak interpolation and the
//! stability/silence/hysteresis smoothing state machine.
//!
//! The source this engine is modeled on shipped two analyzer variants: a
//! library-backed FFT with no smoothing, and a hand-rolled FFT with a
//! state machine that suppresses pitch jitter and tail noise. Only the
//! smoothed variant is implemented here — the unsmoothed one glitches
//! audibly on real recordings.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

/// Analysis window length, in samples.
pub const WINDOW_SIZE: usize = 1024;
/// Advance between successive windows, in samples.
pub const HOP_SIZE: usize = 128;
/// Accepted fundamental frequency range, Hz.
pub const MIN_FREQUENCY: f64 = 200.0;
pub const MAX_FREQUENCY: f64 = 1500.0;
/// Divisor mapping raw FFT peak magnitude to normalized amplitude.
pub const AMP_SCALE: f64 = 200.0;
/// Minimum normalized amplitude below which a frequency update is trusted.
pub const AMP_THRESHOLD: f64 = 0.05;
/// Consecutive below-threshold windows after which amplitude is forced to
/// zero, suppressing decay-tail artifacts.
pub const SILENCE_COUNT: u32 = 5;
/// Fractional deviation from the last valid frequency that triggers the
/// stability gate.
const FREQUENCY_HYSTERESIS: f64 = 0.2;
/// Consecutive confirmations required before accepting a jump past the
/// hysteresis band.
const STABILITY_CONFIRMATIONS: u32 = 3;

/// One analysis frame: the dominant fundamental and its amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Number of analysis windows a buffer of `frames` samples yields.
pub fn window_count(frames: usize) -> usize {
    if frames < WINDOW_SIZE {
        0
    } else {
        (frames - WINDOW_SIZE) / HOP_SIZE + 1
    }
}

/// Runs the full analysis pass over a mono sample stream.
///
/// Returns exactly `window_count(mono.len())` points, honoring the
/// documented invariant on analyzer output length.
pub fn analyze(mono: &[f64], sample_rate: f64) -> Vec<FrequencyPoint> {
    let windows = window_count(mono.len());
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(WINDOW_SIZE);

    let mut last_valid_frequency = 0.0_f64;
    let mut pending_confirmations = 0_u32;
    let mut below_threshold_run = 0_u32;

    let mut points = Vec::with_capacity(windows);

    for w in 0..windows {
        let start = w * HOP_SIZE;
        let (raw_frequency, normalized_amp) =
            analyze_window(&mono[start..start + WINDOW_SIZE], sample_rate, fft.as_ref());

        let amplitude_ok = normalized_amp >= AMP_THRESHOLD;
        let frequency_in_range =
            raw_frequency >= MIN_FREQUENCY && raw_frequency <= MAX_FREQUENCY;

        let mut amplitude = normalized_amp;
        if amplitude_ok && frequency_in_range {
            below_threshold_run = 0;

            let deviates = last_valid_frequency > 0.0
                && (raw_frequency - last_valid_frequency).abs()
                    > last_valid_frequency * FREQUENCY_HYSTERESIS;

            if !deviates {
                last_valid_frequency = raw_frequency;
                pending_confirmations = 0;
            } else {
                pending_confirmations += 1;
                if pending_confirmations >= STABILITY_CONFIRMATIONS {
                    last_valid_frequency = raw_frequency;
                    pending_confirmations = 0;
                }
            }
        } else {
            below_threshold_run += 1;
            if below_threshold_run > SILENCE_COUNT {
                amplitude = 0.0;
            }
        }

        points.push(FrequencyPoint {
            frequency: last_valid_frequency,
            amplitude,
        });
    }

    points
}

fn analyze_window(
    window: &[f64],
    sample_rate: f64,
    fft: &dyn rustfft::Fft<f64>,
) -> (f64, f64) {
    let mut buffer: Vec<Complex<f64>> = window
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let hann = 0.5 * (1.0 - (2.0 * PI * i as f64 / (WINDOW_SIZE as f64 - 1.0)).cos());
            Complex::new(s * hann, 0.0)
        })
        .collect();

    fft.process(&mut buffer);

    let magnitudes: Vec<f64> = buffer[..WINDOW_SIZE / 2]
        .iter()
        .map(|c| (c.re * c.re + c.im * c.im).sqrt())
        .collect();

    let mut max_bin = 0usize;
    let mut max_magnitude = 0.0_f64;
    for (k, &mag) in magnitudes.iter().enumerate().skip(1) {
        let freq = k as f64 * sample_rate / WINDOW_SIZE as f64;
        if freq < MIN_FREQUENCY || freq > MAX_FREQUENCY {
            continue;
        }
        if mag > max_magnitude {
            max_magnitude = mag;
            max_bin = k;
        }
    }

    if max_bin == 0 {
        return (0.0, 0.0);
    }

    let refined_bin = refine_peak_bin(&magnitudes, max_bin);
    let frequency = refined_bin * sample_rate / WINDOW_SIZE as f64;
    let normalized_amp = (max_magnitude / AMP_SCALE).clamp(0.0, 1.0);

    (frequency, normalized_amp)
}

/// Parabolic peak interpolation across `(k-1, k, k+1)` magnitudes.
fn refine_peak_bin(magnitudes: &[f64], k: usize) -> f64 {
    if k == 0 || k + 1 >= magnitudes.len() {
        return k as f64;
    }
    let alpha = magnitudes[k - 1];
    let beta = magnitudes[k];
    let gamma = magnitudes[k + 1];
    let denom = alpha - 2.0 * beta + gamma;
    if denom.abs() < f64::EPSILON {
        k as f64
    } else {
        k as f64 + 0.5 * (alpha - gamma) / denom
    }
}
