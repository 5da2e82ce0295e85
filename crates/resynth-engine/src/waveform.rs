//! Pure per-sample waveform functions and the instrument dispatcher that
//! picks among them.
//!
//! Every function takes a phase `x` in radians and returns one sample.
//! Only [`flute`]'s noise component is non-deterministic; it is seeded
//! through an explicit RNG handle rather than touching global state.

use crate::oscillator::{sawtooth, square, sine, triangle};
use rand::Rng;
use rand_pcg::Pcg32;

/// `0.98·sin(x) − 0.02·sin(3x)`.
pub fn soft_sine(x: f64) -> f64 {
    0.98 * x.sin() - 0.02 * (3.0 * x).sin()
}

/// Blend of a mellow additive sine stack and a brighter triangle/saw mix.
pub fn pad(x: f64, blend: f64) -> f64 {
    let full_sine = 0.6 * (x.sin() + 0.3 * (2.001 * x).sin() + 0.4 * (0.5 * x).sin());
    let complex = 0.6 * (0.7 * triangle(x) + 0.5 * sawtooth(x));
    (1.0 - blend) * full_sine + blend * complex
}

/// FM-style bell tone, `sin(x + 5·h·sin(2x))`.
pub fn bell(x: f64, h: f64) -> f64 {
    (x + 5.0 * h * (2.0 * x).sin()).sin()
}

/// Odd-harmonic additive stack, normalized by `1 + h`.
pub fn harmonic(x: f64, h: f64) -> f64 {
    let mut sum = x.sin();
    for k in [3u32, 5, 7, 9] {
        let weight = 0.5_f64.powi(((k - 1) / 2) as i32);
        sum += weight * h * (k as f64 * x).sin();
    }
    sum / (1.0 + h)
}

/// Exponentially-decaying harmonic pluck, twelve partials.
pub fn pluck(x: f64, b: f64) -> f64 {
    let mut sum = 0.0;
    for k in 1u32..=12 {
        let kf = k as f64;
        sum += 0.7_f64.powi((k - 1) as i32) * (-kf * (1.0 - b)).exp() * (kf * x).sin();
    }
    0.3 * sum
}

/// Detuned saw stack with soft clipping and a cutoff-style gain, in the
/// manner of a TB-303 style acid lead.
pub fn acid(x: f64, cut: f64, res: f64) -> f64 {
    let raw = sawtooth(x) + 0.4 * res * sawtooth(x + 0.05) + 0.2 * res * sawtooth(x - 0.03);
    let clipped = soft_clip(raw, 0.8, 0.5);
    clipped * cut
}

fn soft_clip(v: f64, threshold: f64, slope_above: f64) -> f64 {
    let sign = if v < 0.0 { -1.0 } else { 1.0 };
    let mag = v.abs();
    if mag <= threshold {
        v
    } else {
        sign * (threshold + slope_above * (mag - threshold))
    }
}

/// A single deterministic noise sample in `[-1, 1]`, used only by
/// [`flute`].
pub fn noise(rng: &mut Pcg32) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

/// Selects and evaluates the waveform for instrument `instrument_id`,
/// blending per-instrument as documented; unknown ids fall back to plain
/// `sin(x)`.
#[allow(clippy::too_many_arguments)]
pub fn instrument_wave(
    x: f64,
    instrument_id: u8,
    wave_blend: f64,
    brightness: f64,
    harmonics: f64,
    noise_rng: &mut Pcg32,
) -> f64 {
    match instrument_id {
        0 => pad(x, wave_blend),
        1 => pluck(x, brightness),
        2 => harmonic(x, harmonics) * brightness + soft_sine(x) * (1.0 - brightness),
        3 => {
            soft_sine(x) * (1.0 - brightness)
                + harmonic(x, harmonics * 0.5) * brightness
                + noise(noise_rng) * 0.02
        }
        4 => 0.6 * sawtooth(x) + 0.4 * triangle(x),
        5 => 0.3 * square(x) + 0.7 * harmonic(x, harmonics),
        6 => bell(x, harmonics),
        7 => (1.0 - wave_blend) * sine(x) + 0.7 * wave_blend * square(x),
        8 => 0.6 * triangle(x) + 0.4 * bell(x, harmonics * 0.3),
        9 => acid(x, 0.5 + 0.5 * brightness, 0.7 + 0.3 * harmonics),
        _ => sine(x),
    }
}
