//! ADSR envelope evaluated at an arbitrary time `t`, rather than stepped
//! sample-by-sample — the synthesizer needs the envelope value at a time
//! it already knows, not a stateful generator to advance.

/// Attack/Decay/Sustain/Release parameters for one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
}

impl AdsrParams {
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }
}

/// Evaluates the ADSR piecewise function at time `t`, given the effective
/// note length (already clamped by [`effective_note_length`] upstream).
pub fn envelope_at(params: &AdsrParams, t: f64, note_length: f64) -> f64 {
    let AdsrParams {
        attack,
        decay,
        sustain,
        release,
    } = *params;

    if t < attack {
        if attack > 0.0 {
            t / attack
        } else {
            1.0
        }
    } else if t < attack + decay {
        if decay > 0.0 {
            1.0 - (1.0 - sustain) * (t - attack) / decay
        } else {
            sustain
        }
    } else if t < note_length {
        sustain
    } else if t < note_length + release {
        if release > 0.0 {
            sustain * (1.0 - (t - note_length) / release)
        } else {
            0.0
        }
    } else {
        0.0
    }
}

/// Computes the clamped `release_start` the driver substitutes for the raw
/// note length, so releases remain audible on short inputs: the source
/// derives `max(note_length − 1.5·release, attack + decay + 0.1)` — this
/// is a necessary clamp, not a bug, and must be replicated exactly.
pub fn effective_note_length(params: &AdsrParams, raw_note_length: f64) -> f64 {
    let shortened = raw_note_length - 1.5 * params.release;
    let floor = params.attack + params.decay + 0.1;
    shortened.max(floor)
}
