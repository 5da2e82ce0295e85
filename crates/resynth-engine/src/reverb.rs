//! Four-tap feedback delay network reverb.
//!
//! Not Freeverb — the source calls for a much simpler fixed-delay feedback
//! network, four parallel integer-delay taps mixed back dry/wet. `mix` and
//! `decay` are ordinary arguments here rather than process-wide mutables,
//! per the source's own preferred-redesign note.

/// Fixed tap delays, in samples; chosen in the source to be mutually
/// prime-like so the four taps do not reinforce each other periodically.
const TAP_DELAYS: [usize; 4] = [1567, 2053, 3001, 4001];

struct Tap {
    line: Vec<f64>,
    pos: usize,
}

impl Tap {
    fn new(delay: usize) -> Self {
        Self {
            line: vec![0.0; delay.max(1)],
            pos: 0,
        }
    }

    fn step(&mut self, x: f64, decay: f64) -> f64 {
        let out = self.line[self.pos];
        self.line[self.pos] = 0.25 * x + decay * out;
        self.pos = (self.pos + 1) % self.line.len();
        out
    }
}

/// Feedback delay network reverb over an interleaved multi-channel buffer.
pub struct Reverb {
    taps: [Tap; 4],
}

impl Reverb {
    pub fn new() -> Self {
        Self {
            taps: TAP_DELAYS.map(Tap::new),
        }
    }

    /// Applies the reverb in place to `samples` (interleaved, `channels`
    /// per frame), mixing `mix` parts wet against `1 - mix` parts dry.
    ///
    /// An allocation failure in the source silently leaves the buffer
    /// unchanged; here the taps are sized up front from fixed constants,
    /// so the only analogous failure mode is an empty buffer, which is a
    /// no-op.
    pub fn apply(&mut self, samples: &mut [f32], channels: u16, mix: f64, decay: f64) {
        let channels = channels as usize;
        if channels == 0 || samples.is_empty() {
            return;
        }
        let frames = samples.len() / channels;

        for i in 0..frames {
            let base = i * channels;
            let x: f64 = (0..channels).map(|c| samples[base + c] as f64).sum::<f64>() / channels as f64;

            let mut y = 0.0;
            for tap in &mut self.taps {
                y += tap.step(x, decay);
            }
            y *= 0.5;

            for c in 0..channels {
                let dry = samples[base + c] as f64;
                samples[base + c] = ((1.0 - mix) * dry + mix * y) as f32;
            }
        }
    }
}

impl Default for Reverb {
    fn default() -> Self {
        Self::new()
    }
}
