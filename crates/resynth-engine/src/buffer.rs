//! The interleaved sample buffer that crosses the engine boundary.

/// An owned, interleaved multi-channel audio buffer.
///
/// Allocated at the start of a `process()` call and returned to the caller;
/// the engine never retains a buffer across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Interleaved samples, length `frames * channels`.
    pub samples: Vec<f32>,
    /// Number of frames (samples per channel).
    pub frames: usize,
    /// Channel count, `1` or `2`.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a new buffer from interleaved samples.
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
        let frames = if channels == 0 {
            0
        } else {
            samples.len() / channels as usize
        };
        Self {
            samples,
            frames,
            channels,
            sample_rate,
        }
    }

    /// Creates a silent buffer of the given shape.
    pub fn silence(frames: usize, channels: u16, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; frames * channels as usize],
            frames,
            channels,
            sample_rate,
        }
    }

    /// Returns the sample at `(frame, channel)`.
    pub fn get(&self, frame: usize, channel: u16) -> f32 {
        self.samples[frame * self.channels as usize + channel as usize]
    }

    /// Sets the sample at `(frame, channel)`.
    pub fn set(&mut self, frame: usize, channel: u16, value: f32) {
        self.samples[frame * self.channels as usize + channel as usize] = value;
    }

    /// Returns true if every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Copies the first channel into a standalone mono buffer, as f64.
    pub fn first_channel_f64(&self) -> Vec<f64> {
        let ch = self.channels as usize;
        (0..self.frames)
            .map(|i| self.samples[i * ch] as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_has_expected_shape() {
        let buf = SampleBuffer::silence(100, 2, 44100);
        assert_eq!(buf.frames, 100);
        assert_eq!(buf.samples.len(), 200);
        assert!(buf.is_silent());
    }

    #[test]
    fn get_set_roundtrip() {
        let mut buf = SampleBuffer::silence(4, 2, 44100);
        buf.set(1, 1, 0.5);
        assert_eq!(buf.get(1, 1), 0.5);
        assert_eq!(buf.get(1, 0), 0.0);
    }

    #[test]
    fn first_channel_extracts_interleaved_left() {
        let buf = SampleBuffer::new(vec![1.0, -1.0, 2.0, -2.0], 2, 44100);
        assert_eq!(buf.first_channel_f64(), vec![1.0, 2.0]);
    }
}
