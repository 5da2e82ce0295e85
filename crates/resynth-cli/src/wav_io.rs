//! Thin WAV codec glue around `hound`, kept out of the engine crate
//! entirely (the engine's contract takes buffers, not filesystem paths).

use anyhow::{Context, Result};
use resynth_engine::SampleBuffer;
use std::path::Path;

/// Reads a WAV file and decodes it to an interleaved float32 buffer,
/// regardless of the file's on-disk sample format.
pub fn read_wav(path: &Path) -> Result<SampleBuffer> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open input WAV: {}", path.display()))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()
            .context("failed to decode float WAV samples")?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<Vec<f32>, _>>()
                .context("failed to decode integer WAV samples")?
        }
    };

    Ok(SampleBuffer::new(samples, spec.channels, spec.sample_rate))
}

/// Writes an interleaved float32 buffer out as a float32 WAV file,
/// preserving the buffer's channel count and sample rate.
pub fn write_wav(path: &Path, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channels,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create output WAV: {}", path.display()))?;
    for &sample in &buffer.samples {
        writer
            .write_sample(sample)
            .context("failed to write WAV sample")?;
    }
    writer.finalize().context("failed to finalize WAV file")?;
    Ok(())
}
