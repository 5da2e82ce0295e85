//! Thin CLI driver: argument parsing, WAV file I/O, and exit codes. The
//! resynthesis itself is entirely `resynth-engine`'s responsibility — this
//! binary never touches a sample buffer's contents.

mod instrument_name;
mod wav_io;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;
use instrument_name::parse_instrument;
use resynth_engine::INSTRUMENT_NAMES;
use std::path::{Path, PathBuf};

/// Resynthesize a monophonic recording through a chosen instrument voice.
#[derive(Parser, Debug)]
#[command(name = "resynth")]
struct Cli {
    /// Input WAV file.
    input: PathBuf,
    /// Transposition in semitones (default 0).
    semitones: Option<f64>,
    /// Instrument: integer 0..9, or a name (pad, pluck, brass, flute,
    /// strings, organ, bell, bass, wurlitzer, acid).
    instrument: Option<String>,
    /// Output volume multiplier, 0..10 (default 1).
    volume: Option<f64>,
    /// Output WAV path (default derived from input/instrument/semitones).
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("error: {err:#}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let semitones = cli.semitones.unwrap_or(0.0);
    let instrument_id = match &cli.instrument {
        Some(raw) => parse_instrument(raw).map_err(|e| anyhow!(e))?,
        None => 0,
    };
    let volume = cli.volume.unwrap_or(1.0);
    if !(0.0..=10.0).contains(&volume) {
        eprintln!(
            "{}",
            format!("warning: volume {} is outside 0..10, proceeding anyway", volume).yellow()
        );
    }

    let instrument_name = INSTRUMENT_NAMES[instrument_id as usize];
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, instrument_name, semitones));

    let input_buffer = wav_io::read_wav(&cli.input)?;
    let output_buffer = resynth_engine::process(&input_buffer, instrument_id, semitones, volume)?;
    wav_io::write_wav(&output_path, &output_buffer)?;

    println!(
        "{}",
        format!("wrote {} ({})", output_path.display(), instrument_name).green()
    );
    Ok(())
}

fn default_output_path(input: &Path, instrument_name: &str, semitones: f64) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let semitones_label = if semitones.fract() == 0.0 {
        format!("{}", semitones as i64)
    } else {
        format!("{:.1}", semitones)
    };
    input.with_file_name(format!(
        "{}_{}_{}.wav",
        stem, instrument_name, semitones_label
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_uses_whole_semitones() {
        let path = default_output_path(Path::new("melody.wav"), "pad", 0.0);
        assert_eq!(path, PathBuf::from("melody_pad_0.wav"));
    }

    #[test]
    fn default_output_path_keeps_fractional_semitones() {
        let path = default_output_path(Path::new("melody.wav"), "acid", -5.5);
        assert_eq!(path, PathBuf::from("melody_acid_-5.5.wav"));
    }

    #[test]
    fn default_output_path_preserves_parent_directory() {
        let path = default_output_path(Path::new("samples/melody.wav"), "bell", 12.0);
        assert_eq!(path, PathBuf::from("samples/melody_bell_12.wav"));
    }
}
