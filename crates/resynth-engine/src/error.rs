//! Error types for the resynthesis engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resynthesizing a sample buffer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Instrument id outside the `0..=9` preset range.
    #[error("invalid instrument id: {id} (expected 0..=9)")]
    InvalidInstrument {
        /// The invalid instrument id.
        id: u8,
    },

    /// Sample rate that would make window/hop sizing meaningless.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Channel count outside `{1, 2}`.
    #[error("invalid channel count: {channels} (expected 1 or 2)")]
    InvalidChannels {
        /// The invalid channel count.
        channels: u16,
    },

    /// Internal synthesis failure (e.g. a delay line could not be sized).
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },
}

impl EngineError {
    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }
}
