//! Error types for murmur-asr organized by processing stage.

use thiserror::Error;

/// Transcription pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Audio loading stage error
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Model resolution stage error
    #[error(transparent)]
    Hub(#[from] HubError),

    /// Engine inference stage error
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Audio loading and validation errors.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Channel count validation failed
    #[error("invalid channel count: expected mono or stereo, got {0} channels")]
    InvalidChannels(u16),

    /// No samples in the decoded stream
    #[error("audio stream is empty")]
    Empty,

    /// IO error during audio loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV file format error
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Model hub resolution errors.
#[derive(Debug, Error)]
pub enum HubError {
    /// Hub client could not be constructed at startup
    #[error("model hub unavailable: {0}")]
    Unavailable(#[source] hf_hub::api::sync::ApiError),

    /// Model file download or cache lookup failed
    #[error("failed to fetch model file {name}: {source}")]
    Fetch {
        name: String,
        source: hf_hub::api::sync::ApiError,
    },
}

/// Whisper engine errors (context creation, inference).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Model path is not valid UTF-8 for the C API
    #[error("model path is not valid UTF-8: {0}")]
    InvalidModelPath(std::path::PathBuf),

    /// whisper.cpp error
    #[error(transparent)]
    Whisper(#[from] whisper_rs::WhisperError),
}

/// Result type alias for murmur-asr operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// hound::Error → AudioError → Error
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        Error::Audio(AudioError::Hound(e))
    }
}

// std::io::Error → AudioError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Audio(AudioError::Io(e))
    }
}

// whisper_rs::WhisperError → EngineError → Error
impl From<whisper_rs::WhisperError> for Error {
    fn from(e: whisper_rs::WhisperError) -> Self {
        Error::Engine(EngineError::Whisper(e))
    }
}
