//! Core types for murmur-asr.

use serde::Serialize;
use std::fmt;

/// Whisper model size tier.
///
/// Each tier maps to a ggml model file on the `ggerganov/whisper.cpp`
/// Hugging Face repository. Larger tiers trade speed for accuracy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    /// Lowercase tier name as reported in the JSON result.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }

    /// ggml model file name for this tier.
    pub fn ggml_file(self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::Large => "ggml-large-v3.bin",
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text segment with timestamps.
///
/// Represents a portion of transcribed text with start and end times in seconds.
#[derive(Clone, Debug, Serialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Transcribed text
    pub text: String,
}

/// Engine output for one audio file.
#[derive(Clone, Debug)]
pub struct Transcription {
    /// Full transcript, trimmed
    pub text: String,
    /// Language code, detected or supplied
    pub language: String,
    /// Audio duration in seconds
    pub duration: f64,
    /// Time-aligned segments as produced by the engine
    pub segments: Vec<Segment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn tier_names_match_value_enum() {
        for size in ModelSize::value_variants() {
            let value = size.to_possible_value().unwrap();
            assert_eq!(value.get_name(), size.as_str());
        }
    }

    #[test]
    fn every_tier_has_a_ggml_file() {
        for size in ModelSize::value_variants() {
            let file = size.ggml_file();
            assert!(file.starts_with("ggml-"));
            assert!(file.ends_with(".bin"));
        }
    }
}
