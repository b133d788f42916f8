//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;
use murmur_asr::types::ModelSize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "murmur")]
#[command(about = "Local speech-to-text transcription with JSON output")]
#[command(version)]
pub struct Cli {
    /// Path to input audio file
    pub path: PathBuf,

    /// Model size tier
    #[arg(short, long, value_enum, default_value_t = ModelSize::Base)]
    pub model: ModelSize,

    /// Language code hint (default: auto-detect)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output JSON path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::transcribe::execute(cli.try_into()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_with_defaults() {
        let cli = Cli::parse_from(["murmur", "audio.wav"]);

        assert_eq!(cli.path.to_str(), Some("audio.wav"));
        assert_eq!(cli.model, ModelSize::Base);
        assert_eq!(cli.language, None);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn parses_model_tier() {
        let cli = Cli::parse_from(["murmur", "audio.wav", "--model", "large"]);

        assert_eq!(cli.model, ModelSize::Large);
    }

    #[test]
    fn parses_language_and_output() {
        let cli = Cli::parse_from([
            "murmur",
            "audio.wav",
            "-l",
            "de",
            "-o",
            "/tmp/result.json",
        ]);

        assert_eq!(cli.language.as_deref(), Some("de"));
        assert_eq!(cli.output.as_deref().and_then(|p| p.to_str()), Some("/tmp/result.json"));
    }

    #[test]
    fn rejects_unknown_model_tier() {
        let result = Cli::try_parse_from(["murmur", "audio.wav", "--model", "huge"]);

        assert!(result.is_err());
    }

    #[test]
    fn requires_input_path() {
        let result = Cli::try_parse_from(["murmur"]);

        assert!(result.is_err());
    }
}
