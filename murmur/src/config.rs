//! Configuration types for resolved CLI arguments.

use crate::cli::Cli;
use eyre::Result;
use murmur_asr::types::ModelSize;
use std::path::PathBuf;

/// Resolved configuration for one transcription run.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub model: ModelSize,
    pub language: Option<String>,
    pub output: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            path: cli.path,
            model: cli.model,
            language: cli.language,
            output: cli.output,
        })
    }
}
