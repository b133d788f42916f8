//! Transcription run - fetch model, invoke the engine, emit the report.

use crate::config::Config;
use crate::report::Report;
use eyre::Result;
use murmur_asr::engine::{self, WhisperEngine};
use murmur_asr::types::Transcription;
use murmur_asr::{audio, hub};
use std::time::Instant;

/// Run one transcription and write the JSON report to the configured sink.
///
/// Transcription failures end up inside the report, not in the returned
/// `Result`; only sink IO can fail here.
pub fn execute(config: Config) -> Result<()> {
    let report = build_report(&config);

    report.write(config.output.as_deref())
}

/// Build the result document for this run.
///
/// A missing input file short-circuits before any model or engine access;
/// that branch carries no model name since none was selected.
fn build_report(config: &Config) -> Report {
    if !config.path.exists() {
        return Report::failure(
            format!("Audio file not found: {}", config.path.display()),
            None,
        );
    }

    Report::from_outcome(transcribe_file(config), config.model)
}

/// Perform the external engine call for an existing input file.
fn transcribe_file(config: &Config) -> murmur_asr::Result<Transcription> {
    let model_path = hub::fetch(config.model)?;

    let s = Instant::now();

    let engine = WhisperEngine::load(&model_path, config.model, engine::acceleration_available())?;

    let d = s.elapsed();
    tracing::info!(duration = %format_secs(d.as_secs_f32()), "model loaded");

    let samples = audio::read_audio_mono(&config.path)?;

    let s = Instant::now();

    let result = engine.transcribe(&samples, config.language.as_deref())?;

    let d = s.elapsed();
    tracing::info!(duration = %format_secs(d.as_secs_f32()), "inference completed");

    Ok(result)
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_asr::types::ModelSize;

    fn config(path: &str) -> Config {
        Config {
            path: path.into(),
            model: ModelSize::Base,
            language: None,
            output: None,
        }
    }

    #[test]
    fn missing_file_short_circuits_without_model() {
        let report = build_report(&config("/nonexistent/clip.wav"));

        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Audio file not found: /nonexistent/clip.wav")
        );
        assert!(report.model.is_none());
    }
}
