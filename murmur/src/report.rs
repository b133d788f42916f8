//! The JSON result document emitted by every run.

use eyre::{Context, Result};
use murmur_asr::types::{ModelSize, Segment, Transcription};
use serde::Serialize;
use std::path::Path;

/// Tagged success/failure document for one invocation.
///
/// Serialized as pretty JSON with 2-space indentation. Optional fields are
/// omitted, never null; the file-not-found path carries no `model` since no
/// model was selected.
#[derive(Debug, Serialize)]
pub struct Report {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Report {
    pub fn success(transcription: Transcription, model: ModelSize) -> Self {
        Self {
            success: true,
            transcript: Some(transcription.text),
            language: Some(transcription.language),
            duration: Some(transcription.duration),
            segments: Some(transcription.segments),
            error: None,
            model: Some(model.as_str().to_string()),
        }
    }

    pub fn failure(message: impl Into<String>, model: Option<ModelSize>) -> Self {
        Self {
            success: false,
            transcript: None,
            language: None,
            duration: None,
            segments: None,
            error: Some(message.into()),
            model: model.map(|m| m.as_str().to_string()),
        }
    }

    /// The error-to-result mapping boundary: any failure from the
    /// transcription layer becomes a failure document carrying the requested
    /// model name.
    pub fn from_outcome(outcome: murmur_asr::Result<Transcription>, model: ModelSize) -> Self {
        match outcome {
            Ok(transcription) => Self::success(transcription, model),
            Err(e) => Self::failure(e.to_string(), Some(model)),
        }
    }

    /// Serialize as pretty JSON (2-space indentation).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize report")
    }

    /// Write the document to a file, or to stdout when no path is given.
    pub fn write(&self, output: Option<&Path>) -> Result<()> {
        let json = self.to_json()?;

        match output {
            Some(path) => {
                tracing::info!(path = %path.display(), "write json report");
                std::fs::write(path, &json)
                    .wrap_err_with(|| format!("failed to write report: {}", path.display()))?;
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}

/// Startup diagnostic emitted when the required capability is missing.
pub fn dependency_error_json(message: &str) -> String {
    let doc = serde_json::json!({ "error": message });

    // json! values with string keys cannot fail to pretty-print
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| format!("{{\"error\": {message:?}}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_asr::error::{AudioError, Error};

    #[test]
    fn failure_without_model_omits_model_key() {
        let report = Report::failure("Audio file not found: missing.wav", None);

        let json = report.to_json().unwrap();

        assert_eq!(
            json,
            "{\n  \"success\": false,\n  \"error\": \"Audio file not found: missing.wav\"\n}"
        );
    }

    #[test]
    fn failure_with_model_carries_requested_tier() {
        let report = Report::failure("M", Some(ModelSize::Small));

        let json = report.to_json().unwrap();

        assert_eq!(
            json,
            "{\n  \"success\": false,\n  \"error\": \"M\",\n  \"model\": \"small\"\n}"
        );
    }

    #[test]
    fn engine_failure_maps_to_failure_document() {
        let outcome: murmur_asr::Result<Transcription> =
            Err(Error::Audio(AudioError::Empty));

        let report = Report::from_outcome(outcome, ModelSize::Base);

        assert!(!report.success);
        assert_eq!(report.error.as_deref(), Some("audio stream is empty"));
        assert_eq!(report.model.as_deref(), Some("base"));
        assert!(report.transcript.is_none());
    }

    #[test]
    fn success_document_has_expected_fields() {
        let transcription = Transcription {
            text: "hello world".to_string(),
            language: "en".to_string(),
            duration: 1.5,
            segments: vec![Segment {
                start: 0.0,
                end: 1.5,
                text: "hello world".to_string(),
            }],
        };

        let report = Report::success(transcription, ModelSize::Tiny);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["transcript"], "hello world");
        assert_eq!(value["language"], "en");
        assert_eq!(value["duration"], 1.5);
        assert_eq!(value["segments"][0]["text"], "hello world");
        assert_eq!(value["model"], "tiny");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn json_uses_two_space_indentation() {
        let report = Report::failure("x", Some(ModelSize::Base));

        let json = report.to_json().unwrap();

        assert!(json.starts_with("{\n  \"success\""));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn dependency_error_is_valid_json() {
        let json = dependency_error_json("model hub unavailable: no cache dir");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "model hub unavailable: no cache dir");
        assert!(json.starts_with("{\n  \"error\""));
    }
}
