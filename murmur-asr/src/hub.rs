//! Model artifact resolution via the Hugging Face hub.

use crate::error::{HubError, Result};
use crate::types::ModelSize;
use hf_hub::api::sync::Api;
use std::path::PathBuf;

const MODEL_REPO: &str = "ggerganov/whisper.cpp";

/// Probe the model hub client at startup.
///
/// Construction fails when no cache directory can be resolved or the HTTP
/// client cannot be set up. Nothing useful can run without it, so the CLI
/// checks this before doing anything else.
pub fn probe() -> std::result::Result<(), HubError> {
    Api::new().map(drop).map_err(HubError::Unavailable)
}

/// Fetch the ggml model file for a size tier.
///
/// Resolves from the local hub cache when present, otherwise downloads.
/// Returns the path to the cached model file.
pub fn fetch(size: ModelSize) -> Result<PathBuf> {
    let file = size.ggml_file();

    tracing::info!(model = %size, %file, "locating model");

    let api = Api::new().map_err(HubError::Unavailable)?;
    let repo = api.model(MODEL_REPO.to_string());

    repo.get(file)
        .map_err(|source| {
            HubError::Fetch {
                name: file.to_string(),
                source,
            }
            .into()
        })
}
