//! Whisper engine wrapper around whisper.cpp via whisper-rs.

use crate::audio;
use crate::error::{EngineError, Result};
use crate::types::{ModelSize, Segment, Transcription};
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// A loaded whisper model ready for inference.
pub struct WhisperEngine {
    ctx: WhisperContext,
    size: ModelSize,
}

impl WhisperEngine {
    /// Load a ggml model file.
    ///
    /// `use_gpu` requests the accelerated backend; it is a no-op unless the
    /// crate was built with one of the acceleration features.
    pub fn load(model_path: &Path, size: ModelSize, use_gpu: bool) -> Result<Self> {
        let path_str = model_path
            .to_str()
            .ok_or_else(|| EngineError::InvalidModelPath(model_path.to_path_buf()))?;

        tracing::info!(path = %model_path.display(), %use_gpu, "loading model");

        let mut params = WhisperContextParameters::default();
        params.use_gpu(use_gpu);

        let ctx = WhisperContext::new_with_params(path_str, params)?;

        Ok(Self { ctx, size })
    }

    /// Model size tier this engine was loaded with.
    pub fn size(&self) -> ModelSize {
        self.size
    }

    /// Transcribe 16kHz mono f32 samples.
    ///
    /// `language` is a hint code like `en`; `None` lets the engine detect the
    /// spoken language.
    pub fn transcribe(&self, samples: &[f32], language: Option<&str>) -> Result<Transcription> {
        let mut state = self.ctx.create_state()?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(language.unwrap_or("auto")));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state.full(params, samples)?;

        let n_segments = state.full_n_segments();

        let mut text = String::new();
        let mut segments = Vec::new();

        for i in 0..n_segments {
            let Some(seg) = state.get_segment(i) else {
                continue;
            };

            let seg_text = seg.to_str_lossy()?;
            text.push_str(&seg_text);

            // Segment timestamps are in centiseconds
            segments.push(Segment {
                start: seg.start_timestamp() as f64 / 100.0,
                end: seg.end_timestamp() as f64 / 100.0,
                text: seg_text.trim().to_string(),
            });
        }

        let language = match language {
            Some(code) => code.to_string(),
            None => detected_language(&state),
        };

        Ok(Transcription {
            text: text.trim().to_string(),
            language,
            duration: audio::duration_secs(samples),
            segments,
        })
    }
}

/// Whether the crate was built with an acceleration backend.
pub fn acceleration_available() -> bool {
    cfg!(any(
        feature = "cuda",
        feature = "hipblas",
        feature = "metal",
        feature = "coreml",
        feature = "vulkan",
    ))
}

/// Language code detected during the last inference, or `auto` when the
/// engine does not report one.
fn detected_language(state: &whisper_rs::WhisperState) -> String {
    whisper_rs::get_lang_str(state.full_lang_id_from_state())
        .unwrap_or("auto")
        .to_string()
}
