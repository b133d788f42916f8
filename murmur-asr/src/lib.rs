//! murmur-asr: thin transcription layer over whisper.cpp.
//!
//! Everything hard lives in the wrapped engine (acoustic modeling, decoding,
//! language detection). This crate only covers the plumbing around it:
//!
//! - [`audio`]: WAV loading, downmix, and resampling to 16kHz
//! - [`hub`]: model artifact resolution via the Hugging Face hub
//! - [`engine`]: the whisper.cpp wrapper producing a [`types::Transcription`]
//!
//! # Quick Start
//!
//! ```ignore
//! use murmur_asr::engine::WhisperEngine;
//! use murmur_asr::types::ModelSize;
//!
//! let samples = murmur_asr::audio::read_audio_mono("audio.wav")?;
//! let model_path = murmur_asr::hub::fetch(ModelSize::Base)?;
//! let engine = WhisperEngine::load(&model_path, ModelSize::Base, false)?;
//! let result = engine.transcribe(&samples, None)?;
//! println!("{}", result.text);
//! ```

pub mod audio;
pub mod engine;
pub mod error;
pub mod hub;
pub mod types;

pub use error::{Error, Result};
