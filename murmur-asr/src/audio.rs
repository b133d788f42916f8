//! Audio loading and preprocessing utilities.

use crate::error::{AudioError, Result};
use hound::{SampleFormat, WavReader, WavSpec};
use std::path::Path;

/// Sample rate expected by the whisper engine (16kHz)
pub const SAMPLE_RATE: u32 = 16000;

/// Load audio from a WAV file.
///
/// Returns audio samples and WAV specification.
///
/// # Errors
///
/// Returns error if file cannot be read or has unsupported format.
pub fn load_audio<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<hound::Result<_>>()?,
        SampleFormat::Int => reader
            .samples::<i16>()
            .map(|s| s.map(|s| s as f32 / i16::MAX as f32))
            .collect::<hound::Result<_>>()?,
    };

    Ok((samples, spec))
}

/// Load audio from a WAV file as mono f32 samples at 16kHz.
///
/// Converts stereo to mono and resamples when the source rate differs.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - Decoded stream is empty
/// - Channel count is invalid (0 or > 2)
pub fn read_audio_mono(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let (mut audio, spec) = load_audio(path)?;

    if spec.channels == 0 || spec.channels > 2 {
        return Err(AudioError::InvalidChannels(spec.channels).into());
    }

    if audio.is_empty() {
        return Err(AudioError::Empty.into());
    }

    if spec.channels == 2 {
        audio = audio
            .chunks(2)
            .map(|chunk| chunk.iter().sum::<f32>() / 2.0)
            .collect();
    }

    if spec.sample_rate != SAMPLE_RATE {
        tracing::debug!(
            source_rate = spec.sample_rate,
            target_rate = SAMPLE_RATE,
            "resampling audio"
        );
        audio = resample(&audio, spec.sample_rate, SAMPLE_RATE);
    }

    Ok(audio)
}

/// Duration in seconds of a 16kHz mono sample buffer.
pub fn duration_secs(samples: &[f32]) -> f64 {
    samples.len() as f64 / SAMPLE_RATE as f64
}

/// Linear interpolation resampling.
fn resample(audio: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || audio.is_empty() {
        return audio.to_vec();
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let out_len = (audio.len() as f64 * ratio).ceil() as usize;

    (0..out_len)
        .map(|i| {
            let src = i as f64 / ratio;
            let i0 = src.floor() as usize;
            let i1 = (i0 + 1).min(audio.len() - 1);
            let frac = (src - i0 as f64) as f32;
            audio[i0] * (1.0 - frac) + audio[i1] * frac
        })
        .collect()
}
