#![allow(clippy::must_use_candidate)]

mod env;
pub mod gemini;
mod loader;
pub mod telemetry;
pub mod transcription;

use serde::Deserialize;

pub use gemini::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use transcription::*;

/// Top-level transcriber configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gemini provider settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Transcription behaviour
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    /// Logging setup
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
