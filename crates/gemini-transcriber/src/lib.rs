//! Audio transcription through Gemini multimodal models
//!
//! [`Transcriber`] validates a local audio file, sends it inline with a
//! prompt to a [`ContentGenerator`], and returns the transcript.

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

pub mod credential;
mod error;
pub mod format;
mod http_client;
pub mod provider;
mod transcriber;
mod types;

pub use credential::{API_KEY_ENV_VAR, resolve_api_key};
pub use error::{Result, TranscriberError};
pub use format::{SupportedFormat, is_valid_audio_file, media_type_for};
pub use provider::{ContentGenerator, ProviderError, gemini::GeminiProvider};
pub use transcriber::{Transcriber, TranscriberBuilder};
pub use types::{AudioPayload, TranscriptionRequest};
