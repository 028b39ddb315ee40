use std::path::PathBuf;

use thiserror::Error;

use crate::provider::ProviderError;

pub type Result<T, E = TranscriberError> = std::result::Result<T, E>;

/// Errors returned by [`crate::Transcriber`]
#[derive(Debug, Error)]
pub enum TranscriberError {
    /// No API key was given and the environment variable is unset
    #[error("{env_var} not provided and not in environment")]
    MissingCredential { env_var: &'static str },

    /// The audio path does not exist
    #[error("audio file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file extension is not a supported audio container
    #[error("unsupported audio format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read audio file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The provider call failed
    #[error("error transcribing audio: {0}")]
    TranscriptionFailed(#[from] ProviderError),
}

impl TranscriberError {
    /// Whether the caller can fix this by changing its input
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::FileNotFound { .. } | Self::UnsupportedFormat { .. }
        )
    }
}
