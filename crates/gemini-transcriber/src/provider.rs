pub mod gemini;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::types::TranscriptionRequest;

/// Capability that sends one multimodal generation request
///
/// Implementations must be safe to call concurrently from several tasks.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Provider name used in log output
    fn name(&self) -> &str;

    /// Send the request and return the generated text, if any
    ///
    /// `Ok(None)` means the provider answered without text.
    async fn generate(
        &self,
        request: &TranscriptionRequest,
        api_key: &SecretString,
    ) -> Result<Option<String>, ProviderError>;
}

/// Failures reported by a [`ContentGenerator`]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never reached the provider or the connection broke
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider rejected the API key
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The provider rejected the request body
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Quota or rate limit exceeded
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success status
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be understood
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Failure from a non-HTTP implementation
    #[error("{0}")]
    Other(String),
}
