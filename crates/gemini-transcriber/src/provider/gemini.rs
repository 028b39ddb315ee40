//! Gemini REST provider (`models/{model}:generateContent`)

mod protocol;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use self::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use super::{ContentGenerator, ProviderError};
use crate::{http_client::http_client, types::TranscriptionRequest};

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key, so it never appears in request URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sends transcription requests to the Gemini API over HTTPS
pub struct GeminiProvider {
    client: Client,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider; `None` uses [`DEFAULT_BASE_URL`]
    pub fn new(base_url: Option<&Url>) -> Self {
        let base_url = base_url
            .map_or(DEFAULT_BASE_URL, Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            client: http_client(),
            base_url,
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl ContentGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &TranscriptionRequest,
        api_key: &SecretString,
    ) -> Result<Option<String>, ProviderError> {
        let url = self.generate_url(&request.model);
        let body = GenerateContentRequest::from(request);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                ProviderError::Connection(e.without_url().to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read error body: {}", e.without_url()));
            let message = error_message(&body);

            tracing::error!("Gemini API error ({status}): {message}");

            return Err(map_status(status, message));
        }

        let result: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse Gemini response");
            ProviderError::InvalidResponse(e.without_url().to_string())
        })?;

        if let Some(reason) = result.block_reason() {
            tracing::debug!(reason, "Gemini declined the prompt");
        }

        if let Some(reason) = result.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            tracing::debug!(finish_reason = reason, "Gemini generation finished");
        }

        Ok(result.text())
    }
}

/// Pull the human-readable message out of a Google error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if parsed.error.status.is_empty() => parsed.error.message,
        Ok(parsed) => format!("{} ({})", parsed.error.message, parsed.error.status),
        Err(_) if body.trim().is_empty() => "Unknown error".to_owned(),
        Err(_) => body.trim().to_owned(),
    }
}

fn map_status(status: StatusCode, message: String) -> ProviderError {
    match status.as_u16() {
        401 | 403 => ProviderError::AuthenticationFailed(message),
        400 => ProviderError::InvalidRequest(message),
        429 => ProviderError::RateLimited(message),
        code => ProviderError::Api { status: code, message },
    }
}
