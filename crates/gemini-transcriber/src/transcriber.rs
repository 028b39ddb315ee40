use std::{fmt, path::Path, sync::Arc};

use base64::Engine as _;
use secrecy::SecretString;
use transcriber_config::{Config, DEFAULT_MODEL};
use url::Url;

use crate::{
    credential::{env_lookup, resolve_api_key},
    error::{Result, TranscriberError},
    format::SupportedFormat,
    provider::{ContentGenerator, gemini::GeminiProvider},
    types::{AudioPayload, TranscriptionRequest},
};

/// Transcribes local audio files through a [`ContentGenerator`]
///
/// Holds no mutable state, so one instance can serve concurrent calls.
pub struct Transcriber {
    api_key: SecretString,
    model: String,
    provider: Arc<dyn ContentGenerator>,
}

impl Transcriber {
    /// Create a Gemini-backed transcriber
    ///
    /// Without an explicit key, `GEMINI_API_KEY` is read from the environment.
    /// No network request is made here.
    pub fn new(api_key: Option<SecretString>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> TranscriberBuilder {
        TranscriberBuilder::new()
    }

    /// Create a transcriber from the `[gemini]` configuration section
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Self::builder()
            .api_key(config.gemini.api_key.clone())
            .model(config.gemini.model.clone());

        if let Some(base_url) = &config.gemini.base_url {
            builder = builder.base_url(base_url.clone());
        }

        builder.build()
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Transcribe one audio file following `prompt`
    ///
    /// Returns `Ok(None)` when the provider answers without any text.
    ///
    /// # Errors
    ///
    /// - [`TranscriberError::FileNotFound`] if `audio_path` does not exist
    /// - [`TranscriberError::UnsupportedFormat`] if its extension is not a supported container
    /// - [`TranscriberError::ReadFailed`] if the file cannot be read
    /// - [`TranscriberError::TranscriptionFailed`] if the provider call fails
    pub async fn transcribe(&self, audio_path: impl AsRef<Path>, prompt: &str) -> Result<Option<String>> {
        let path = audio_path.as_ref();

        if !path.exists() {
            return Err(TranscriberError::FileNotFound { path: path.to_owned() });
        }

        let format = SupportedFormat::from_path(path)
            .ok_or_else(|| TranscriberError::UnsupportedFormat { path: path.to_owned() })?;

        let bytes = tokio::fs::read(path).await.map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => TranscriberError::FileNotFound { path: path.to_owned() },
            _ => TranscriberError::ReadFailed {
                path: path.to_owned(),
                source,
            },
        })?;

        tracing::debug!(
            "Transcription request: {} bytes, media_type={}, model={}, provider={}",
            bytes.len(),
            format.media_type(),
            self.model,
            self.provider.name(),
        );

        let request = TranscriptionRequest {
            model: self.model.clone(),
            prompt: prompt.to_owned(),
            audio: AudioPayload {
                media_type: format.media_type(),
                data: base64::engine::general_purpose::STANDARD.encode(&bytes),
            },
        };

        let text = self
            .provider
            .generate(&request, &self.api_key)
            .await?
            .filter(|t| !t.is_empty());

        tracing::debug!(has_text = text.is_some(), "Transcription complete");

        Ok(text)
    }
}

impl fmt::Debug for Transcriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcriber")
            .field("api_key", &self.api_key)
            .field("model", &self.model)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Builder for [`Transcriber`]
pub struct TranscriberBuilder {
    api_key: Option<SecretString>,
    model: Option<String>,
    base_url: Option<Url>,
    provider: Option<Arc<dyn ContentGenerator>>,
    lookup: fn(&str) -> Option<String>,
}

impl TranscriberBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: None,
            base_url: None,
            provider: None,
            lookup: env_lookup,
        }
    }

    /// Explicit API key; takes precedence over the environment
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<Option<SecretString>>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Model identifier, defaults to `gemini-2.5-pro`
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Base URL for the default Gemini provider
    ///
    /// Ignored when a custom provider is supplied.
    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Replace the Gemini HTTP provider
    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn ContentGenerator>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the process-environment lookup used when no key is given
    #[must_use]
    pub fn env_lookup(mut self, lookup: fn(&str) -> Option<String>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Resolve the credential and assemble the transcriber
    pub fn build(self) -> Result<Transcriber> {
        let api_key = resolve_api_key(self.api_key, self.lookup)?;

        let provider = self
            .provider
            .unwrap_or_else(|| Arc::new(GeminiProvider::new(self.base_url.as_ref())));

        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        tracing::debug!(model = %model, provider = provider.name(), "transcriber initialized");

        Ok(Transcriber {
            api_key,
            model,
            provider,
        })
    }
}

impl Default for TranscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}
