use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Gemini provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. Falls back to `GEMINI_API_KEY` when absent
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Model identifier passed to `generateContent`
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override for proxies and test servers
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
