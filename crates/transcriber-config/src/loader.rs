use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus file access
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the model or prompt is blank, or an explicit API
    /// key is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gemini.model.trim().is_empty() {
            anyhow::bail!("gemini.model must not be empty");
        }

        if let Some(ref key) = self.gemini.api_key
            && key.expose_secret().is_empty()
        {
            anyhow::bail!("gemini.api_key must not be empty when set; omit it to use GEMINI_API_KEY");
        }

        if self.transcription.prompt.trim().is_empty() {
            anyhow::bail!("transcription.prompt must not be empty");
        }

        Ok(())
    }
}
