use serde::Deserialize;

/// Instruction sent alongside every diary recording unless overridden
pub const DEFAULT_PROMPT: &str = "This is an audio diary recording in Bengali. \
    Hindi or English words may be used. \
    Transcribe this into English romanized fonts. \
    Only output the transcription and nothing else.";

/// Transcription behaviour
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// Natural-language instruction describing the desired transcript
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
