/// Audio bytes ready for transport
#[derive(Debug, Clone)]
pub struct AudioPayload {
    /// Media type label, e.g. `audio/ogg`
    pub media_type: &'static str,
    /// Standard base64 encoding of the file contents
    pub data: String,
}

/// One transcription call: a user turn holding the prompt, then the audio
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Model identifier, e.g. `gemini-2.5-pro`
    pub model: String,
    /// Instruction text, sent as the first part
    pub prompt: String,
    /// Inline audio, sent as the second part
    pub audio: AudioPayload,
}
