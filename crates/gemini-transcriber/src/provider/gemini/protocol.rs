//! Gemini `generateContent` wire format, limited to what transcription uses

use serde::{Deserialize, Serialize};

use crate::types::TranscriptionRequest;

// -- Request types --

/// `generateContent` request body
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

/// One conversation turn
#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

/// Part of an outgoing turn
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part<'a> {
    Text(&'a str),
    InlineData(InlineData<'a>),
}

/// Inline binary data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData<'a> {
    pub mime_type: &'a str,
    /// Base64-encoded bytes
    pub data: &'a str,
}

impl<'a> From<&'a TranscriptionRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a TranscriptionRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text(&request.prompt),
                    Part::InlineData(InlineData {
                        mime_type: request.audio.media_type,
                        data: &request.audio.data,
                    }),
                ],
            }],
        }
    }
}

// -- Response types --

/// `generateContent` response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    ///
    /// Returns `None` when there is no candidate or the text is empty.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();

        (!text.is_empty()).then_some(text)
    }

    /// Reason the prompt was blocked, if the provider declined it
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

/// Generated candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Absent when generation stopped before producing output
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Candidate content
#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// Part of a response turn; only text is read
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Why a prompt was refused
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

// -- Error response --

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default)]
    pub status: String,
}
