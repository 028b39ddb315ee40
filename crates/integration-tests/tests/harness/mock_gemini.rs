//! Mock Gemini backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent` with a canned reply
//! and records what it received

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Clone)]
pub enum MockReply {
    /// A single candidate with one text part
    Text(String),
    /// Any JSON body with status 200
    Json(serde_json::Value),
    /// A non-success status with a raw body
    Status(u16, String),
}

/// Request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

/// Mock Gemini backend bound to an ephemeral local port
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    reply: MockReply,
    request_count: AtomicU32,
    last_request: Mutex<Option<RecordedRequest>>,
}

impl MockGemini {
    /// Start a mock that returns `text` for every request
    pub async fn start_with_text(text: &str) -> anyhow::Result<Self> {
        Self::start(MockReply::Text(text.to_owned())).await
    }

    /// Start a mock with an arbitrary reply
    pub async fn start(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            reply,
            request_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1beta/models/{*action}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure the provider with
    pub fn base_url(&self) -> url::Url {
        url::Url::parse(&format!("http://{}/v1beta", self.addr)).expect("mock address is a valid URL")
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockGeminiState>>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Some(model) = action.strip_suffix(":generateContent") else {
        return (StatusCode::NOT_FOUND, "unknown action").into_response();
    };

    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(RecordedRequest {
        model: model.to_owned(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    });

    match &state.reply {
        MockReply::Text(text) => Json(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 4, "totalTokenCount": 14 }
        }))
        .into_response(),
        MockReply::Json(value) => Json(value.clone()).into_response(),
        MockReply::Status(code, raw) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            raw.clone(),
        )
            .into_response(),
    }
}
