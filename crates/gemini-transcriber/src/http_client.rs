use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client reused by every provider instance
///
/// No request timeout is set; callers wrap `transcribe` if they need one.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "falling back to default HTTP client");
                    Client::new()
                })
        })
        .clone()
}
