// src/services/backend.rs
use axum::http::StatusCode;
use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::message::HistoryMessage;

// The backend always retrieves this many chunks per question.
const TOP_K: u32 = 4;

/// Wire format of the RAG backend's `/chat` endpoint.
#[derive(Serialize)]
struct BackendChatRequest<'a> {
    prompt: &'a str,
    history: &'a [HistoryMessage],
    stream: bool,
    top_k: u32,
}

/// A successful backend reply, relayed to the caller as-is.
#[derive(Debug)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client for the external RAG backend.
pub struct BackendClient {
    http: reqwest::Client,
    chat_url: String,
    api_key: Option<String>,
}

impl BackendClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            chat_url: format!("{}/chat", config.backend_url),
            api_key: config.backend_api_key.clone(),
        })
    }

    /// Forward one prompt to the backend. Exactly one upstream call per
    /// invocation, non-streaming, bounded by the configured timeout.
    pub async fn ask(
        &self,
        prompt: &str,
        history: &[HistoryMessage],
    ) -> Result<BackendReply, AppError> {
        let payload = BackendChatRequest {
            prompt,
            history,
            stream: false,
            top_k: TOP_K,
        };

        let mut request = self.http.post(&self.chat_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!(url = %self.chat_url, "calling RAG backend");

        let response = request.send().await.map_err(map_transport_error)?;
        let status = relay_status(response.status());
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::warn!(%status, "backend rejected the request");
            return Err(AppError::BackendRejected {
                status,
                message: extract_error_message(&body),
            });
        }

        Ok(BackendReply { status, body })
    }
}

fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::BackendTimeout
    } else {
        AppError::BackendUnreachable(err.to_string())
    }
}

fn relay_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Best-effort unwrapping of an upstream error body: JSON objects commonly
/// carry the message under `error` or `detail`; anything else is relayed raw.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "detail"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    body.to_string()
}
