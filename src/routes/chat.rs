// src/routes/chat.rs
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::message::ChatRequest;
use crate::services::answer::split_answer;
use crate::services::metrics_manager::MetricsData;
use crate::state::SharedState;

/// Relay one chat prompt to the RAG backend and mirror its reply.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let prompt = payload.prompt.trim();
    if prompt.is_empty() {
        state.metrics.record_rejected().await;
        return Err(AppError::BadRequest("prompt is required".to_string()));
    }

    tracing::info!(
        prompt_chars = prompt.len(),
        history_turns = payload.history.len(),
        "forwarding prompt to RAG backend"
    );

    let reply = match state.backend.ask(prompt, &payload.history).await {
        Ok(reply) => reply,
        Err(err) => {
            match &err {
                AppError::BackendTimeout => state.metrics.record_timeout().await,
                AppError::BackendUnreachable(_) | AppError::BackendRejected { .. } => {
                    state.metrics.record_upstream_failure().await
                }
                AppError::BadRequest(_) => {}
            }
            tracing::warn!(error = %err, "chat request failed");
            return Err(err);
        }
    };

    state.metrics.record_prompt().await;

    let sections = split_answer(&reply.body);
    tracing::debug!(
        answer_chars = sections.answer.len(),
        sources = sections.sources.len(),
        "backend reply received"
    );

    Ok((
        reply.status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        reply.body,
    )
        .into_response())
}

/// GET probe on the chat endpoint.
pub async fn chat_health_handler() -> &'static str {
    "chat endpoint OK"
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
