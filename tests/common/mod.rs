// Shared test fixtures: a mock RAG backend bound to an ephemeral port that
// captures every request it receives, plus a Config pointing at it.
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::sync::Mutex;

use ragchat_backend::config::Config;

#[derive(Debug)]
pub struct CapturedCall {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(body: &str, delay: Duration) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay,
        }
    }
}

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<CapturedCall>>>,
    response: MockResponse,
}

pub struct MockBackend {
    pub base_url: String,
    pub calls: Arc<Mutex<Vec<CapturedCall>>>,
}

impl MockBackend {
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

async fn chat_endpoint(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.calls.lock().await.push(CapturedCall {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if state.response.delay > Duration::ZERO {
        tokio::time::sleep(state.response.delay).await;
    }

    (
        StatusCode::from_u16(state.response.status).unwrap(),
        state.response.body.clone(),
    )
}

pub async fn spawn_backend(response: MockResponse) -> MockBackend {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        calls: calls.clone(),
        response,
    };
    let app = Router::new()
        .route("/chat", post(chat_endpoint))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        calls,
    }
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        backend_url: backend_url.to_string(),
        backend_api_key: None,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        request_timeout: Duration::from_secs(5),
    }
}
