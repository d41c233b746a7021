// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// Outbound calls to the RAG backend are cut off after this long.
const BACKEND_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub backend_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// `BACKEND_URL`: base URL of the RAG backend (default `http://localhost:8000`).
    /// `BACKEND_API_KEY`: optional bearer token forwarded upstream.
    /// `BIND_ADDR`: listen address (default `0.0.0.0:3000`).
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = match env::var("BACKEND_URL") {
            Ok(raw) => {
                let url = normalize_url(&raw);
                if url.is_empty() {
                    DEFAULT_BACKEND_URL.to_string()
                } else {
                    url
                }
            }
            Err(_) => DEFAULT_BACKEND_URL.to_string(),
        };

        let backend_api_key = env::var("BACKEND_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        Ok(Self {
            backend_url,
            backend_api_key,
            bind_addr,
            request_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
        })
    }
}

/// Clean up a user-supplied base URL: drop any `#fragment`, trim whitespace
/// and trailing slashes. Returns an empty string for empty input.
pub fn normalize_url(raw: &str) -> String {
    raw.split('#')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches('/')
        .to_string()
}
