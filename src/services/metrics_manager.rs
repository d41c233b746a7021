// src/services/metrics_manager.rs
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub prompts_handled: u64,
    pub rejected_requests: u64,
    pub upstream_failures: u64,
    pub timeouts: u64,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_prompt(&self) {
        self.inner.write().await.prompts_handled += 1;
    }

    pub async fn record_rejected(&self) {
        self.inner.write().await.rejected_requests += 1;
    }

    pub async fn record_upstream_failure(&self) {
        self.inner.write().await.upstream_failures += 1;
    }

    pub async fn record_timeout(&self) {
        self.inner.write().await.timeouts += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
