// src/services/metrics.rs
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub contact_submissions: u64,
    pub chat_requests: u64,
    pub chat_failures: u64,
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

    pub async fn record_contact(&self) {
        self.inner.write().await.contact_submissions += 1;
    }

    pub async fn record_chat(&self) {
        self.inner.write().await.chat_requests += 1;
    }

    pub async fn record_chat_failure(&self) {
        self.inner.write().await.chat_failures += 1;
    }

    pub async fn snapshot(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
