// src/routes/mod.rs
pub mod chat;
pub mod contact;

use axum::{
    Json,
    Router,
    extract::State,
    routing::{get, post},
};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::metrics::MetricsData;
use crate::state::SharedState;

pub fn create_router(public_dir: &str) -> Router<SharedState> {
    let api = Router::new()
        .route("/contact", post(contact::create_contact))
        .route("/contacts", get(contact::list_contacts))
        .route("/chat", post(chat::chat_handler))
        .route("/metrics", get(get_metrics_handler));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.snapshot().await)
}
