use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use portfolio_backend::config::Config;
use portfolio_backend::routes;
use portfolio_backend::services::anthropic::AnthropicProvider;
use portfolio_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if config.chat.api_key.is_empty() {
        tracing::warn!("ANTHROPIC_API_KEY is not set; chat replies will fall back to the apology");
    }

    let assistant = Arc::new(AnthropicProvider::new(config.chat.clone()));
    let state = Arc::new(AppState::new(&config, assistant));

    // Expire idle chat sessions in the background.
    let transcripts = state.transcripts.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(60));
        loop {
            ticker.tick().await;
            let purged = transcripts.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "expired idle chat sessions");
            }
        }
    });

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.public_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("portfolio backend listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
