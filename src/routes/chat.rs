// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{assistant::FALLBACK_REPLY, transcript::ChatRole},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session_id = match &payload.session_id {
        Some(s) if !s.trim().is_empty() => state.transcripts.ensure_session(s).await,
        _ => state.transcripts.create_session().await,
    };

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("message cannot be empty".to_string()));
    }

    state.transcripts.append(&session_id, ChatRole::User, trimmed).await;
    state.metrics.record_chat().await;

    let transcript = state
        .transcripts
        .history(&session_id)
        .await
        .unwrap_or_default();

    // The widget never sees provider errors; it gets the stock apology.
    let reply = match state.assistant.send_chat(&transcript).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, session_id = %session_id, "chat provider call failed");
            state.metrics.record_chat_failure().await;
            FALLBACK_REPLY.to_string()
        }
    };

    state
        .transcripts
        .append(&session_id, ChatRole::Assistant, &reply)
        .await;

    Ok(Json(ChatResponse { session_id, reply }))
}
