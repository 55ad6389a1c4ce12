// src/services/assistant.rs
use async_trait::async_trait;
use thiserror::Error;

use super::transcript::Turn;

/// Stock reply appended whenever the upstream call fails. The widget never
/// sees a raw error.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// System prompt sent with every chat request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for a portfolio website. \
Answer questions about the portfolio owner's skills, projects, and experience in a \
friendly and professional manner.\n\n\
Portfolio Information:\n\
- Skills: React, JavaScript, TypeScript, Node.js, Python, UI/UX Design, Web Development\n\
- Projects: E-commerce platform, Task management app, Weather dashboard, Portfolio website\n\
- Experience: 3+ years in full-stack development\n\
- Education: Computer Science degree\n\n\
Keep responses concise and engaging. If asked about specific projects, provide brief \
descriptions and highlight the technologies used.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),

    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// The chat capability behind the widget. Implementations own the upstream
/// call; the handlers only see a transcript in and a reply out.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Turn a full conversation transcript into the next assistant reply.
    async fn send_chat(&self, transcript: &[Turn]) -> Result<String, ChatError>;
}
