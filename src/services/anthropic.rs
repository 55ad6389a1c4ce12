// src/services/anthropic.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::assistant::{ChatError, ChatProvider, SYSTEM_PROMPT};
use super::transcript::{ChatRole, Turn};
use crate::config::ChatConfig;

/// `POST /v1/messages` client. The key stays server-side; the base URL is
/// configurable so tests can point it at a local stub.
pub struct AnthropicProvider {
    client: Client,
    config: ChatConfig,
}

impl AnthropicProvider {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn send_chat(&self, transcript: &[Turn]) -> Result<String, ChatError> {
        let messages = transcript
            .iter()
            .map(|turn| WireMessage {
                role: match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "assistant",
                },
                content: &turn.content,
            })
            .collect();

        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: SYSTEM_PROMPT,
            messages,
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api { status, body });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        let reply = parsed
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(reply)
    }
}
