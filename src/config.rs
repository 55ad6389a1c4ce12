// src/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration, read once at startup. `.env` is honored via
/// dotenvy before this runs.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub public_dir: String,
    pub contacts_path: String,
    pub session_ttl: Duration,
    pub chat: ChatConfig,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            public_dir: env_or("PUBLIC_DIR", "public"),
            contacts_path: env_or("CONTACTS_PATH", "contacts.jsonl"),
            session_ttl: Duration::from_secs(parsed_env_or("SESSION_TTL_SECS", 1800u64)),
            chat: ChatConfig {
                api_key: env_or("ANTHROPIC_API_KEY", ""),
                base_url: env_or("ANTHROPIC_BASE_URL", "https://api.anthropic.com"),
                model: env_or("CHAT_MODEL", "claude-sonnet-4-20250514"),
                max_tokens: parsed_env_or("CHAT_MAX_TOKENS", 1000u32),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
