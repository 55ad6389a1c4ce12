// src/client.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from [`ContactClient::submit`]. Each carries one human-readable
/// message; the caller's only job is to show it.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("unable to reach the server; is the backend running?")]
    Unreachable,

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Server(String),

    /// A 2xx response whose body was not valid JSON.
    #[error("malformed response body: {0}")]
    Body(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// Contact submission client: one JSON POST per call, no retries, no
/// timeout beyond the transport defaults.
#[derive(Clone, Debug)]
pub struct ContactClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactClient {
    /// The base URL is normalized once; any trailing slashes are dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `PORTFOLIO_API_URL`, defaulting to the local
    /// development server.
    pub fn from_env() -> Self {
        let base = std::env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self::new(&base)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/v1/contact", self.base_url)
    }

    /// Submit a contact form and return the parsed response body.
    ///
    /// A non-2xx status is reported with the `detail` field of the error
    /// body when present, then the `message` field, then a generic
    /// `server error <status>` string.
    pub async fn submit<T: Serialize + ?Sized>(
        &self,
        form: &T,
    ) -> Result<serde_json::Value, SubmitError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(form)
            .send()
            .await
            .map_err(|_| SubmitError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let msg = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .detail
                    .or(body.message)
                    .unwrap_or_else(|| format!("server error {}", status.as_u16())),
                Err(_) => format!("server error {}", status.as_u16()),
            };
            return Err(SubmitError::Server(msg));
        }

        response
            .json()
            .await
            .map_err(|e| SubmitError::Body(e.to_string()))
    }
}
