//! Ollama Provider - Implementation of LanguageModel for Ollama-style backends.
//!
//! Sends one non-streaming `/api/generate` request per prompt.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new("http://localhost:11434")
//!     .with_model("phi3:latest")
//!     .with_timeout(Duration::from_secs(90));
//!
//! let provider = OllamaProvider::new(config)?;
//! ```
//!
//! # Response shape
//!
//! Backends differ in which field carries the text. The first non-empty
//! string among `response`, `output` and `text` is used; failing that the
//! raw JSON body is returned as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::ports::{LanguageModel, LlmError};

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the backend (default: http://localhost:11434).
    pub base_url: String,
    /// Model to use (e.g., "phi3:latest").
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OllamaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: "phi3:latest".to_string(),
            timeout: Duration::from_secs(90),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Ollama `/api/generate` client.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a provider, failing if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Picks the reply text out of a generate response body.
pub fn reply_text(body: &Value) -> String {
    ["response", "output", "text"]
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl LanguageModel for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {}", e))
                } else {
                    LlmError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::parse(e.to_string()))?;

        Ok(reply_text(&body))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
