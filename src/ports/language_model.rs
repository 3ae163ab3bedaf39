//! Language Model Port - text generation backend.
//!
//! The chat pipeline hands the composed prompt to this port and substitutes
//! a configured apology when it fails, so implementations should simply
//! report what went wrong.

use async_trait::async_trait;
use thiserror::Error;

/// Port for single-shot text generation.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generates a reply for a fully composed instruction string.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

/// Errors from the language-model backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LlmError {
    /// Could not reach the backend.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Backend answered with a non-success status.
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be understood.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl LlmError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
