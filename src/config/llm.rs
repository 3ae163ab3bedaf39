//! Language model backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, require_non_empty, require_timeout, ValidationError};

/// Reply used whenever the backend fails.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the generate endpoint's host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Reply substituted when generation fails
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.base_url, "llm.base_url")?;
        require_non_empty(&self.model, "llm.model")?;
        require_timeout(self.timeout_secs, "llm.timeout_secs")?;
        require_non_empty(&self.fallback_reply, "llm.fallback_reply")?;
        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            fallback_reply: default_fallback_reply(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "phi3:latest".to_string()
}

fn default_timeout() -> u64 {
    90
}

fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.to_string()
}
