//! Speech synthesis backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, require_non_empty, require_timeout, ValidationError};

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Voice identifier understood by the backend
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Audio container requested from the backend
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.base_url, "speech.base_url")?;
        require_non_empty(&self.voice, "speech.voice")?;
        require_non_empty(&self.format, "speech.format")?;
        require_timeout(self.timeout_secs, "speech.timeout_secs")?;
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            voice: default_voice(),
            format: default_format(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8880".to_string()
}

fn default_model() -> String {
    "kokoro".to_string()
}

fn default_voice() -> String {
    "af_bella".to_string()
}

fn default_format() -> String {
    "mp3".to_string()
}

fn default_timeout() -> u64 {
    60
}
