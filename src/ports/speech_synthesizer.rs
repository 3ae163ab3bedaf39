//! Speech Synthesizer Port - text-to-speech backend.
//!
//! Audio is returned as opaque bytes; callers encode it for transport
//! without interpreting it.

use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders text to encoded audio bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("speech backend returned status {status}")]
    Status { status: u16 },

    #[error("speech backend returned no audio")]
    EmptyAudio,
}
