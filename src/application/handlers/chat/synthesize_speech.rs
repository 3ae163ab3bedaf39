//! SynthesizeSpeechHandler - Text-to-speech with base64 transport encoding.
//!
//! Speech is best-effort: a backend failure yields `None`, never an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use thiserror::Error;

use crate::ports::SpeechSynthesizer;

#[derive(Debug, Clone)]
pub struct SynthesizeSpeechCommand {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechRequestError {
    #[error("No text provided")]
    EmptyText,
}

pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Returns base64 audio, or `None` when synthesis failed.
    pub async fn handle(&self, cmd: SynthesizeSpeechCommand) -> Result<Option<String>, SpeechRequestError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(SpeechRequestError::EmptyText);
        }
        Ok(self.speak(text).await)
    }

    pub async fn speak(&self, text: &str) -> Option<String> {
        match self.synthesizer.synthesize(text).await {
            Ok(audio) => Some(STANDARD.encode(audio)),
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed");
                None
            }
        }
    }
}
