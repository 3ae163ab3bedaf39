//! Mock Speech Synthesizer for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{SpeechError, SpeechSynthesizer};

/// Returns fixed audio (or a fixed failure) and records every input.
#[derive(Debug, Clone)]
pub struct MockSpeechSynthesizer {
    outcome: Result<Vec<u8>, SpeechError>,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpeechSynthesizer {
    pub fn new() -> Self {
        Self::with_audio(b"mock-audio".to_vec())
    }

    pub fn with_audio(audio: Vec<u8>) -> Self {
        Self {
            outcome: Ok(audio),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: SpeechError) -> Self {
        Self {
            outcome: Err(error),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        self.inputs.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}
