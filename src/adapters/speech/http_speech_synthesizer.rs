//! HTTP Speech Synthesizer - OpenAI-compatible `/v1/audio/speech` client.
//!
//! Posts `{model, voice, input, format}` and returns the response body as
//! raw audio bytes.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::ports::{SpeechError, SpeechSynthesizer};

#[derive(Debug, Clone)]
pub struct HttpSpeechConfig {
    pub base_url: String,
    pub model: String,
    pub voice: String,
    pub format: String,
    pub timeout: Duration,
}

impl HttpSpeechConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: "kokoro".to_string(),
            voice: "af_bella".to_string(),
            format: "mp3".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpSpeechSynthesizer {
    config: HttpSpeechConfig,
    client: Client,
}

impl HttpSpeechSynthesizer {
    pub fn new(config: HttpSpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn speech_url(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url.trim_end_matches('/'))
    }

    fn request<'a>(&'a self, text: &'a str) -> SpeechRequest<'a> {
        SpeechRequest {
            model: &self.config.model,
            voice: &self.config.voice,
            input: text,
            format: &self.config.format,
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    format: &'a str,
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .post(self.speech_url())
            .json(&self.request(text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    SpeechError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status {
                status: status.as_u16(),
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_voice_settings() {
        let synth = HttpSpeechSynthesizer::new(
            HttpSpeechConfig::new("http://tts:8880/").with_voice("am_adam"),
        )
        .unwrap();

        let body = serde_json::to_value(synth.request("Stay calm")).unwrap();

        assert_eq!(
            body,
            json!({"model": "kokoro", "voice": "am_adam", "input": "Stay calm", "format": "mp3"})
        );
        assert_eq!(synth.speech_url(), "http://tts:8880/v1/audio/speech");
    }
}
