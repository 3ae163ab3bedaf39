//! Speech Synthesis Adapters.
//!
//! - `HttpSpeechSynthesizer` - OpenAI-compatible speech endpoint (e.g. Kokoro)
//! - `MockSpeechSynthesizer` - Fixed audio for testing

mod http_speech_synthesizer;
mod mock_speech_synthesizer;

pub use http_speech_synthesizer::{HttpSpeechSynthesizer, HttpSpeechConfig};
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
