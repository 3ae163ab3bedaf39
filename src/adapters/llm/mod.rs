//! Language Model Adapters.
//!
//! - `OllamaProvider` - Ollama-style `/api/generate` backend
//! - `MockLanguageModel` - Configurable mock for testing

mod mock_language_model;
mod ollama_provider;

pub use mock_language_model::MockLanguageModel;
pub use ollama_provider::{reply_text, OllamaConfig, OllamaProvider};
