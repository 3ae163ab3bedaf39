//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `geo` - Overpass point-of-interest lookup
//! - `http` - Axum REST API
//! - `llm` - Ollama text generation
//! - `pricing` - Retail search page scraping
//! - `speech` - OpenAI-compatible text to speech
//! - `storage` - Conversation log persistence
//!
//! Each external adapter ships with an in-process double for tests.

pub mod geo;
pub mod http;
pub mod llm;
pub mod pricing;
pub mod speech;
pub mod storage;

pub use geo::{OverpassConfig, OverpassSource, StaticPoiSource};
pub use http::{build_router, AssistantAppState, AssistantPorts};
pub use llm::{MockLanguageModel, OllamaConfig, OllamaProvider};
pub use pricing::{MarkupPriceSource, MarkupSourceConfig, StaticPriceSource};
pub use speech::{HttpSpeechConfig, HttpSpeechSynthesizer, MockSpeechSynthesizer};
pub use storage::{FileConversationLog, InMemoryConversationLog};
