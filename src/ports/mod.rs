//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! Every port reports failure through its own error type; the application
//! layer decides per stage whether a failure degrades or aborts.
//!
//! - `LanguageModel` - Reply generation
//! - `SpeechSynthesizer` - Text-to-speech
//! - `PoiSource` - Nearby hospitals, clinics and pharmacies
//! - `PriceSource` - Retail medicine listings
//! - `ConversationLog` - Append-only exchange history

mod conversation_log;
mod language_model;
mod poi_source;
mod price_source;
mod speech_synthesizer;

pub use conversation_log::{ConversationLog, ConversationLogEntry, ConversationLogError};
pub use language_model::{LanguageModel, LlmError};
pub use poi_source::{AmenityQuery, Bounds, ElementKind, LatLon, PoiElement, PoiError, PoiSource};
pub use price_source::{PriceSource, PriceSourceError};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
