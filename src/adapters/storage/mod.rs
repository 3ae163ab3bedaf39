//! Storage Adapters
//!
//! Implementations of the ConversationLog port.
//!
//! ## Available Adapters
//!
//! - **FileConversationLog** - JSON array on disk, truncated on every append
//! - **InMemoryConversationLog** - Process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileConversationLog, InMemoryConversationLog};
//!
//! // Production: file-based log
//! let log = FileConversationLog::new("aries_memory.json", 200);
//!
//! // Testing: in-memory log
//! let log = InMemoryConversationLog::new(200);
//! ```

mod file_conversation_log;
mod in_memory_conversation_log;

pub use file_conversation_log::FileConversationLog;
pub use in_memory_conversation_log::InMemoryConversationLog;
