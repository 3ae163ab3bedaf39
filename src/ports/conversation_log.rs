//! Conversation Log Port - append-only record of chat exchanges.
//!
//! # Concurrency
//!
//! Implementations must serialize `append` calls: each append is a
//! read-modify-write-truncate of the whole log, and two overlapping appends
//! must not lose either entry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::triage::UrgencyState;

/// One persisted exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationLogEntry {
    pub ts: DateTime<Utc>,
    pub input: String,
    pub output: String,
    pub state: UrgencyState,
    pub confidence: f64,
}

impl ConversationLogEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(
        input: impl Into<String>,
        output: impl Into<String>,
        state: UrgencyState,
        confidence: f64,
    ) -> Self {
        Self {
            ts: Utc::now(),
            input: input.into(),
            output: output.into(),
            state,
            confidence,
        }
    }
}

#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Appends one entry, dropping the oldest beyond the store's cap.
    async fn append(&self, entry: ConversationLogEntry) -> Result<(), ConversationLogError>;

    /// Most recent `limit` entries, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ConversationLogEntry>, ConversationLogError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversationLogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize log: {0}")]
    Serialization(String),
}
