//! In-memory Conversation Log Adapter
//!
//! For tests and for running without a writable disk.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ConversationLog, ConversationLogEntry, ConversationLogError};

#[derive(Debug, Clone)]
pub struct InMemoryConversationLog {
    entries: Arc<RwLock<Vec<ConversationLogEntry>>>,
    max_entries: usize,
}

impl Default for InMemoryConversationLog {
    fn default() -> Self {
        Self::new(200)
    }
}

impl InMemoryConversationLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            max_entries,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn append(&self, entry: ConversationLogEntry) -> Result<(), ConversationLogError> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        let overflow = entries.len().saturating_sub(self.max_entries);
        entries.drain(..overflow);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ConversationLogEntry>, ConversationLogError> {
        let entries = self.entries.read().await;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries[skip..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::UrgencyState;

    #[tokio::test]
    async fn keeps_newest_entries() {
        let log = InMemoryConversationLog::new(2);
        for input in ["a", "b", "c"] {
            log.append(ConversationLogEntry::now(input, "ok", UrgencyState::Casual, 0.3))
                .await
                .unwrap();
        }

        let recent = log.recent(10).await.unwrap();

        assert_eq!(log.len().await, 2);
        assert_eq!(recent[0].input, "b");
        assert_eq!(recent[1].input, "c");
    }
}
