//! GetConversationHistoryHandler - Recent exchanges from the conversation log.

use std::sync::Arc;

use crate::ports::{ConversationLog, ConversationLogEntry};

#[derive(Debug, Clone, Default)]
pub struct GetConversationHistoryQuery {
    pub limit: Option<usize>,
}

pub struct GetConversationHistoryHandler {
    log: Arc<dyn ConversationLog>,
    default_limit: usize,
}

impl GetConversationHistoryHandler {
    pub fn new(log: Arc<dyn ConversationLog>, default_limit: usize) -> Self {
        Self { log, default_limit }
    }

    /// Oldest first. An unreadable log reads as empty.
    pub async fn handle(&self, query: GetConversationHistoryQuery) -> Vec<ConversationLogEntry> {
        let limit = query.limit.unwrap_or(self.default_limit);
        match self.log.recent(limit).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read conversation log");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationLog;
    use crate::domain::triage::UrgencyState;

    #[tokio::test]
    async fn applies_default_and_explicit_limits() {
        let log = InMemoryConversationLog::new(200);
        for i in 0..5 {
            log.append(ConversationLogEntry::now(
                format!("msg {}", i),
                "ok",
                UrgencyState::Casual,
                0.3,
            ))
            .await
            .unwrap();
        }
        let handler = GetConversationHistoryHandler::new(Arc::new(log), 3);

        let default = handler.handle(GetConversationHistoryQuery::default()).await;
        let explicit = handler
            .handle(GetConversationHistoryQuery { limit: Some(1) })
            .await;

        assert_eq!(default.len(), 3);
        assert_eq!(default[0].input, "msg 2");
        assert_eq!(explicit.len(), 1);
        assert_eq!(explicit[0].input, "msg 4");
    }
}
