//! Mock Language Model for testing.
//!
//! Replies are consumed in order; once exhausted a fixed default is
//! returned. Every prompt is recorded so tests can assert on what was sent,
//! or that nothing was sent at all.
//!
//! ```ignore
//! let model = MockLanguageModel::new()
//!     .with_reply("Take a deep breath.")
//!     .with_error(LlmError::Timeout { timeout_secs: 90 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{LanguageModel, LlmError};

#[derive(Debug, Clone, Default)]
pub struct MockLanguageModel {
    replies: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful reply to the queue.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Adds a failure to the queue.
    pub fn with_error(self, error: LlmError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of prompts received.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Returns all recorded prompts.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock reply".to_string()))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
