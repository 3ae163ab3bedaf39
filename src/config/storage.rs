//! Conversation log storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the conversation log
    #[serde(default = "default_memory_file")]
    pub memory_file: PathBuf,

    /// Entries kept after each append
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entries returned by a history request without a limit
    #[serde(default = "default_history_limit")]
    pub history_default_limit: usize,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.memory_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.memory_file"));
        }
        if self.max_entries == 0 {
            return Err(ValidationError::InvalidLimit("storage.max_entries"));
        }
        if self.history_default_limit == 0 {
            return Err(ValidationError::InvalidLimit("storage.history_default_limit"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            memory_file: default_memory_file(),
            max_entries: default_max_entries(),
            history_default_limit: default_history_limit(),
        }
    }
}

fn default_memory_file() -> PathBuf {
    PathBuf::from("aries_memory.json")
}

fn default_max_entries() -> usize {
    200
}

fn default_history_limit() -> usize {
    50
}
