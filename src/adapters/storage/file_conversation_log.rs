//! File-based Conversation Log Adapter
//!
//! Keeps the whole log as one pretty-printed JSON array. Every append is a
//! read-modify-write of the file, truncated to the newest `max_entries`,
//! written to a sibling temp file and renamed into place. A process-local
//! mutex serializes appends.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{ConversationLog, ConversationLogEntry, ConversationLogError};

#[derive(Debug)]
pub struct FileConversationLog {
    path: PathBuf,
    max_entries: usize,
    write_lock: Mutex<()>,
}

impl FileConversationLog {
    /// Create a log backed by `path`, keeping at most `max_entries`.
    ///
    /// The file is created on first append.
    pub fn new<P: AsRef<Path>>(path: P, max_entries: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_entries,
            write_lock: Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Reads all entries. A missing file is an empty log; an unreadable
    /// one is reported and treated as empty so new entries still land.
    async fn load(&self) -> Result<Vec<ConversationLogEntry>, ConversationLogError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ConversationLogError::Io(e.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Conversation log unreadable, starting fresh");
                Ok(Vec::new())
            }
        }
    }

    async fn store(&self, entries: &[ConversationLogEntry]) -> Result<(), ConversationLogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConversationLogError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ConversationLogError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| ConversationLogError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| ConversationLogError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ConversationLog for FileConversationLog {
    async fn append(&self, entry: ConversationLogEntry) -> Result<(), ConversationLogError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.push(entry);
        let overflow = entries.len().saturating_sub(self.max_entries);
        entries.drain(..overflow);

        self.store(&entries).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ConversationLogEntry>, ConversationLogError> {
        let entries = self.load().await?;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.into_iter().skip(skip).collect())
    }
}
