use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One raw line as kept by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Unique id of the entry in its dictionary
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw Ding line or article text
    pub text: String,
}

impl StoredEntry {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            text: text.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Storage backend behind every lookup
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// All entries whose text matches `pattern`, case-insensitively, in insertion order
    async fn find(&self, pattern: &str) -> Result<Vec<StoredEntry>, StoreError>;

    /// Persist `entries`, returning how many were saved
    async fn insert(&self, entries: Vec<StoredEntry>) -> Result<usize, StoreError>;

    /// Get dictionary metadata
    async fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}
