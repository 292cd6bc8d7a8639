use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dxt_core::dictionary::{Dictionary, DictionaryMetadata, StoredEntry};
use dxt_core::error::StoreError;
use regex::RegexBuilder;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Ding line store.
///
/// Entries live in memory and, when opened from a path, are mirrored to a
/// JSON-lines file: one entry per line, appended on every insert.
pub struct DingStore {
    name: String,
    path: Option<PathBuf>,
    entries: RwLock<Vec<StoredEntry>>,
}

impl DingStore {
    /// Store that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self {
            name: "memory".to_string(),
            path: None,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Open the store file at `path`, loading whatever it already holds.
    /// The file is created on the first insert.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if tokio::fs::try_exists(&path).await? {
            let content = tokio::fs::read_to_string(&path).await?;
            parse_records(&content)?
        } else {
            Vec::new()
        };

        tracing::info!("Opened store {} with {} entries", path.display(), entries.len());

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ding".to_string());

        Ok(Self {
            name,
            path: Some(path),
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

fn parse_records(content: &str) -> Result<Vec<StoredEntry>, StoreError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::Corrupt {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

#[async_trait]
impl Dictionary for DingStore {
    async fn find(&self, pattern: &str) -> Result<Vec<StoredEntry>, StoreError> {
        let matcher = RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(true)
            .build()?;

        let entries = self.entries.read().await;
        let found: Vec<StoredEntry> = entries
            .iter()
            .filter(|entry| matcher.is_match(&entry.text))
            .cloned()
            .collect();

        tracing::debug!("Store '{}': {} matches for '{}'", self.name, found.len(), pattern);
        Ok(found)
    }

    async fn insert(&self, entries: Vec<StoredEntry>) -> Result<usize, StoreError> {
        if entries.is_empty() {
            return Ok(0);
        }

        // Hold the write lock across the append so file and memory keep the same order.
        let mut stored = self.entries.write().await;

        if let Some(path) = &self.path {
            let mut records = String::new();
            for entry in &entries {
                records.push_str(&serde_json::to_string(entry)?);
                records.push('\n');
            }

            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await?;
            file.write_all(records.as_bytes()).await?;
            file.flush().await?;
        }

        let count = entries.len();
        stored.extend(entries);
        Ok(count)
    }

    async fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            language: "de-en".to_string(),
            entry_count: self.entries.read().await.len(),
        }
    }
}
