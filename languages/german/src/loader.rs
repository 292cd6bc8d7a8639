use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dxt_config::dictionary::DictionaryConfig;
use dxt_core::error::StoreError;
use dxt_dictionary::loaders::{DingFileReader, ImportError, WikiDumpReader, import};

use crate::dictionary::DingStore;

/// Kind of file handed to an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Ding text file, one entry per line
    Ding,
    /// MediaWiki XML dump
    Wiki,
}

pub struct DingLoader;

impl DingLoader {
    /// Open the configured store, or an in-memory one when the store is disabled
    pub async fn open_store(config: &DictionaryConfig) -> Result<DingStore, StoreError> {
        if config.enabled {
            DingStore::open(&config.path).await
        } else {
            tracing::warn!("Dictionary store disabled, using empty in-memory store");
            Ok(DingStore::in_memory())
        }
    }

    /// Import a dictionary source file into `store`
    pub async fn import_file(
        path: &Path,
        format: SourceFormat,
        store: &DingStore,
        buffer_size: usize,
    ) -> Result<usize, ImportError> {
        tracing::info!("Importing {:?} source: {}", format, path.display());
        let reader = BufReader::new(File::open(path)?);

        let count = match format {
            SourceFormat::Ding => import(DingFileReader::new(reader), store, buffer_size).await?,
            SourceFormat::Wiki => import(WikiDumpReader::new(reader), store, buffer_size).await?,
        };

        tracing::info!("Imported {} entries from {}", count, path.display());
        Ok(count)
    }
}
