use std::path::Path;
use std::sync::Arc;

use dxt_core::state::AppState;
use dxt_dictionary::loaders::construct_db_path;
use dxt_lang_german::{DingLoader, DingStore, SourceFormat};

/// Import `file` into the configured store, or into a fresh store under `target`.
pub async fn handle_import(
    state: Arc<AppState>,
    file: &Path,
    format: SourceFormat,
    target: Option<&Path>,
) -> anyhow::Result<usize> {
    let (dictionary, buffer_size) = {
        let config = state.config.read().await;
        (config.dictionary.clone(), config.import.buffer_size)
    };

    let store = match target {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await?;
            DingStore::open(construct_db_path(file, dir)).await?
        }
        None => DingLoader::open_store(&dictionary).await?,
    };

    let count = DingLoader::import_file(file, format, &store, buffer_size).await?;
    if let Some(path) = store.path() {
        tracing::info!("Store {} now holds {} entries", path.display(), store.entry_count().await);
    }

    Ok(count)
}
