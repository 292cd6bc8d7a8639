use std::path::{Path, PathBuf};

use dxt_core::dictionary::{Dictionary, StoredEntry};
use dxt_core::error::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Feed `entries` into `dictionary` in batches of `buffer_size`.
///
/// Returns the number of entries the store reports as saved. A source error
/// aborts the import; batches inserted before it stay in the store.
pub async fn import<I, D>(
    entries: I,
    dictionary: &D,
    buffer_size: usize,
) -> Result<usize, ImportError>
where
    I: IntoIterator<Item = Result<StoredEntry, ImportError>>,
    D: Dictionary + ?Sized,
{
    let buffer_size = buffer_size.max(1);
    let mut buffer = Vec::with_capacity(buffer_size);
    let mut saved = 0;

    for entry in entries {
        buffer.push(entry?);
        if buffer.len() == buffer_size {
            let batch = std::mem::replace(&mut buffer, Vec::with_capacity(buffer_size));
            saved += dictionary.insert(batch).await?;
            tracing::debug!("Imported {} entries so far", saved);
        }
    }

    if !buffer.is_empty() {
        saved += dictionary.insert(buffer).await?;
    }

    tracing::info!("Import finished with {} entries", saved);
    Ok(saved)
}

/// Store path for an imported dictionary: `<target_dir>/<file name>.db`
pub fn construct_db_path(origin: &Path, target_dir: &Path) -> PathBuf {
    let mut file_name = origin
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".db");
    target_dir.join(file_name)
}
