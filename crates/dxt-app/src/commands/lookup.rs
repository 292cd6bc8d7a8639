use std::sync::Arc;

use dxt_core::language::LanguageProcessor;
use dxt_core::state::AppState;
use dxt_lang_german::{DingLoader, GermanProcessor};

/// Look up `word` in the configured store.
///
/// Returns the rendered HTML, or with `json` the ranked cards themselves.
pub async fn handle_lookup(
    state: Arc<AppState>,
    word: &str,
    json: bool,
) -> anyhow::Result<String> {
    let (dictionary, render) = {
        let config = state.config.read().await;
        (config.dictionary.clone(), config.render.clone())
    };

    let store = DingLoader::open_store(&dictionary).await?;
    tracing::debug!("Looking up '{}' in {} entries", word, store.entry_count().await);
    let processor = GermanProcessor::new(Box::new(store), render);

    if json {
        let ranked = processor.lookup(word).await?;
        return Ok(serde_json::to_string_pretty(&ranked)?);
    }

    Ok(processor.query(word).await?)
}
