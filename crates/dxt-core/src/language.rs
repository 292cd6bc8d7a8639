use async_trait::async_trait;

use crate::error::StoreError;

/// Lookup pipeline for one head language
#[async_trait]
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "de", "en", ...)
    fn language_code(&self) -> &str;

    /// Normalize a query before it reaches the store
    fn normalize(&self, text: &str) -> String;

    /// Look up `word` and render the ranked result as markup
    async fn query(&self, word: &str) -> Result<String, StoreError>;
}
