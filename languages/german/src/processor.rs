use async_trait::async_trait;
use dxt_config::render::RenderConfig;
use dxt_core::dictionary::Dictionary;
use dxt_core::error::StoreError;
use dxt_core::language::LanguageProcessor;
use dxt_core::preprocess::Preprocessor;
use dxt_dictionary::types::Card;
use dxt_dictionary::{Ranked, rank, render_lookup};

use crate::declension::{Gender, decline};

/// German lookup: find candidate lines, rank them, decline the best noun
/// and render everything as one HTML fragment.
pub struct GermanProcessor {
    dictionary: Box<dyn Dictionary>,
    render: RenderConfig,
}

impl GermanProcessor {
    pub fn new(dictionary: Box<dyn Dictionary>, render: RenderConfig) -> Self {
        Self { dictionary, render }
    }

    /// Declension tables for the head noun of `card` and its plural alternative
    pub fn declension_prelude(&self, card: &Card) -> String {
        let Some(family) = card.front.first() else {
            return String::new();
        };
        let Some((singular, gender)) = family.first().and_then(|v| {
            v.part_of_speech_text()
                .and_then(Gender::from_tag)
                .filter(|g| g.is_singular())
                .map(|g| (v, g))
        }) else {
            return String::new();
        };

        let mut prelude = decline(&singular.orthography.text, gender, None);
        if let Some(plural) = family.get(1).filter(|v| v.part_of_speech_text() == Some("pl")) {
            prelude.push_str(&decline(&plural.orthography.text, Gender::Plural, None));
        }
        prelude
    }

    /// Ranked cards for `word`, best first, cut to the configured maximum
    pub async fn lookup(&self, word: &str) -> Result<Vec<Ranked>, StoreError> {
        self.ranked(&self.normalize(word)).await
    }

    async fn ranked(&self, word: &str) -> Result<Vec<Ranked>, StoreError> {
        if word.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.dictionary.find(word).await?;
        tracing::debug!(
            "[{}] '{}': {} candidate lines",
            self.language_code(),
            word,
            entries.len()
        );

        let mut ranked = rank(word, entries.iter().map(|e| e.text.as_str()));
        if self.render.max_results > 0 {
            ranked.truncate(self.render.max_results);
        }
        Ok(ranked)
    }
}

impl Preprocessor for GermanProcessor {}

#[async_trait]
impl LanguageProcessor for GermanProcessor {
    fn language_code(&self) -> &str {
        "de"
    }

    fn normalize(&self, text: &str) -> String {
        self.process(text)
    }

    async fn query(&self, word: &str) -> Result<String, StoreError> {
        let word = self.normalize(word);
        let ranked = self.ranked(&word).await?;

        let prelude = match ranked.first() {
            Some(best) if self.render.declension => self.declension_prelude(&best.card),
            _ => String::new(),
        };

        Ok(render_lookup(&word, &ranked, &prelude))
    }
}

#[cfg(test)]
mod tests {
    use dxt_core::dictionary::{DictionaryMetadata, StoredEntry};
    use dxt_dictionary::parse_line;

    use super::*;
    use crate::dictionary::DingStore;

    fn render_all() -> RenderConfig {
        RenderConfig {
            declension: true,
            max_results: 0,
        }
    }

    async fn processor_with(lines: &[&str], render: RenderConfig) -> GermanProcessor {
        let store = DingStore::in_memory();
        let entries = lines
            .iter()
            .enumerate()
            .map(|(i, line)| StoredEntry::new(i as u64 + 1, *line))
            .collect();
        store.insert(entries).await.unwrap();
        GermanProcessor::new(Box::new(store), render)
    }

    const LINES: &[&str] = &[
        "Im Winter Einfrieren des Wassers im Behälter verhüten. (Sicherheitshinweis) :: In winter prevent the water in the container from freezing. (safety note)",
        "Winter {m} | Winter {pl} | im Winter; wintertags [Lux.] [adm.] | ein strenger Winter :: winter | winters | in (the) winter | a rough winter",
        "Winter {m}; Winterzeit {f} :: wintertime; wintertide",
        "Sommer {m} :: summer",
    ];

    #[tokio::test]
    async fn best_noun_is_declined_above_ranked_table() {
        let processor = processor_with(LINES, render_all()).await;

        let html = processor.query("Winter").await.unwrap();

        let declension = html.find("<table class=\"declension\">").unwrap();
        let ranked = html.find("<table class=\"ding\">").unwrap();
        assert!(declension < ranked);
        assert!(html.contains(r#"<span class="declension declension-article">der</span>"#));
        // Sommer does not contain the word and never reaches the ranker
        assert_eq!(html.matches("ding-card").count(), 3);
        let best = html.find("data-priority=\"120\"").unwrap();
        let second = html.find("data-priority=\"100\"").unwrap();
        assert!(best < second);
    }

    #[tokio::test]
    async fn unknown_word_renders_not_found() {
        let processor = processor_with(LINES, render_all()).await;

        let html = processor.query("Zwiebelkuchen").await.unwrap();

        assert!(html.contains("ding-not-found"));
        assert!(html.contains("Zwiebelkuchen"));
    }

    #[tokio::test]
    async fn lookup_skips_the_store_for_blank_words() {
        let processor = processor_with(LINES, render_all()).await;

        assert!(processor.lookup(" \t ").await.unwrap().is_empty());
        let ranked = processor.lookup(" Winter ").await.unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].priority, 120);
    }

    #[tokio::test]
    async fn blank_query_renders_not_found() {
        let processor = processor_with(LINES, render_all()).await;
        let html = processor.query("   ").await.unwrap();
        assert!(html.contains("ding-not-found"));
    }

    #[tokio::test]
    async fn max_results_truncates() {
        let render = RenderConfig {
            declension: false,
            max_results: 1,
        };
        let processor = processor_with(LINES, render).await;

        let html = processor.query("winter").await.unwrap();

        assert_eq!(html.matches("ding-card").count(), 1);
        assert!(!html.contains("class=\"declension\""));
    }

    #[test]
    fn prelude_declines_singular_and_plural_alternatives() {
        let processor = GermanProcessor::new(Box::new(DingStore::in_memory()), render_all());

        let card = parse_line("Haus {n}; Häuser {pl} :: house; houses");
        let prelude = processor.declension_prelude(&card);
        assert_eq!(prelude.matches("<table class=\"declension\">").count(), 2);
        assert!(prelude.contains(">Häuser</span>"));

        let card = parse_line("Winter {m} | Winter {pl} :: winter");
        let prelude = processor.declension_prelude(&card);
        assert_eq!(prelude.matches("<table class=\"declension\">").count(), 1);

        assert!(processor.declension_prelude(&parse_line("folgen {vi} :: to follow")).is_empty());
        assert!(processor.declension_prelude(&parse_line("Leute {pl} :: people")).is_empty());
    }

    struct FailingStore;

    #[async_trait]
    impl Dictionary for FailingStore {
        async fn find(&self, _pattern: &str) -> Result<Vec<StoredEntry>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        async fn insert(&self, _entries: Vec<StoredEntry>) -> Result<usize, StoreError> {
            Ok(0)
        }

        async fn metadata(&self) -> DictionaryMetadata {
            DictionaryMetadata {
                name: "failing".to_string(),
                language: "de".to_string(),
                entry_count: 0,
            }
        }
    }

    #[tokio::test]
    async fn store_errors_pass_through() {
        let processor = GermanProcessor::new(Box::new(FailingStore), render_all());

        let result = processor.query("Winter").await;

        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
