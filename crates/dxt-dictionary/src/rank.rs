//! Relevance of candidate lines for a lookup word.
//!
//! Scoring and ordering are separate: [`estimate_priority`] scores one card,
//! [`rank`] parses every line, scores it and sorts stably by priority.

use serde::Serialize;

use crate::ding::parse_line;
use crate::types::{Card, Vocabulary};

/// Lowest priority a card can get
pub const PRIORITY_FLOOR: i32 = -100;

/// Bonus for a singular noun whose next family is its plural
pub const PLURAL_BONUS: i32 = 20;

const MISS_PENALTY: i32 = 3;
const NO_ORTHOGRAPHY_PENALTY: i32 = 5;

/// Part-of-speech tags of singular nouns that pull their plural family up
const SINGULAR_NOUN_TAGS: [&str; 4] = ["m", "n", "m/f", "m/n"];
const PLURAL_TAG: &str = "pl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub priority: i32,
    pub card: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    ExactIgnoreCase,
    Contains,
    ContainsIgnoreCase,
}

impl MatchTier {
    fn of(text: &str, word: &str, folded_word: &str) -> Option<Self> {
        if text == word {
            return Some(Self::Exact);
        }
        let folded = text.to_lowercase();
        if folded == folded_word {
            Some(Self::ExactIgnoreCase)
        } else if text.contains(word) {
            Some(Self::Contains)
        } else if folded.contains(folded_word) {
            Some(Self::ContainsIgnoreCase)
        } else {
            None
        }
    }

    fn orthography_score(self) -> i32 {
        match self {
            Self::Exact => 100,
            Self::ExactIgnoreCase => 90,
            Self::Contains => 80,
            Self::ContainsIgnoreCase => 70,
        }
    }

    fn extension_score(self) -> i32 {
        match self {
            Self::Exact => 60,
            Self::ExactIgnoreCase => 50,
            Self::Contains => 40,
            Self::ContainsIgnoreCase => 30,
        }
    }

    fn is_exact(self) -> bool {
        matches!(self, Self::Exact | Self::ExactIgnoreCase)
    }
}

fn plural_bonus(card: &Card, vocabulary: &Vocabulary) -> i32 {
    let singular_noun = vocabulary
        .part_of_speech_text()
        .is_some_and(|tag| SINGULAR_NOUN_TAGS.contains(&tag));
    let next_is_plural = card
        .front
        .get(1)
        .and_then(|family| family.first())
        .and_then(Vocabulary::part_of_speech_text)
        == Some(PLURAL_TAG);

    if singular_noun && next_is_plural {
        PLURAL_BONUS
    } else {
        0
    }
}

/// Score how well `card` answers a lookup of `word`.
///
/// Only the first front family is inspected. Alternatives are tried in order
/// against the orthography, each miss costing 3 points; when none matches,
/// the same alternatives are tried again against their extensions with
/// lower base scores.
pub fn estimate_priority(word: &str, card: &Card) -> i32 {
    let Some(family) = card.front.first() else {
        return PRIORITY_FLOOR;
    };
    let folded_word = word.to_lowercase();
    let mut penalty = 0;

    for vocabulary in family {
        if let Some(tier) = MatchTier::of(&vocabulary.orthography.text, word, &folded_word) {
            let mut priority = tier.orthography_score() - penalty;
            if tier.is_exact() {
                priority += plural_bonus(card, vocabulary);
            }
            return priority.max(PRIORITY_FLOOR);
        }
        penalty += MISS_PENALTY;
    }

    penalty += NO_ORTHOGRAPHY_PENALTY;
    for vocabulary in family {
        let best = vocabulary
            .extension
            .iter()
            .filter_map(|extension| MatchTier::of(&extension.text, word, &folded_word))
            .min();
        if let Some(tier) = best {
            return (tier.extension_score() - penalty).max(PRIORITY_FLOOR);
        }
        penalty += MISS_PENALTY;
    }

    PRIORITY_FLOOR
}

/// Parse and order candidate lines for `word`, best first.
/// Lines with equal priority keep their input order.
pub fn rank<I>(word: &str, lines: I) -> Vec<Ranked>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut ranked: Vec<Ranked> = lines
        .into_iter()
        .map(|line| {
            let card = parse_line(line.as_ref());
            let priority = estimate_priority(word, &card);
            Ranked { priority, card }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));

    tracing::debug!(
        "Ranked {} candidates for '{}' (best priority {:?})",
        ranked.len(),
        word,
        ranked.first().map(|r| r.priority)
    );

    ranked
}
