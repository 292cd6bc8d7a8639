//! HTML rendering of ranked cards.
//!
//! The query is matched against raw fragment text and every piece is escaped
//! on its own, so a highlight can never land inside an entity or a tag.

use std::fmt::Write;

use regex::{Regex, RegexBuilder};

use crate::rank::Ranked;
use crate::types::{Card, Family, Fragment, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Orthography,
    PartOfSpeech,
    Domain,
    Extension,
}

impl Role {
    fn class(self) -> &'static str {
        match self {
            Role::Orthography => "ding ding-part-orthography",
            Role::PartOfSpeech => "ding ding-part-partOfSpeech",
            Role::Domain => "ding ding-part-domain",
            Role::Extension => "ding ding-part-extension",
        }
    }

    fn wrap(self, text: &str) -> String {
        match self {
            Role::Orthography => text.to_string(),
            Role::PartOfSpeech => format!("{{{text}}}"),
            Role::Domain => format!("[{text}]"),
            Role::Extension => format!("({text})"),
        }
    }
}

/// Case-insensitive marker for the looked up word, compiled once per render
struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    fn new(word: &str) -> Self {
        let pattern = if word.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(word))
                .case_insensitive(true)
                .build()
                .map_err(|e| tracing::warn!("Highlighting disabled for '{}': {}", word, e))
                .ok()
        };
        Self { pattern }
    }

    /// Escape `raw`, wrapping every match of the query in a highlight span.
    fn apply(&self, raw: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(raw);
        };

        let mut html = String::with_capacity(raw.len());
        let mut last = 0;
        for hit in pattern.find_iter(raw) {
            html.push_str(&escape_html(&raw[last..hit.start()]));
            let _ = write!(
                html,
                r#"<span class="ding ding-highlight">{}</span>"#,
                escape_html(hit.as_str())
            );
            last = hit.end();
        }
        html.push_str(&escape_html(&raw[last..]));
        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_with(highlighter: &Highlighter, vocabulary: &Vocabulary) -> String {
    let mut parts: Vec<(Role, &Fragment)> = Vec::with_capacity(
        1 + vocabulary.domain.len() + vocabulary.extension.len() + 1,
    );
    parts.push((Role::Orthography, &vocabulary.orthography));
    if let Some(part_of_speech) = &vocabulary.part_of_speech {
        parts.push((Role::PartOfSpeech, part_of_speech));
    }
    parts.extend(vocabulary.domain.iter().map(|d| (Role::Domain, d)));
    parts.extend(vocabulary.extension.iter().map(|e| (Role::Extension, e)));

    // Fields were discovered out of order, positions restore the source order.
    parts.sort_by_key(|(_, fragment)| fragment.position);

    parts
        .into_iter()
        .map(|(role, fragment)| {
            let highlighted = highlighter.apply(&fragment.text);
            format!(r#"<span class="{}">{}</span>"#, role.class(), role.wrap(&highlighted))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one alternative with every occurrence of `word` highlighted.
pub fn format_vocabulary(word: &str, vocabulary: &Vocabulary) -> String {
    format_with(&Highlighter::new(word), vocabulary)
}

fn format_family(highlighter: &Highlighter, family: &Family) -> String {
    family
        .iter()
        .map(|v| format_with(highlighter, v))
        .collect::<Vec<_>>()
        .join("; ")
}

fn render_rows(highlighter: &Highlighter, card: &Card) -> String {
    let mut rows = String::new();
    for (idx, front) in card.front.iter().enumerate() {
        let head = format_family(highlighter, front);
        let translation = card
            .back
            .get(idx)
            .map(|back| format_family(highlighter, back))
            .unwrap_or_default();
        let class = format!("ding ding-row ding-row-{idx}");
        let _ = write!(
            rows,
            "<tr>\n  <td class=\"{class}\">{head}</td>\n  <td class=\"{class}\">{translation}</td>\n</tr>\n"
        );
    }
    rows
}

/// Render one card as table rows, one row per front family.
pub fn render_card(word: &str, card: &Card) -> String {
    render_rows(&Highlighter::new(word), card)
}

pub fn render_not_found(word: &str) -> String {
    format!(
        "<div class=\"ding ding-not-found\">No entry found for <b>{}</b></div>\n",
        escape_html(word)
    )
}

/// Render a whole lookup: `prelude` (declension tables) above the ranked cards.
pub fn render_lookup(word: &str, ranked: &[Ranked], prelude: &str) -> String {
    if ranked.is_empty() {
        return render_not_found(word);
    }

    let highlighter = Highlighter::new(word);
    let mut html = String::from(prelude);
    html.push_str("<table class=\"ding\">\n");
    for entry in ranked {
        let _ = write!(
            html,
            "<tbody class=\"ding ding-card\" data-priority=\"{}\">\n{}</tbody>\n",
            entry.priority,
            render_rows(&highlighter, &entry.card)
        );
    }
    html.push_str("</table>\n");
    html
}
