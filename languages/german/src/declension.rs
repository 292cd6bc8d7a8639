//! Article and ending paradigms for German noun phrases.
//!
//! The forms are looked up, never derived: one row per (gender, case) with
//! the definite, indefinite and article-less form in that order. Plural has
//! no indefinite article.

use std::fmt::Write;

use dxt_dictionary::format::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl Gender {
    /// Map a Ding part-of-speech tag (`m`, `f`, `n`, `pl`) to a gender
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "m" => Some(Gender::Masculine),
            "f" => Some(Gender::Feminine),
            "n" => Some(Gender::Neuter),
            "pl" => Some(Gender::Plural),
            _ => None,
        }
    }

    pub fn is_singular(self) -> bool {
        self != Gender::Plural
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Nominative, Case::Genitive, Case::Dative, Case::Accusative];

    pub fn label(self) -> &'static str {
        match self {
            Case::Nominative => "Nom.",
            Case::Genitive => "Gen.",
            Case::Dative => "Dat.",
            Case::Accusative => "Akk.",
        }
    }
}

/// (article, ending) pairs of one case
pub type Forms = &'static [(&'static str, &'static str)];

type Paradigm = [Forms; 4];

static MASCULINE: Paradigm = [
    &[("der", "e"), ("ein", "er"), ("", "er")],
    &[("des", "en"), ("eines", "en"), ("", "en")],
    &[("dem", "en"), ("einem", "en"), ("", "em")],
    &[("den", "en"), ("einen", "en"), ("", "en")],
];

static FEMININE: Paradigm = [
    &[("die", "e"), ("eine", "e"), ("", "e")],
    &[("der", "en"), ("einer", "en"), ("", "er")],
    &[("der", "en"), ("einer", "en"), ("", "er")],
    &[("die", "e"), ("eine", "e"), ("", "e")],
];

static NEUTER: Paradigm = [
    &[("das", "_"), ("ein", "es"), ("", "es")],
    &[("des", "_"), ("eines", "en"), ("", "en")],
    &[("dem", "_"), ("einem", "en"), ("", "em")],
    &[("das", "_"), ("ein", "es"), ("", "es")],
];

static PLURAL: Paradigm = [
    &[("die", "en"), ("", "en")],
    &[("der", "en"), ("", "en")],
    &[("den", "en"), ("", "en")],
    &[("die", "en"), ("", "en")],
];

/// Forms of `gender` in `case`
pub fn forms(gender: Gender, case: Case) -> Forms {
    let paradigm = match gender {
        Gender::Masculine => &MASCULINE,
        Gender::Feminine => &FEMININE,
        Gender::Neuter => &NEUTER,
        Gender::Plural => &PLURAL,
    };
    paradigm[case as usize]
}

/// Render the declension table of `noun`.
///
/// Irregular genitives cannot be looked up; without `genitive` the genitive
/// row shows the noun with a marker asking for manual input.
pub fn decline(noun: &str, gender: Gender, genitive: Option<&str>) -> String {
    let noun = escape_html(noun);
    let genitive = match genitive {
        Some(form) => escape_html(form),
        None => format!(r#"{noun}<span class="ding ding-attention">?</span>"#),
    };

    let mut table = String::from("<table class=\"declension\">\n");
    for case in Case::ALL {
        let text = if case == Case::Genitive { &genitive } else { &noun };
        let _ = write!(
            table,
            r#"<tr><td><span class="declension declension-case">{}</span></td>"#,
            case.label()
        );
        for (article, ending) in forms(gender, case) {
            let _ = write!(
                table,
                concat!(
                    r#"<td><span class="declension declension-article">{}</span> "#,
                    r#"___<span class="declension declension-ending">{}</span> "#,
                    r#"<span class="declension declension-noun">{}</span></td>"#
                ),
                article, ending, text
            );
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</table>\n");
    table
}
