use serde::Serialize;

/// A positioned span of one token.
///
/// `position` is the char offset inside the trimmed token where the fragment
/// started, `None` while nothing has been seen. Sorting fragments by
/// position restores their left-to-right order in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub position: Option<usize>,
    pub text: String,
}

impl Fragment {
    pub fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            text: String::new(),
        }
    }

    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position: Some(position),
            text: text.into(),
        }
    }
}

/// One lexical alternative, e.g. `Zaunkönig {m} (Troglodytes troglodytes) [ornith.]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub orthography: Fragment,
    /// part in {}
    pub part_of_speech: Option<Fragment>,
    /// parts in []
    pub domain: Vec<Fragment>,
    /// parts in ()
    pub extension: Vec<Fragment>,
}

impl Vocabulary {
    /// A vocabulary that is only orthography, as used on the translation side
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            orthography: Fragment::new(0, text),
            ..Default::default()
        }
    }

    pub fn part_of_speech_text(&self) -> Option<&str> {
        self.part_of_speech.as_ref().map(|p| p.text.as_str())
    }
}

/// Interchangeable alternatives, separated by `"; "`. The first one is canonical.
pub type Family = Vec<Vocabulary>;

/// Variants of one side of an entry, separated by `" | "`.
pub type Order = Vec<Family>;

/// One parsed dictionary line: head language on the front, translation on the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub front: Order,
    pub back: Order,
}
