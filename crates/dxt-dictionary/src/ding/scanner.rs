use crate::types::{Fragment, Vocabulary};

/// Which field the next plain character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Orthography,
    PartOfSpeech,
    Domain,
    Extension,
}

/// Fields collected while walking a token
#[derive(Debug, Default)]
struct Fields {
    orthography: Fragment,
    part_of_speech: Option<Fragment>,
    domain: Vec<Fragment>,
    extension: Vec<Fragment>,
}

impl Fields {
    fn push(&mut self, state: ScanState, position: usize, c: char) {
        match state {
            ScanState::Orthography => {
                let orthography = &mut self.orthography;
                orthography.position.get_or_insert(position);
                orthography.text.push(c);
            }
            ScanState::PartOfSpeech => self
                .part_of_speech
                .get_or_insert_with(|| Fragment::at(position))
                .text
                .push(c),
            ScanState::Domain => last_or_new(&mut self.domain, position).text.push(c),
            ScanState::Extension => last_or_new(&mut self.extension, position).text.push(c),
        }
    }

    fn into_vocabulary(self) -> Vocabulary {
        let mut orthography = self.orthography;
        orthography.text = collapse_first_whitespace_run(&orthography.text)
            .trim()
            .to_string();

        Vocabulary {
            orthography,
            part_of_speech: self.part_of_speech,
            domain: self.domain,
            extension: self.extension,
        }
    }
}

fn last_or_new(fragments: &mut Vec<Fragment>, position: usize) -> &mut Fragment {
    if fragments.is_empty() {
        fragments.push(Fragment::at(position));
    }
    let last = fragments.len() - 1;
    &mut fragments[last]
}

/// Replace the first run of whitespace with a single space.
fn collapse_first_whitespace_run(text: &str) -> String {
    let Some(start) = text.find(char::is_whitespace) else {
        return text.to_string();
    };
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |offset| start + offset);

    let mut collapsed = String::with_capacity(text.len());
    collapsed.push_str(&text[..start]);
    collapsed.push(' ');
    collapsed.push_str(&text[end..]);
    collapsed
}

/// Scan one alternative into its fields.
///
/// Positions are char offsets into the trimmed token. `{` starts a new
/// part-of-speech fragment (only the last one survives), `[` and `(` push a
/// new domain or extension fragment, and any closing bracket returns to the
/// orthography. Unbalanced brackets leave partly filled fragments behind.
pub fn scan(token: &str) -> Vocabulary {
    let mut fields = Fields::default();
    let mut state = ScanState::Orthography;

    for (i, c) in token.trim().chars().enumerate() {
        match c {
            '{' => {
                state = ScanState::PartOfSpeech;
                fields.part_of_speech = Some(Fragment::at(i));
            }
            '[' => {
                state = ScanState::Domain;
                fields.domain.push(Fragment::at(i));
            }
            '(' => {
                state = ScanState::Extension;
                fields.extension.push(Fragment::at(i));
            }
            '}' | ']' | ')' => state = ScanState::Orthography,
            _ => fields.push(state, i, c),
        }
    }

    fields.into_vocabulary()
}
