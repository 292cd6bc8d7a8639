use std::io::BufRead;

use dxt_core::dictionary::StoredEntry;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use super::ImportError;

/// Article namespace of a MediaWiki dump
const ARTICLE_NAMESPACE: &str = "0";

#[derive(Debug, Default)]
struct Page {
    ns: String,
    id: String,
    title: String,
    text: String,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Namespace,
    Id,
    Title,
    Text,
}

/// What the reader saw, detached from its buffer
enum Step {
    Open(Vec<u8>),
    Close(Vec<u8>),
    Text(String),
    Eof,
    Skip,
}

/// Streams article pages out of a MediaWiki XML dump
/// (<https://dumps.wikimedia.org/backup-index.html>).
///
/// Only pages in the article namespace are emitted. The entry id is the page
/// id, the title is the page title and the text is the revision wikitext,
/// re-escaped for XML with its surrounding whitespace kept.
pub struct WikiDumpReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    path: Vec<Vec<u8>>,
    page: Option<Page>,
    done: bool,
}

impl<R: BufRead> WikiDumpReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            path: Vec::new(),
            page: None,
            done: false,
        }
    }

    fn under(&self, parents: &[&str]) -> bool {
        self.path.len() >= parents.len()
            && self.path[self.path.len() - parents.len()..]
                .iter()
                .zip(parents)
                .all(|(seen, wanted)| seen.as_slice() == wanted.as_bytes())
    }

    fn field(&self) -> Option<Field> {
        if self.under(&["page", "ns"]) {
            Some(Field::Namespace)
        } else if self.under(&["page", "id"]) {
            Some(Field::Id)
        } else if self.under(&["page", "title"]) {
            Some(Field::Title)
        } else if self.under(&["page", "revision", "text"]) {
            Some(Field::Text)
        } else {
            None
        }
    }

    fn on_text(&mut self, text: String) {
        let Some(field) = self.field() else {
            return;
        };
        if let Some(page) = self.page.as_mut() {
            let target = match field {
                Field::Namespace => &mut page.ns,
                Field::Id => &mut page.id,
                Field::Title => &mut page.title,
                Field::Text => &mut page.text,
            };
            target.push_str(&text);
        }
    }

    fn finish_page(&mut self) -> Option<StoredEntry> {
        let page = self.page.take()?;
        if page.ns.trim() != ARTICLE_NAMESPACE {
            return None;
        }
        match page.id.trim().parse::<u64>() {
            Ok(id) => {
                let text = escape(page.text.as_str()).into_owned();
                Some(StoredEntry::new(id, text).with_title(page.title.trim()))
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping page '{}' with invalid id '{}': {}",
                    page.title,
                    page.id,
                    e
                );
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for WikiDumpReader<R> {
    type Item = Result<StoredEntry, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            let step = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => Step::Open(e.local_name().as_ref().to_vec()),
                Ok(Event::End(e)) => Step::Close(e.local_name().as_ref().to_vec()),
                Ok(Event::Text(t)) => match t.unescape() {
                    Ok(text) => Step::Text(text.into_owned()),
                    Err(e) => return Some(Err(ImportError::Xml(quick_xml::Error::from(e)))),
                },
                Ok(Event::CData(c)) => Step::Text(String::from_utf8_lossy(&c).into_owned()),
                Ok(Event::Eof) => Step::Eof,
                Ok(_) => Step::Skip,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            match step {
                Step::Open(name) => {
                    if name == b"page" {
                        self.page = Some(Page::default());
                    }
                    self.path.push(name);
                }
                Step::Close(name) => {
                    self.path.pop();
                    if name == b"page" {
                        if let Some(entry) = self.finish_page() {
                            return Some(Ok(entry));
                        }
                    }
                }
                Step::Text(text) => self.on_text(text),
                Step::Eof => self.done = true,
                Step::Skip => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"<mediawiki xmlns="http://www.mediawiki.org/xml/export-0.10/">
  <siteinfo><sitename>Wikipedia</sitename></siteinfo>
  <page>
    <title>Winter</title>
    <ns>0</ns>
    <id>42</id>
    <revision>
      <id>9001</id>
      <text xml:space="preserve">Der '''Winter''' ist &lt;b&gt;kalt&lt;/b&gt; &amp; dunkel.</text>
    </revision>
  </page>
  <page>
    <title>Diskussion:Winter</title>
    <ns>1</ns>
    <id>43</id>
    <revision><id>9002</id><text>talk</text></revision>
  </page>
  <page>
    <title>Sommer</title>
    <ns>0</ns>
    <id>44</id>
    <revision><id>9003</id><text>Der Sommer.</text></revision>
  </page>
</mediawiki>"#;

    #[test]
    fn emits_article_pages_only() {
        let entries: Vec<StoredEntry> = WikiDumpReader::new(DUMP.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 42);
        assert_eq!(entries[0].title.as_deref(), Some("Winter"));
        assert_eq!(entries[1].id, 44);
        assert_eq!(entries[1].text, "Der Sommer.");
    }

    #[test]
    fn revision_id_does_not_replace_page_id() {
        let first = WikiDumpReader::new(DUMP.as_bytes()).next().unwrap().unwrap();
        assert_eq!(first.id, 42);
    }

    #[test]
    fn text_is_escaped_again() {
        let first = WikiDumpReader::new(DUMP.as_bytes()).next().unwrap().unwrap();

        assert_eq!(
            first.text,
            "Der &apos;&apos;&apos;Winter&apos;&apos;&apos; ist &lt;b&gt;kalt&lt;/b&gt; &amp; dunkel."
        );
    }

    #[test]
    fn revision_text_keeps_surrounding_whitespace() {
        let dump = "<mediawiki><page><title> Eis </title><ns>0</ns><id> 7 </id>\
            <revision><text>\n  Eis {n}\n</text></revision></page></mediawiki>";
        let entry = WikiDumpReader::new(dump.as_bytes()).next().unwrap().unwrap();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.title.as_deref(), Some("Eis"));
        assert_eq!(entry.text, "\n  Eis {n}\n");
    }

    #[test]
    fn malformed_dump_reports_error() {
        let broken = "<mediawiki><page><title>x</titel></page></mediawiki>";
        let result: Result<Vec<StoredEntry>, ImportError> =
            WikiDumpReader::new(broken.as_bytes()).collect();

        assert!(result.is_err());
    }
}
