use std::io::{BufRead, Lines};

use dxt_core::dictionary::StoredEntry;

use super::ImportError;

/// Reads a Ding dictionary file line by line.
///
/// Comment lines (`#`) and blank lines are skipped, every other line
/// becomes one entry, numbered from 1.
pub struct DingFileReader<R> {
    lines: Lines<R>,
    line_nr: u64,
}

impl<R: BufRead> DingFileReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_nr: 0,
        }
    }
}

impl<R: BufRead> Iterator for DingFileReader<R> {
    type Item = Result<StoredEntry, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            self.line_nr += 1;
            return Some(Ok(StoredEntry::new(self.line_nr, line)));
        }
    }
}
