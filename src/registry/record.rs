// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record-level parsing of the registry's flat-text format.
//!
//! The registry is a sequence of blocks separated by lines reading `%%`.
//! Each block holds `Field: value` lines; long values wrap onto
//! continuation lines that start with two spaces. Fields may repeat
//! (`Description`, `Prefix`, `Comments`).

use std::io::{self, BufRead};

/// One `%%`-delimited block, as field name to values in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryRecord {
    fields: Vec<(String, Vec<String>)>,
}

impl RegistryRecord {
    /// Build a record from already-folded logical lines.
    ///
    /// Lines without a `Field:` prefix are ignored.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::default();
        for line in lines {
            if let Some((name, value)) = split_field(line.as_ref()) {
                record.push(name, value);
            }
        }
        record
    }

    fn push(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .fields
                .push((name.to_string(), vec![value.to_string()])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All values of a field, in source order.
    pub fn values(&self, field: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// First value of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values(field).first().map(String::as_str)
    }

    pub fn record_type(&self) -> Option<&str> {
        self.get("Type")
    }

    pub fn subtag(&self) -> Option<&str> {
        self.get("Subtag")
    }

    /// Every `Description` joined with ` | `.
    pub fn description(&self) -> Option<String> {
        let values = self.values("Description");
        if values.is_empty() {
            None
        } else {
            Some(values.join(" | "))
        }
    }

    /// Only the first `Prefix` is meaningful for variant lookup.
    pub fn prefix(&self) -> Option<&str> {
        self.get("Prefix")
    }

    pub fn suppress_script(&self) -> Option<&str> {
        self.get("Suppress-Script")
    }

    pub fn file_date(&self) -> Option<&str> {
        self.get("File-Date")
    }
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value.trim()))
}

fn is_separator(line: &str) -> bool {
    line.trim() == "%%"
}

fn is_continuation(line: &str) -> bool {
    line.starts_with("  ")
}

/// Streams [`RegistryRecord`]s out of a buffered reader.
///
/// The block after the final `%%` is yielded at end of input; the registry
/// does not terminate its last record with a separator.
pub struct RecordReader<R> {
    lines: io::Lines<R>,
    pending: Vec<String>,
    first_line: bool,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
            first_line: true,
            done: false,
        }
    }

    fn fold(&mut self, line: String) {
        if is_continuation(&line) {
            if let Some(previous) = self.pending.last_mut() {
                previous.push(' ');
                previous.push_str(line.trim());
                return;
            }
        }
        self.pending.push(line);
    }

    fn take_record(&mut self) -> RegistryRecord {
        RegistryRecord::from_lines(self.pending.drain(..))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<RegistryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(mut line)) => {
                    if self.first_line {
                        self.first_line = false;
                        if let Some(stripped) = line.strip_prefix('\u{feff}') {
                            line = stripped.to_string();
                        }
                    }
                    if is_separator(&line) {
                        let record = self.take_record();
                        if !record.is_empty() {
                            return Some(Ok(record));
                        }
                    } else {
                        self.fold(line);
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    let record = self.take_record();
                    return (!record.is_empty()).then_some(Ok(record));
                }
            }
        }
    }
}
