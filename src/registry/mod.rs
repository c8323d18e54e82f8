// SPDX-License-Identifier: PMPL-1.0-or-later

//! IANA Language Subtag Registry loader.
//!
//! Reads the registry's flat-text records once and folds them into an
//! immutable [`RegistryIndex`]: four typed tables keyed by normalized
//! subtag, the private-use ranges, and the registry's `File-Date`.
//!
//! Only `language`, `region`, `script` and `variant` records are indexed;
//! `extlang`, `grandfathered` and `redundant` records are read and dropped.

pub mod ranges;
pub mod record;

use crate::subtag;
use crate::types::{LanguageEntry, RegionEntry, ScriptEntry, VariantEntry};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

pub use ranges::{PrivateUseRanges, SubtagRange};
pub use record::{RecordReader, RegistryRecord};

/// File name the registry is conventionally distributed under.
pub const DEFAULT_REGISTRY_FILE: &str = "language-subtag-registry.txt";

/// Immutable lookup tables built from one registry source.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    languages: HashMap<String, LanguageEntry>,
    regions: HashMap<String, RegionEntry>,
    scripts: HashMap<String, ScriptEntry>,
    variants: HashMap<String, VariantEntry>,
    private: PrivateUseRanges,
    file_date: Option<String>,
}

impl RegistryIndex {
    /// Load the registry from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("reading registry {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("loading registry {}", path.display()))
    }

    /// Load the registry from raw UTF-8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).context("registry is not valid UTF-8")?;
        Self::from_reader(text.as_bytes())
    }

    /// Load the registry from any buffered source.
    ///
    /// Either every record is read and indexed or an error is returned;
    /// there is no partially loaded index.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = IndexBuilder::new()?;
        for record in RecordReader::new(reader) {
            builder.add(record.context("reading registry record")?);
        }
        let index = builder.finish();
        debug!(
            languages = index.languages.len(),
            regions = index.regions.len(),
            scripts = index.scripts.len(),
            variants = index.variants.len(),
            file_date = index.file_date.as_deref().unwrap_or("-"),
            "registry loaded"
        );
        Ok(index)
    }

    /// The registry's `File-Date`, verbatim.
    pub fn file_date(&self) -> Option<&str> {
        self.file_date.as_deref()
    }

    /// The registry's `File-Date` as a calendar date, when well formed.
    pub fn file_date_parsed(&self) -> Option<NaiveDate> {
        self.file_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok())
    }

    /// Case-insensitive language lookup.
    pub fn language(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.get(&subtag::lower(code))
    }

    /// Case-insensitive region lookup (UN numeric codes are unaffected).
    pub fn region(&self, code: &str) -> Option<&RegionEntry> {
        self.regions.get(&subtag::upper(code))
    }

    /// Case-insensitive script lookup via title case.
    pub fn script(&self, code: &str) -> Option<&ScriptEntry> {
        self.scripts.get(&subtag::title(code))
    }

    /// Case-insensitive variant lookup; prefix is not checked here.
    pub fn variant(&self, code: &str) -> Option<&VariantEntry> {
        self.variants.get(&subtag::lower(code))
    }

    pub fn is_private_language(&self, code: &str) -> bool {
        self.private.is_private_language(code)
    }

    pub fn is_private_script(&self, code: &str) -> bool {
        self.private.is_private_script(code)
    }

    pub fn is_private_region(&self, code: &str) -> bool {
        self.private.is_private_region(code)
    }

    pub fn private_ranges(&self) -> &PrivateUseRanges {
        &self.private
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.languages.values()
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionEntry> {
        self.regions.values()
    }

    pub fn scripts(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.scripts.values()
    }

    pub fn variants(&self) -> impl Iterator<Item = &VariantEntry> {
        self.variants.values()
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

/// Folds records into a [`RegistryIndex`].
struct IndexBuilder {
    index: RegistryIndex,
    qualifier: Regex,
}

impl IndexBuilder {
    fn new() -> Result<Self> {
        Ok(Self {
            index: RegistryIndex::default(),
            qualifier: Regex::new(r"\(.*\)").context("compiling qualifier pattern")?,
        })
    }

    fn add(&mut self, record: RegistryRecord) {
        if self.index.file_date.is_none() {
            if let Some(date) = record.file_date() {
                self.index.file_date = Some(date.to_string());
            }
        }
        match record.record_type() {
            Some("language") => self.add_language(&record),
            Some("region") => self.add_region(&record),
            Some("script") => self.add_script(&record),
            Some("variant") => self.add_variant(&record),
            _ => {}
        }
    }

    fn add_language(&mut self, record: &RegistryRecord) {
        let Some(code) = record.subtag() else {
            return;
        };
        if code.contains("..") {
            self.index.private.language = parse_range(code, subtag::lower);
            return;
        }
        let Some(description) = record.description() else {
            warn!(subtag = code, "language record without description");
            return;
        };
        let code = subtag::lower(code);
        let description = self.language_description(&code, &description);
        let entry = LanguageEntry {
            subtag: code.clone(),
            description,
            suppress_script: record.suppress_script().map(subtag::title),
        };
        self.index.languages.insert(code, entry);
    }

    fn language_description(&self, code: &str, raw: &str) -> String {
        // Registry name for `el` is "Modern Greek (1453-)".
        if code == "el" {
            return "Greek".to_string();
        }
        let first = raw.split('|').next().unwrap_or(raw).trim();
        self.qualifier.replace_all(first, "").trim().to_string()
    }

    fn add_region(&mut self, record: &RegistryRecord) {
        let Some(code) = record.subtag() else {
            return;
        };
        if code.contains("..") {
            if let Some(range) = parse_range(code, subtag::upper) {
                self.index.private.regions.push(range);
            }
            return;
        }
        let code = subtag::upper(code);
        let entry = RegionEntry {
            subtag: code.clone(),
            description: record.description().unwrap_or_default().trim().to_string(),
        };
        self.index.regions.insert(code, entry);
    }

    fn add_script(&mut self, record: &RegistryRecord) {
        let Some(code) = record.subtag() else {
            return;
        };
        if code.contains("..") {
            self.index.private.script = parse_range(code, subtag::title);
            return;
        }
        let code = subtag::title(code);
        let entry = ScriptEntry {
            subtag: code.clone(),
            description: bracketed(&record.description().unwrap_or_default()),
        };
        self.index.scripts.insert(code, entry);
    }

    fn add_variant(&mut self, record: &RegistryRecord) {
        let Some(code) = record.subtag() else {
            return;
        };
        let code = subtag::lower(code);
        let entry = VariantEntry {
            subtag: code.clone(),
            description: bracketed(&record.description().unwrap_or_default()),
            prefix: record.prefix().map(subtag::lower),
        };
        self.index.variants.insert(code, entry);
    }

    fn finish(self) -> RegistryIndex {
        self.index
    }
}

fn parse_range(code: &str, normalize: fn(&str) -> String) -> Option<SubtagRange> {
    let range = SubtagRange::parse(code, normalize);
    if range.is_none() {
        warn!(subtag = code, "ignoring malformed private-use range");
    }
    range
}

/// Script and variant names carry their own parentheses; swap them for
/// brackets so they nest inside a resolved description.
fn bracketed(description: &str) -> String {
    description.replace('(', "[").replace(')', "]").trim().to_string()
}
