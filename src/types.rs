// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for subtag-registry
//!
//! Typed registry entries produced by the loader and the resolved
//! [`Language`] record returned by the lookup facade.

use serde::{Deserialize, Serialize};

/// A registered primary language subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub subtag: String,
    pub description: String,
    /// Default script of the language; omitted when writing or describing tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_script: Option<String>,
}

/// A registered region subtag (ISO 3166 alpha-2 or UN M.49 numeric).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub subtag: String,
    pub description: String,
}

/// A registered script subtag, keyed in title case (`Hant`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub subtag: String,
    /// Parentheses from the registry are rewritten to square brackets.
    pub description: String,
}

/// A registered variant subtag with the language prefix it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantEntry {
    pub subtag: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl VariantEntry {
    /// Whether this variant may follow the given (lower-case) language code.
    ///
    /// Variants registered without a prefix never match.
    pub fn accepts_prefix(&self, language: &str) -> bool {
        self.prefix.as_deref() == Some(language)
    }
}

/// A code paired with a display name, as returned by the lookup facade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub description: String,
    /// Written right to left. Only curated entries carry the flag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bidi: bool,
}

impl Language {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            bidi: false,
        }
    }

    pub fn with_bidi(mut self, bidi: bool) -> Self {
        self.bidi = bidi;
        self
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_without_prefix_never_matches() {
        let variant = VariantEntry {
            subtag: "fonipa".to_string(),
            description: "International Phonetic Alphabet".to_string(),
            prefix: None,
        };
        assert!(!variant.accepts_prefix("en"));
        assert!(!variant.accepts_prefix(""));
    }

    #[test]
    fn variant_prefix_is_exact() {
        let variant = VariantEntry {
            subtag: "1996".to_string(),
            description: "German orthography of 1996".to_string(),
            prefix: Some("de".to_string()),
        };
        assert!(variant.accepts_prefix("de"));
        assert!(!variant.accepts_prefix("fr"));
        assert!(!variant.accepts_prefix("DE"));
    }

    #[test]
    fn languages_are_left_to_right_unless_marked() {
        let english = Language::new("en", "English");
        assert!(!english.bidi);
        let arabic = Language::new("ar", "Arabic").with_bidi(true);
        assert!(arabic.bidi);
        assert_eq!(arabic.to_string(), "Arabic (ar)");
    }

    #[test]
    fn bidi_flag_is_only_serialized_when_set() {
        let english = serde_json::to_value(Language::new("en", "English")).unwrap();
        assert!(english.get("bidi").is_none());
        let hebrew = serde_json::to_value(Language::new("he", "Hebrew").with_bidi(true)).unwrap();
        assert_eq!(hebrew["bidi"], true);
    }
}
