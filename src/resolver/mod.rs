// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tag description lookup and normalization.
//!
//! Both operations split a tag on `-`, accept one to three subtags, and
//! return an empty string when no recognized combination matches:
//!
//! | Subtags | Accepted combinations                                  |
//! |---------|--------------------------------------------------------|
//! | 1       | language                                               |
//! | 2       | language-region, language-script, language-variant     |
//! | 3       | language-script-region, language-script-variant,       |
//! |         | language-region-variant                                |
//!
//! A script equal to the language's `Suppress-Script` is rejected. Private
//! use languages, scripts and regions are accepted by range and described
//! with a localized placeholder.

pub mod resolution;

use crate::i18n::{t, Lang};
use crate::registry::RegistryIndex;

pub use resolution::{resolve, LanguagePart, Qualifier, RegionPart, Resolution, ScriptPart};

/// Placeholder used for private-use subtags when no language is chosen.
pub const PRIVATE_USE: &str = "Private use";

/// Describe `tag` using the English placeholder. Empty string means no match.
pub fn describe(index: &RegistryIndex, tag: &str) -> String {
    describe_with(index, tag, PRIVATE_USE)
}

/// Describe `tag`, rendering private-use subtags as `placeholder`.
pub fn describe_with(index: &RegistryIndex, tag: &str, placeholder: &str) -> String {
    resolve(index, tag)
        .map(|resolution| resolution.describe(placeholder))
        .unwrap_or_default()
}

/// Canonical form of `tag`. Empty string means no match.
pub fn normalize(index: &RegistryIndex, tag: &str) -> String {
    resolve(index, tag)
        .map(|resolution| resolution.canonical())
        .unwrap_or_default()
}

/// A loaded registry paired with the placeholder for its UI language.
#[derive(Debug, Clone)]
pub struct Resolver {
    index: RegistryIndex,
    placeholder: String,
}

impl Resolver {
    pub fn new(index: RegistryIndex) -> Self {
        Self::with_lang(index, Lang::default())
    }

    /// Private-use subtags are described in `lang`.
    pub fn with_lang(index: RegistryIndex, lang: Lang) -> Self {
        Self {
            index,
            placeholder: t(lang, "registry.private_use").to_string(),
        }
    }

    pub fn index(&self) -> &RegistryIndex {
        &self.index
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn describe(&self, tag: &str) -> String {
        describe_with(&self.index, tag, &self.placeholder)
    }

    pub fn normalize(&self, tag: &str) -> String {
        normalize(&self.index, tag)
    }

    pub fn file_date(&self) -> Option<&str> {
        self.index.file_date()
    }
}
