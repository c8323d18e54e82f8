// SPDX-License-Identifier: PMPL-1.0-or-later

//! Caller-facing language lookup.
//!
//! Curated lists give the names people expect ("Greek", "Chinese (Taiwan)");
//! the registry covers everything else. [`LanguageLookup`] keeps two curated
//! lists: a short common list for language pickers, and an extended list
//! consulted for code and name lookups and right-to-left checks. Codes the
//! extended list does not carry fall back to the registry resolver.

use crate::i18n::iso639;
use crate::resolver::Resolver;
use crate::types::Language;

/// A curated list of display names, e.g. a locale's language picker.
pub trait LanguageList {
    fn languages(&self) -> &[Language];

    /// Exact-code lookup.
    fn find_code(&self, code: &str) -> Option<&Language> {
        self.languages().iter().find(|language| language.code == code)
    }

    /// Exact-name lookup.
    fn find_name(&self, description: &str) -> Option<&Language> {
        self.languages()
            .iter()
            .find(|language| language.description == description)
    }

    /// Whether the entry for `code` is marked right-to-left.
    fn is_bidi(&self, code: &str) -> bool {
        self.find_code(code).is_some_and(|language| language.bidi)
    }
}

impl LanguageList for Vec<Language> {
    fn languages(&self) -> &[Language] {
        self
    }
}

fn curated<'a>(entries: impl Iterator<Item = &'a (&'static str, &'static str)>) -> Vec<Language> {
    entries
        .map(|&(code, name)| Language::new(code, name).with_bidi(iso639::is_bidi(code)))
        .collect()
}

/// The built-in picker list, [`iso639::COMMON_LANGUAGES`].
#[derive(Debug, Clone)]
pub struct CommonLanguages {
    entries: Vec<Language>,
}

impl Default for CommonLanguages {
    fn default() -> Self {
        Self {
            entries: curated(iso639::COMMON_LANGUAGES.iter()),
        }
    }
}

impl LanguageList for CommonLanguages {
    fn languages(&self) -> &[Language] {
        &self.entries
    }
}

/// The built-in lookup list: the picker list plus
/// [`iso639::ADDITIONAL_LANGUAGES`].
#[derive(Debug, Clone)]
pub struct ExtendedLanguages {
    entries: Vec<Language>,
}

impl Default for ExtendedLanguages {
    fn default() -> Self {
        Self {
            entries: curated(
                iso639::COMMON_LANGUAGES
                    .iter()
                    .chain(iso639::ADDITIONAL_LANGUAGES),
            ),
        }
    }
}

impl LanguageList for ExtendedLanguages {
    fn languages(&self) -> &[Language] {
        &self.entries
    }
}

/// Curated lists first, registry second.
#[derive(Debug, Clone)]
pub struct LanguageLookup<C = CommonLanguages, E = ExtendedLanguages> {
    common: C,
    extended: E,
    resolver: Resolver,
}

impl LanguageLookup {
    pub fn new(resolver: Resolver) -> Self {
        Self::with_lists(
            CommonLanguages::default(),
            ExtendedLanguages::default(),
            resolver,
        )
    }
}

impl<L: LanguageList + Clone> LanguageLookup<L, L> {
    /// One list serving as both the picker list and the lookup list.
    pub fn with_list(list: L, resolver: Resolver) -> Self {
        Self::with_lists(list.clone(), list, resolver)
    }
}

impl<C: LanguageList, E: LanguageList> LanguageLookup<C, E> {
    pub fn with_lists(common: C, extended: E, resolver: Resolver) -> Self {
        Self {
            common,
            extended,
            resolver,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Extended-list entry for `code`, or a registry description of the tag.
    ///
    /// `None` when neither source recognizes the code.
    pub fn get_language(&self, code: &str) -> Option<Language> {
        if let Some(language) = self.extended.find_code(code) {
            return Some(language.clone());
        }
        let description = self.resolver.describe(code);
        if description.is_empty() {
            None
        } else {
            Some(Language::new(code, description))
        }
    }

    /// Canonical form of `code` per the registry; empty when unrecognized.
    pub fn normalize_code(&self, code: &str) -> String {
        self.resolver.normalize(code)
    }

    /// Reverse lookup over the extended list.
    pub fn language_from_name(&self, description: &str) -> Option<Language> {
        self.extended.find_name(description).cloned()
    }

    /// Common-list entries sorted by display name.
    ///
    /// Sorting is case-insensitive on the name, then by code; it is meant for
    /// presenting a list, not for locale-aware collation.
    pub fn languages_sorted(&self) -> Vec<Language> {
        let mut languages = self.common.languages().to_vec();
        languages.sort_by_cached_key(|language| {
            (language.description.to_lowercase(), language.code.clone())
        });
        languages
    }

    /// Display names of the common list, sorted.
    pub fn language_names(&self) -> Vec<String> {
        self.languages_sorted()
            .into_iter()
            .map(|language| language.description)
            .collect()
    }

    /// Right-to-left per the extended list; codes it lacks are not bidi.
    pub fn is_bidi(&self, code: &str) -> bool {
        self.extended.is_bidi(code)
    }

    pub fn is_cjk(&self, code: &str) -> bool {
        iso639::is_cjk(code)
    }
}
