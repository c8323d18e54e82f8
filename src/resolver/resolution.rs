// SPDX-License-Identifier: PMPL-1.0-or-later

//! Branch selection shared by description lookup and normalization.
//!
//! [`resolve`] walks the subtag-combination rules once and returns a
//! [`Resolution`] naming which registry entries (or private-use codes)
//! matched. Descriptions and canonical tags are both rendered from that
//! value, so the two can never disagree on whether a tag matched.

use crate::registry::RegistryIndex;
use crate::subtag::{self, SubtagShape};
use crate::types::{LanguageEntry, RegionEntry, ScriptEntry, VariantEntry};

/// Primary language subtag, registered or inside the private-use range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguagePart<'a> {
    Registered(&'a LanguageEntry),
    /// Lower-cased private-use code.
    Private(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptPart<'a> {
    Registered(&'a ScriptEntry),
    /// Title-cased private-use code.
    Private(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionPart<'a> {
    Registered(&'a RegionEntry),
    /// Upper-cased private-use code.
    Private(String),
}

/// What followed the language subtag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier<'a> {
    /// Bare language, or a private-use language whose remaining subtags
    /// cannot be validated.
    None,
    Region(RegionPart<'a>),
    Script(ScriptPart<'a>),
    Variant(&'a VariantEntry),
    ScriptRegion(ScriptPart<'a>, RegionPart<'a>),
    ScriptVariant(ScriptPart<'a>, &'a VariantEntry),
    RegionVariant(RegionPart<'a>, &'a VariantEntry),
}

/// A tag that matched one of the recognized subtag combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub language: LanguagePart<'a>,
    pub qualifier: Qualifier<'a>,
}

impl<'a> Resolution<'a> {
    fn new(language: LanguagePart<'a>, qualifier: Qualifier<'a>) -> Self {
        Self {
            language,
            qualifier,
        }
    }

    /// Human-readable description; private-use parts render as `placeholder`.
    pub fn describe(&self, placeholder: &str) -> String {
        let language = self.language.description(placeholder);
        match &self.qualifier {
            Qualifier::None => language.to_string(),
            Qualifier::Region(r) => format!("{} ({})", language, r.description(placeholder)),
            Qualifier::Script(s) => format!("{} ({})", language, s.description(placeholder)),
            Qualifier::Variant(v) => format!("{} ({})", language, v.description),
            Qualifier::ScriptRegion(s, r) => format!(
                "{} ({}, {})",
                language,
                s.description(placeholder),
                r.description(placeholder)
            ),
            Qualifier::ScriptVariant(s, v) => format!(
                "{} ({}, {})",
                language,
                s.description(placeholder),
                v.description
            ),
            Qualifier::RegionVariant(r, v) => format!(
                "{} ({} - {})",
                language,
                r.description(placeholder),
                v.description
            ),
        }
    }

    /// Canonical tag: language lower, script title, region upper (or its
    /// UN code), variant as registered.
    pub fn canonical(&self) -> String {
        let mut parts = vec![self.language.code()];
        match &self.qualifier {
            Qualifier::None => {}
            Qualifier::Region(r) => parts.push(r.code()),
            Qualifier::Script(s) => parts.push(s.code()),
            Qualifier::Variant(v) => parts.push(&v.subtag),
            Qualifier::ScriptRegion(s, r) => parts.extend([s.code(), r.code()]),
            Qualifier::ScriptVariant(s, v) => parts.extend([s.code(), v.subtag.as_str()]),
            Qualifier::RegionVariant(r, v) => parts.extend([r.code(), v.subtag.as_str()]),
        }
        parts.join("-")
    }
}

impl LanguagePart<'_> {
    pub fn code(&self) -> &str {
        match self {
            Self::Registered(entry) => &entry.subtag,
            Self::Private(code) => code,
        }
    }

    pub fn description<'s>(&'s self, placeholder: &'s str) -> &'s str {
        match self {
            Self::Registered(entry) => &entry.description,
            Self::Private(_) => placeholder,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

impl ScriptPart<'_> {
    pub fn code(&self) -> &str {
        match self {
            Self::Registered(entry) => &entry.subtag,
            Self::Private(code) => code,
        }
    }

    pub fn description<'s>(&'s self, placeholder: &'s str) -> &'s str {
        match self {
            Self::Registered(entry) => &entry.description,
            Self::Private(_) => placeholder,
        }
    }
}

impl RegionPart<'_> {
    pub fn code(&self) -> &str {
        match self {
            Self::Registered(entry) => &entry.subtag,
            Self::Private(code) => code,
        }
    }

    pub fn description<'s>(&'s self, placeholder: &'s str) -> &'s str {
        match self {
            Self::Registered(entry) => &entry.description,
            Self::Private(_) => placeholder,
        }
    }
}

/// Match `tag` against the registry. `None` means no recognized pattern.
///
/// Tags with more than three subtags are never matched.
pub fn resolve<'a>(index: &'a RegistryIndex, tag: &str) -> Option<Resolution<'a>> {
    let parts: Vec<&str> = tag.split('-').collect();
    match parts.as_slice() {
        [language] => {
            let language = resolve_language(index, language)?;
            Some(Resolution::new(language, Qualifier::None))
        }
        [language, second] => resolve_pair(index, language, second),
        [language, second, third] => resolve_triple(index, language, second, third),
        _ => None,
    }
}

fn resolve_language<'a>(index: &'a RegistryIndex, code: &str) -> Option<LanguagePart<'a>> {
    if let Some(entry) = index.language(code) {
        Some(LanguagePart::Registered(entry))
    } else if index.is_private_language(code) {
        Some(LanguagePart::Private(subtag::lower(code)))
    } else {
        None
    }
}

fn resolve_region<'a>(index: &'a RegistryIndex, code: &str) -> Option<RegionPart<'a>> {
    if let Some(entry) = index.region(code) {
        Some(RegionPart::Registered(entry))
    } else if index.is_private_region(code) {
        Some(RegionPart::Private(subtag::upper(code)))
    } else {
        None
    }
}

fn resolve_script<'a>(index: &'a RegistryIndex, code: &str) -> Option<ScriptPart<'a>> {
    if let Some(entry) = index.script(code) {
        Some(ScriptPart::Registered(entry))
    } else if index.is_private_script(code) {
        Some(ScriptPart::Private(subtag::title(code)))
    } else {
        None
    }
}

/// Variants only attach to registered languages named by their prefix.
fn resolve_variant<'a>(
    index: &'a RegistryIndex,
    language: &LanguagePart<'_>,
    code: &str,
) -> Option<&'a VariantEntry> {
    let LanguagePart::Registered(entry) = language else {
        return None;
    };
    index
        .variant(code)
        .filter(|variant| variant.accepts_prefix(&entry.subtag))
}

fn is_suppressed(language: &LanguagePart<'_>, script: &str) -> bool {
    match language {
        LanguagePart::Registered(entry) => entry.suppress_script.as_deref() == Some(script),
        LanguagePart::Private(_) => false,
    }
}

fn resolve_pair<'a>(
    index: &'a RegistryIndex,
    language: &str,
    second: &str,
) -> Option<Resolution<'a>> {
    let language = resolve_language(index, language)?;
    match SubtagShape::classify(second) {
        SubtagShape::Region2 => {
            if let Some(region) = resolve_region(index, second) {
                return Some(Resolution::new(language, Qualifier::Region(region)));
            }
        }
        SubtagShape::Region3 => {
            // UN codes have no private-use span.
            if let Some(entry) = index.region(second) {
                let region = RegionPart::Registered(entry);
                return Some(Resolution::new(language, Qualifier::Region(region)));
            }
        }
        SubtagShape::Script => {
            if is_suppressed(&language, &subtag::title(second)) {
                return None;
            }
            if let Some(script) = resolve_script(index, second) {
                return Some(Resolution::new(language, Qualifier::Script(script)));
            }
            // Four-character variants such as `1996` land here.
        }
        SubtagShape::Other => {}
    }
    if let Some(variant) = resolve_variant(index, &language, second) {
        return Some(Resolution::new(language, Qualifier::Variant(variant)));
    }
    language
        .is_private()
        .then(|| Resolution::new(language, Qualifier::None))
}

fn resolve_triple<'a>(
    index: &'a RegistryIndex,
    language: &str,
    second: &str,
    third: &str,
) -> Option<Resolution<'a>> {
    let language = resolve_language(index, language)?;
    let shape = SubtagShape::classify(second);

    if shape == SubtagShape::Script {
        if is_suppressed(&language, &subtag::title(second)) {
            return None;
        }
        let script = resolve_script(index, second)?;
        if let Some(region) = resolve_region(index, third) {
            return Some(Resolution::new(
                language,
                Qualifier::ScriptRegion(script, region),
            ));
        }
        let variant = resolve_variant(index, &language, third)?;
        return Some(Resolution::new(
            language,
            Qualifier::ScriptVariant(script, variant),
        ));
    }

    if !shape.is_region() {
        return None;
    }
    let region = resolve_region(index, second)?;
    if let Some(variant) = resolve_variant(index, &language, third) {
        return Some(Resolution::new(
            language,
            Qualifier::RegionVariant(region, variant),
        ));
    }
    // Private-use languages keep the region and drop the unverifiable variant.
    language
        .is_private()
        .then(|| Resolution::new(language, Qualifier::Region(region)))
}
