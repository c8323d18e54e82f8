// SPDX-License-Identifier: PMPL-1.0-or-later

//! Private-use subtag ranges.
//!
//! The registry reserves spans such as `qaa..qtz` for user assignment instead
//! of listing each code. Membership is an inclusive string comparison after
//! bringing the candidate into the range's case convention, restricted to
//! codes as long as the range bounds (`QMA` sorts between `QM` and `QZ` but
//! is not a private-use region).

use crate::subtag;
use serde::Serialize;

/// An inclusive lexicographic span of subtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtagRange {
    pub start: String,
    pub end: String,
}

impl SubtagRange {
    /// Parse a registry `start..end` subtag, normalizing both bounds.
    pub fn parse(subtag: &str, normalize: fn(&str) -> String) -> Option<Self> {
        let (start, end) = subtag.split_once("..")?;
        if start.is_empty() || end.is_empty() || end.contains("..") {
            return None;
        }
        Some(Self {
            start: normalize(start),
            end: normalize(end),
        })
    }

    /// `code` must already be in this range's case convention.
    pub fn contains(&self, code: &str) -> bool {
        self.has_bound_length(code)
            && code >= self.start.as_str()
            && code <= self.end.as_str()
    }

    fn has_bound_length(&self, code: &str) -> bool {
        let len = code.chars().count();
        len == self.start.chars().count() && len == self.end.chars().count()
    }
}

impl std::fmt::Display for SubtagRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Private-use spans for languages, scripts and regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrivateUseRanges {
    pub language: Option<SubtagRange>,
    pub script: Option<SubtagRange>,
    pub regions: Vec<SubtagRange>,
}

impl PrivateUseRanges {
    pub fn is_private_language(&self, code: &str) -> bool {
        self.language
            .as_ref()
            .is_some_and(|range| range.contains(&subtag::lower(code)))
    }

    pub fn is_private_script(&self, code: &str) -> bool {
        self.script
            .as_ref()
            .is_some_and(|range| range.contains(&subtag::title(code)))
    }

    pub fn is_private_region(&self, code: &str) -> bool {
        let code = subtag::upper(code);
        self.regions.iter().any(|range| range.contains(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_ranges() -> PrivateUseRanges {
        PrivateUseRanges {
            language: SubtagRange::parse("qaa..qtz", subtag::lower),
            script: SubtagRange::parse("Qaaa..Qabx", subtag::title),
            regions: vec![
                SubtagRange::parse("QM..QZ", subtag::upper).unwrap(),
                SubtagRange::parse("XA..XZ", subtag::upper).unwrap(),
            ],
        }
    }

    #[test]
    fn parse_normalizes_bounds() {
        let range = SubtagRange::parse("QAA..QTZ", subtag::lower).unwrap();
        assert_eq!(range.start, "qaa");
        assert_eq!(range.end, "qtz");
        assert_eq!(range.to_string(), "qaa..qtz");
    }

    #[test]
    fn parse_rejects_malformed_spans() {
        assert!(SubtagRange::parse("qaa", subtag::lower).is_none());
        assert!(SubtagRange::parse("..qtz", subtag::lower).is_none());
        assert!(SubtagRange::parse("qaa..", subtag::lower).is_none());
        assert!(SubtagRange::parse("a..b..c", subtag::lower).is_none());
    }

    #[test]
    fn language_range_is_case_insensitive() {
        let ranges = registry_ranges();
        assert!(ranges.is_private_language("qaa"));
        assert!(ranges.is_private_language("QTZ"));
        assert!(ranges.is_private_language("Qfx"));
        assert!(!ranges.is_private_language("qua"));
        assert!(!ranges.is_private_language("aaaa"));
        assert!(!ranges.is_private_language(""));
    }

    #[test]
    fn script_range_uses_title_case() {
        let ranges = registry_ranges();
        assert!(ranges.is_private_script("qaaa"));
        assert!(ranges.is_private_script("QABX"));
        assert!(!ranges.is_private_script("Qaby"));
        assert!(!ranges.is_private_script("Latn"));
        assert!(!ranges.is_private_script(""));
    }

    #[test]
    fn region_ranges_are_a_set() {
        let ranges = registry_ranges();
        assert!(ranges.is_private_region("qm"));
        assert!(ranges.is_private_region("XZ"));
        assert!(ranges.is_private_region("xk"));
        assert!(!ranges.is_private_region("QL"));
        assert!(!ranges.is_private_region("US"));
    }

    #[test]
    fn codes_longer_than_bounds_are_outside() {
        let ranges = registry_ranges();
        assert!(!ranges.is_private_region("QMA"));
        assert!(!ranges.is_private_region("xab"));
        assert!(!ranges.is_private_region("Q"));
        assert!(!ranges.is_private_language("qaab"));
        assert!(!ranges.is_private_language("qa"));
        assert!(!ranges.is_private_script("Qaaab"));
    }

    #[test]
    fn missing_ranges_never_match() {
        let ranges = PrivateUseRanges::default();
        assert!(!ranges.is_private_language("qaa"));
        assert!(!ranges.is_private_script("Qaaa"));
        assert!(!ranges.is_private_region("QM"));
    }
}
