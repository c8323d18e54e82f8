// SPDX-License-Identifier: PMPL-1.0-or-later

//! Curated ISO 639 language names.
//!
//! A short list of everyday language names consulted before the registry.
//! Registry descriptions are formal ("Modern Greek (1453-)", "Norwegian
//! Bokmål"); this list carries the names people expect in a language
//! picker, plus a few regional tags the registry would describe verbosely.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// `(code, English name)` pairs offered in language pickers, unsorted.
pub const COMMON_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-GB", "English (United Kingdom)"),
    ("en-US", "English (United States)"),
    ("es", "Spanish"),
    ("es-419", "Spanish (Latin America)"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nb", "Norwegian"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh-CN", "Chinese (China)"),
    ("zh-TW", "Chinese (Taiwan)"),
];

/// Curated names outside the picker list. Together with
/// [`COMMON_LANGUAGES`] they form the extended list used for code and name
/// lookups.
pub const ADDITIONAL_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("ckb", "Central Kurdish"),
    ("cy", "Welsh"),
    ("dv", "Divehi"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("hr", "Croatian"),
    ("hy", "Armenian"),
    ("is", "Icelandic"),
    ("ka", "Georgian"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("mt", "Maltese"),
    ("ps", "Pashto"),
    ("sd", "Sindhi"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("ug", "Uyghur"),
    ("ur", "Urdu"),
    ("yi", "Yiddish"),
    ("zh", "Chinese"),
];

/// Curated codes whose text runs right to left.
pub const BIDI_LANGUAGES: &[&str] = &["ar", "ckb", "dv", "fa", "he", "ps", "sd", "ug", "ur", "yi"];

/// Whether a curated code is written right to left. Exact match only.
pub fn is_bidi(code: &str) -> bool {
    BIDI_LANGUAGES.contains(&code)
}

/// Whether a tag belongs to a language written with CJK ideographs or
/// handled by CJK text layout (line breaking, width).
pub fn is_cjk(code: &str) -> bool {
    ["zh", "ja", "ko", "vi", "ain", "aib"]
        .iter()
        .any(|prefix| code.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = COMMON_LANGUAGES
            .iter()
            .chain(ADDITIONAL_LANGUAGES)
            .map(|(c, _)| *c)
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn bidi_codes_are_curated() {
        for code in BIDI_LANGUAGES {
            assert!(
                COMMON_LANGUAGES
                    .iter()
                    .chain(ADDITIONAL_LANGUAGES)
                    .any(|(c, _)| c == code),
                "{code} missing from curated lists"
            );
        }
    }

    #[test]
    fn bidi_detection_is_exact() {
        assert!(is_bidi("ar"));
        assert!(is_bidi("he"));
        assert!(is_bidi("ckb"));
        assert!(!is_bidi("en"));
        assert!(!is_bidi("ar-EG"));
        assert!(!is_bidi("AR"));
    }

    #[test]
    fn cjk_detection() {
        assert!(is_cjk("zh-Hant-TW"));
        assert!(is_cjk("ja"));
        assert!(is_cjk("ain"));
        assert!(!is_cjk("en"));
        assert!(!is_cjk("th"));
    }
}
