// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end resolution: config -> registry -> resolver -> report

use std::fs;
use std::path::{Path, PathBuf};
use subtag_registry::config::Config;
use subtag_registry::i18n::Lang;
use subtag_registry::lookup::LanguageLookup;
use subtag_registry::report::{OutputFormat, TagResult};
use subtag_registry::{RegistryIndex, Resolver};

const TAGS: &[&str] = &[
    "en",
    "EN-us",
    "es-419",
    "sr-latn",
    "zh-Hant-TW",
    "zh-hans-cn",
    "de-1996",
    "de-AT-1901",
    "sr-Latn-ekavsk",
    "sl-rozaj",
    "qaa",
    "qaa-Latn",
    "qab-XA",
    "qaa-qma-1996",
    "qaa-XAB-x",
    "en-Qaaa",
    "en-QM",
    "en-Latn",
    "fr-1996",
    "xx",
    "en-US-",
    "",
    "a-b-c-d",
];

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/registry-sample.txt")
}

fn resolver(lang: Lang) -> Resolver {
    let index = RegistryIndex::from_path(&fixture_path()).expect("fixture registry should load");
    Resolver::with_lang(index, lang)
}

#[test]
fn test_describe_and_normalize_agree_on_matches() {
    let resolver = resolver(Lang::En);
    for tag in TAGS {
        assert_eq!(
            resolver.describe(tag).is_empty(),
            resolver.normalize(tag).is_empty(),
            "describe/normalize disagree on {:?}",
            tag
        );
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let resolver = resolver(Lang::En);
    for tag in TAGS {
        let once = resolver.normalize(tag);
        if once.is_empty() {
            continue;
        }
        assert_eq!(resolver.normalize(&once), once, "re-normalizing {}", once);
        assert_eq!(resolver.describe(&once), resolver.describe(tag));
    }
}

#[test]
fn test_resolution_is_case_insensitive() {
    let resolver = resolver(Lang::En);
    for tag in TAGS {
        assert_eq!(
            resolver.describe(&tag.to_uppercase()),
            resolver.describe(&tag.to_lowercase()),
            "case changed result for {}",
            tag
        );
    }
}

#[test]
fn test_known_tags_resolve() {
    let resolver = resolver(Lang::En);
    let results: Vec<TagResult> = ["zh-hant-tw", "de-at-1901", "qab-XA", "en-Latn"]
        .iter()
        .map(|tag| TagResult::resolve(&resolver, tag))
        .collect();

    assert_eq!(results[0].canonical, "zh-Hant-TW");
    assert_eq!(
        results[0].description,
        "Chinese (Han [Traditional variant], Taiwan, Province of China)"
    );
    assert_eq!(results[1].canonical, "de-AT-1901");
    assert_eq!(
        results[1].description,
        "German (Austria - Traditional German orthography)"
    );
    assert_eq!(results[2].canonical, "qab-XA");
    assert_eq!(results[2].description, "Private use (Private use)");
    assert!(!results[3].matched());
}

#[test]
fn test_localized_placeholder_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("subtags.yaml");
    fs::write(
        &config_path,
        format!("registry: {}\nlang: fr\n", fixture_path().display()),
    )
    .unwrap();

    let config = Config::load(&config_path)
        .unwrap()
        .with_env_from(|_| None)
        .with_overrides(None, None);
    let lang = config.ui_lang().unwrap();
    assert_eq!(lang, Lang::Fr);

    let index = RegistryIndex::from_path(&config.registry_path()).unwrap();
    let resolver = Resolver::with_lang(index, lang);
    assert_eq!(resolver.describe("qaa"), "Usage privé");
    assert_eq!(resolver.describe("en-XK"), "English (Usage privé)");
    assert_eq!(resolver.normalize("en-xk"), "en-XK");
}

#[test]
fn test_cli_overrides_win_over_config_and_env() {
    let config = Config {
        registry: Some(PathBuf::from("/from/config.txt")),
        lang: Some("de".to_string()),
    }
    .with_env_from(|key| match key {
        "SUBTAG_REGISTRY_LANG" => Some("ja".to_string()),
        _ => None,
    })
    .with_overrides(Some(fixture_path()), None);

    assert_eq!(config.registry_path(), fixture_path());
    assert_eq!(config.ui_lang().unwrap(), Lang::Ja);
}

#[test]
fn test_lookup_prefers_curated_names() {
    let lookup = LanguageLookup::new(resolver(Lang::En));
    assert_eq!(lookup.get_language("el").unwrap().description, "Greek");
    assert_eq!(
        lookup.get_language("zh-TW").unwrap().description,
        "Chinese (Taiwan)"
    );
    assert_eq!(
        lookup.get_language("de-AT").unwrap().description,
        "German (Austria)"
    );
    assert!(lookup.get_language("en-Latn").is_none());
    assert!(lookup.is_bidi("he"));
    assert!(!lookup.is_bidi("de-AT"));
    assert_eq!(lookup.language_from_name("Urdu").unwrap().code, "ur");
}

#[test]
fn test_json_report_carries_unmatched_tags() {
    let resolver = resolver(Lang::En);
    let results: Vec<TagResult> = ["en-GB", "en-US"]
        .iter()
        .map(|tag| TagResult::resolve(&resolver, tag))
        .collect();
    let json = OutputFormat::Json.render_results(&results, Lang::En).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["tag"], "en-GB");
    assert_eq!(parsed[0]["canonical"], "");
    assert_eq!(parsed[1]["description"], "English (United States)");
}
