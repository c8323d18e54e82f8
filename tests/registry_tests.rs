// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loader tests against the bundled registry excerpt

use std::fs;
use std::path::{Path, PathBuf};
use subtag_registry::RegistryIndex;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/registry-sample.txt")
}

fn load_fixture() -> RegistryIndex {
    RegistryIndex::from_path(&fixture_path()).expect("fixture registry should load")
}

#[test]
fn test_fixture_tables_are_populated() {
    let index = load_fixture();
    assert_eq!(index.file_date(), Some("2024-03-07"));
    assert_eq!(index.language_count(), 11);
    assert_eq!(index.region_count(), 12);
    assert_eq!(index.script_count(), 6);
    assert_eq!(index.variant_count(), 7);
}

#[test]
fn test_private_ranges_are_collected() {
    let index = load_fixture();
    let ranges = index.private_ranges();
    assert_eq!(
        ranges.language.as_ref().map(ToString::to_string),
        Some("qaa..qtz".to_string())
    );
    assert_eq!(
        ranges.script.as_ref().map(ToString::to_string),
        Some("Qaaa..Qabx".to_string())
    );
    let regions: Vec<String> = ranges.regions.iter().map(ToString::to_string).collect();
    assert_eq!(regions, vec!["QM..QZ", "XA..XZ"]);
}

#[test]
fn test_every_registered_subtag_describes_itself() {
    let index = load_fixture();
    for language in index.languages() {
        assert_eq!(
            subtag_registry::describe(&index, &language.subtag),
            language.description,
            "bare subtag {}",
            language.subtag
        );
        assert_eq!(
            subtag_registry::describe(&index, &language.subtag.to_uppercase()),
            language.description,
            "upper-cased subtag {}",
            language.subtag
        );
    }
}

#[test]
fn test_multi_name_languages_keep_first_name() {
    let index = load_fixture();
    assert_eq!(index.language("nds").unwrap().description, "Low German");
    assert_eq!(index.language("gsw").unwrap().description, "Swiss German");
}

#[test]
fn test_wrapped_comment_does_not_leak_into_description() {
    let index = load_fixture();
    let biske = index.variant("biske").unwrap();
    assert_eq!(
        biske.description,
        "The San Giorgio dialect of Resian | The Bila dialect of Resian"
    );
    assert_eq!(biske.prefix.as_deref(), Some("sl-rozaj"));
}

#[test]
fn test_grandfathered_and_redundant_records_are_ignored() {
    let index = load_fixture();
    assert!(index.language("i-klingon").is_none());
    assert!(index.language("zh-Hant-TW").is_none());
    assert!(index.language("yue").is_none());
}

#[test]
fn test_last_record_without_separator_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.txt");
    fs::write(
        &path,
        "File-Date: 2025-01-01\n%%\nType: region\nSubtag: NZ\nDescription: New Zealand\nAdded: 2005-10-16",
    )
    .unwrap();
    let index = RegistryIndex::from_path(&path).unwrap();
    assert_eq!(index.region("nz").unwrap().description, "New Zealand");
}

#[test]
fn test_crlf_line_endings_are_accepted() {
    let text = fs::read_to_string(fixture_path()).unwrap().replace('\n', "\r\n");
    let index = RegistryIndex::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(index.file_date(), Some("2024-03-07"));
    assert_eq!(index.language("en").unwrap().description, "English");
    assert_eq!(
        index.language("en").unwrap().suppress_script.as_deref(),
        Some("Latn")
    );
}

#[test]
fn test_unreadable_source_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = RegistryIndex::from_path(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains(&dir.path().display().to_string()));
}
