// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry index consistency.

use lcid_locale::diagnostics::{check_registry, Level};
use lcid_locale::registry::{entries, lookup_by_code, lookup_by_tag, UNTAGGED_MS_IDS};

#[test]
fn test_lookup_by_code_covers_table() {
    for entry in entries() {
        let found = lookup_by_code(entry.code()).expect("code from the table");
        assert_eq!(found.code(), entry.code());
        assert_eq!(found, entry);
    }
}

#[test]
fn test_tag_round_trip() {
    for entry in entries() {
        if let Some(tag) = entry.language_tag() {
            let found = lookup_by_tag(Some(tag)).expect("tag from the table");
            assert_eq!(
                found.code(),
                entry.code(),
                "tag {} resolved to 0x{:04X}",
                tag,
                found.code()
            );
            assert_eq!(lookup_by_code(entry.code()).and_then(|e| e.language_tag()), Some(tag));
        }
    }
}

#[test]
fn test_canonical_implies_tag() {
    for entry in entries() {
        if let Some(ms) = entry.canonical() {
            if UNTAGGED_MS_IDS.contains(&ms) {
                continue;
            }
            assert!(
                entry.language_tag().is_some(),
                "0x{:04X} has canonical string '{}' but no tag",
                entry.code(),
                ms
            );
        }
    }
}

#[test]
fn test_every_canonical_string_yields_a_locale() {
    for entry in entries().iter().filter(|e| e.canonical().is_some()) {
        assert!(
            entry.locale().is_some(),
            "0x{:04X} canonical string does not parse",
            entry.code()
        );
    }
}

#[test]
fn test_language_families() {
    let chinese = [(0x0004, "zh-Hans"), (0x0404, "zh-TW"), (0x0804, "zh-CN"), (0x0C04, "zh-HK")];
    let arabic = [(0x0001, "ar"), (0x0401, "ar-SA"), (0x0801, "ar-IQ"), (0x0C01, "ar-EG")];
    let english = [(0x0409, "en-US"), (0x0809, "en-GB"), (0x0C09, "en-AU")];
    for (code, tag) in chinese.iter().chain(&arabic).chain(&english) {
        assert_eq!(
            lookup_by_code(*code).and_then(|e| e.language_tag()),
            Some(*tag)
        );
    }
}

#[test]
fn test_self_check_is_clean() {
    let findings: Vec<_> = check_registry()
        .into_iter()
        .filter(|d| d.level != Level::Ok)
        .map(|d| format!("{}: {}", d.label, d.detail))
        .collect();
    assert!(findings.is_empty(), "self-check findings: {:?}", findings);
}
