// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language identifier registry.
//!
//! Maps the 16-bit language part of a Windows LCID to its canonical MS-style
//! locale string (`en_us`) and its BCP-47 tag (`en-US`), and back.
//!
//! ## Design
//!
//! The table is a compile-time static slice. Two indices, by code and by
//! tag, are built on first use behind a `OnceLock` and never mutated, so
//! lookups are lock-free after initialisation and safe from any thread.
//!
//! Tag lookup is exact and case-sensitive: `"en-US"` matches, `"en-us"` does
//! not. If two rows ever share a tag, the lower code wins.

mod table;

use crate::locale::{parse_ms_locale, Locale};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One row of the language identifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageEntry {
    code: u16,
    canonical: Option<&'static str>,
    tag: Option<&'static str>,
}

impl LanguageEntry {
    /// Numeric language identifier.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// MS-style locale string, e.g. `en_us`.
    pub fn canonical(&self) -> Option<&'static str> {
        self.canonical
    }

    /// BCP-47 tag, e.g. `en-US`.
    pub fn language_tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Locale built from the canonical string. `None` if the row has no
    /// canonical string or it does not parse.
    pub fn locale(&self) -> Option<Locale> {
        self.canonical.and_then(|ms| parse_ms_locale(ms).ok())
    }
}

/// MS ids allowed to appear without a tag. `fr-015` (French, North Africa)
/// is a UN M.49 region code that only exists in the MS form.
pub const UNTAGGED_MS_IDS: &[&str] = &["fr-015"];

struct Indices {
    by_code: HashMap<u16, &'static LanguageEntry>,
    by_tag: HashMap<&'static str, &'static LanguageEntry>,
}

static INDICES: OnceLock<Indices> = OnceLock::new();

fn indices() -> &'static Indices {
    INDICES.get_or_init(|| {
        let mut by_code = HashMap::with_capacity(table::LANGUAGE_TABLE.len());
        let mut by_tag = HashMap::with_capacity(table::LANGUAGE_TABLE.len());
        for entry in table::LANGUAGE_TABLE {
            by_code.entry(entry.code).or_insert(entry);
            if let Some(tag) = entry.tag {
                by_tag.entry(tag).or_insert(entry);
            }
        }
        Indices { by_code, by_tag }
    })
}

/// Exact match on the numeric language identifier.
///
/// # Examples
/// ```
/// use lcid_locale::registry::lookup_by_code;
/// assert_eq!(lookup_by_code(0x0409).and_then(|e| e.canonical()), Some("en_us"));
/// assert!(lookup_by_code(0x9999).is_none());
/// ```
pub fn lookup_by_code(code: u16) -> Option<&'static LanguageEntry> {
    indices().by_code.get(&code).copied()
}

/// Exact, case-sensitive match on the BCP-47 tag. Absent or empty input
/// yields `None`.
pub fn lookup_by_tag(tag: Option<&str>) -> Option<&'static LanguageEntry> {
    match tag {
        Some(tag) if !tag.is_empty() => indices().by_tag.get(tag).copied(),
        _ => None,
    }
}

/// All rows in ascending code order.
pub fn entries() -> &'static [LanguageEntry] {
    table::LANGUAGE_TABLE
}

pub fn len() -> usize {
    table::LANGUAGE_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_code() {
        for pair in entries().windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "0x{:04X} is not before 0x{:04X}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn every_code_resolves_to_itself() {
        for entry in entries() {
            let found = lookup_by_code(entry.code()).expect("table code should resolve");
            assert_eq!(found.code(), entry.code());
        }
    }

    #[test]
    fn known_rows() {
        let en = lookup_by_code(0x0409).expect("en-US");
        assert_eq!(en.canonical(), Some("en_us"));
        assert_eq!(en.language_tag(), Some("en-US"));

        let de = lookup_by_code(0x0407).expect("de-DE");
        assert_eq!(de.canonical(), Some("de_de"));
        assert_eq!(de.language_tag(), Some("de-DE"));

        let ar = lookup_by_code(0x0001).expect("ar");
        assert_eq!(ar.canonical(), Some("ar"));
    }

    #[test]
    fn blank_rows_carry_nothing() {
        let blank = lookup_by_code(0x007B).expect("0x007B is a known code");
        assert_eq!(blank.canonical(), None);
        assert_eq!(blank.language_tag(), None);
        assert_eq!(blank.locale(), None);
    }

    #[test]
    fn tag_lookup_is_exact() {
        assert_eq!(lookup_by_tag(Some("fr-FR")).map(|e| e.code()), Some(0x040C));
        assert!(lookup_by_tag(Some("fr-fr")).is_none());
        assert!(lookup_by_tag(Some("non-existent")).is_none());
        assert!(lookup_by_tag(Some("")).is_none());
        assert!(lookup_by_tag(None).is_none());
    }

    #[test]
    fn untagged_row_keeps_its_ms_id() {
        let entry = lookup_by_code(0xE40C).expect("0xE40C is a known code");
        assert_eq!(entry.canonical(), Some("fr-015"));
        assert_eq!(entry.language_tag(), None);
        assert!(lookup_by_tag(Some("fr-015")).is_none());
        assert_eq!(entry.locale(), Some(Locale::new("fr-015", "", "")));
    }

    #[test]
    fn entry_locale_normalises_case() {
        let locale = lookup_by_code(0x0409).and_then(|e| e.locale());
        assert_eq!(locale, Some(Locale::new("en", "US", "")));
    }
}
