// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry self-check.

use crate::locale::parse_ms_locale;
use crate::registry::{self, LanguageEntry, UNTAGGED_MS_IDS};
use crate::sort::SortId;
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::HashMap;

pub fn run_registry_check() -> Result<()> {
    println!("{}", "lcid registry self-check".bold().cyan());

    let checks = check_registry();

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("registry self-check reported issues"))
    } else {
        Ok(())
    }
}

pub fn check_registry() -> Vec<Diagnostic> {
    let entries = registry::entries();
    vec![
        Diagnostic::ok(
            "version",
            format!("lcid-locale {}", env!("CARGO_PKG_VERSION")),
        ),
        check_unique_codes(entries),
        check_unique_tags(entries),
        check_canonical_parses(entries),
        check_canonical_has_tag(entries),
        check_canonical_matches_tag(entries),
        check_sort_restrictions(),
        count_blank_rows(entries),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn hex_list(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|code| format!("0x{:04X}", code))
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_unique_codes(entries: &[LanguageEntry]) -> Diagnostic {
    let mut seen: HashMap<u16, usize> = HashMap::new();
    for entry in entries {
        *seen.entry(entry.code()).or_default() += 1;
    }
    let mut duplicates: Vec<u16> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(code, _)| code)
        .collect();
    duplicates.sort_unstable();

    if duplicates.is_empty() {
        Diagnostic::ok("unique codes", format!("{} rows", entries.len()))
    } else {
        Diagnostic::error(
            "unique codes",
            format!("duplicated: {}", hex_list(&duplicates)),
        )
    }
}

fn check_unique_tags(entries: &[LanguageEntry]) -> Diagnostic {
    let mut owners: HashMap<&str, Vec<u16>> = HashMap::new();
    for entry in entries {
        if let Some(tag) = entry.language_tag() {
            owners.entry(tag).or_default().push(entry.code());
        }
    }
    let mut clashes: Vec<String> = owners
        .iter()
        .filter(|(_, codes)| codes.len() > 1)
        .map(|(tag, codes)| format!("{} ({})", tag, hex_list(codes)))
        .collect();
    clashes.sort();

    if clashes.is_empty() {
        Diagnostic::ok("unique tags", format!("{} tags", owners.len()))
    } else {
        Diagnostic::error("unique tags", format!("shared: {}", clashes.join("; ")))
    }
}

fn check_canonical_parses(entries: &[LanguageEntry]) -> Diagnostic {
    let broken: Vec<u16> = entries
        .iter()
        .filter(|entry| {
            entry
                .canonical()
                .is_some_and(|ms| parse_ms_locale(ms).is_err())
        })
        .map(|entry| entry.code())
        .collect();

    if broken.is_empty() {
        Diagnostic::ok("canonical strings", "all parse".to_string())
    } else {
        Diagnostic::error(
            "canonical strings",
            format!("unparsable: {}", hex_list(&broken)),
        )
    }
}

fn check_canonical_has_tag(entries: &[LanguageEntry]) -> Diagnostic {
    let untagged: Vec<u16> = entries
        .iter()
        .filter(|entry| {
            entry.language_tag().is_none()
                && entry
                    .canonical()
                    .is_some_and(|ms| !UNTAGGED_MS_IDS.contains(&ms))
        })
        .map(|entry| entry.code())
        .collect();

    if untagged.is_empty() {
        Diagnostic::ok("tag coverage", "every canonical string has a tag".to_string())
    } else {
        Diagnostic::error(
            "tag coverage",
            format!("missing tag: {}", hex_list(&untagged)),
        )
    }
}

/// `az-Latn-AZ`, `zh-Hans`: the script has no slot in the MS form.
fn has_script_subtag(tag: &str) -> bool {
    tag.split('-')
        .skip(1)
        .any(|subtag| subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
}

fn check_canonical_matches_tag(entries: &[LanguageEntry]) -> Diagnostic {
    let mut script_rows = 0usize;
    let mut mismatched = Vec::new();
    for entry in entries {
        let (Some(ms), Some(tag)) = (entry.canonical(), entry.language_tag()) else {
            continue;
        };
        let Ok(locale) = parse_ms_locale(ms) else {
            continue;
        };
        if locale.to_language_tag() == tag {
            continue;
        }
        if has_script_subtag(tag) {
            script_rows += 1;
        } else {
            mismatched.push(entry.code());
        }
    }

    if mismatched.is_empty() {
        Diagnostic::ok(
            "canonical/tag match",
            format!("{} script-tagged rows exempt", script_rows),
        )
    } else {
        Diagnostic::warning(
            "canonical/tag match",
            format!("diverging: {}", hex_list(&mismatched)),
        )
    }
}

fn check_sort_restrictions() -> Diagnostic {
    let mut unknown = Vec::new();
    for sort in SortId::all() {
        for code in sort.restricted_languages().unwrap_or_default() {
            if registry::lookup_by_code(*code).is_none() {
                unknown.push(*code);
            }
        }
    }
    unknown.sort_unstable();
    unknown.dedup();

    if unknown.is_empty() {
        Diagnostic::ok(
            "sort restrictions",
            format!("{} sorts reference known codes", SortId::all().len()),
        )
    } else {
        Diagnostic::error(
            "sort restrictions",
            format!("unknown codes: {}", hex_list(&unknown)),
        )
    }
}

fn count_blank_rows(entries: &[LanguageEntry]) -> Diagnostic {
    let blank = entries
        .iter()
        .filter(|entry| entry.canonical().is_none() && entry.language_tag().is_none())
        .count();
    Diagnostic::ok("placeholder rows", format!("{} without locale data", blank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_passes() {
        for diagnostic in check_registry() {
            assert_eq!(
                diagnostic.level,
                Level::Ok,
                "{}: {}",
                diagnostic.label,
                diagnostic.detail
            );
        }
    }

    #[test]
    fn script_subtags_detected() {
        assert!(has_script_subtag("zh-Hans"));
        assert!(has_script_subtag("sr-Latn-CS"));
        assert!(!has_script_subtag("es-ES-tradnl"));
        assert!(!has_script_subtag("en-029"));
        assert!(!has_script_subtag("haw"));
    }
}
