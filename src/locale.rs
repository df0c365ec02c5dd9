// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structured locales and the LCID → locale conversion.
//!
//! The conversion is best-effort: an unknown code, a code without locale
//! data, or a canonical string that does not parse all produce `None`.
//! [`resolve`] exposes the same path with the failure reason attached.

use crate::error::LcidError;
use crate::registry;
use serde::{Deserialize, Serialize};

/// Language, country (region) and variant.
///
/// Construction normalises case: the language is lowercased, the country
/// uppercased, the variant kept verbatim. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country.to_ascii_uppercase(),
            variant: variant.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// BCP-47 form: non-empty parts joined with `-`.
    ///
    /// ```
    /// use lcid_locale::locale::Locale;
    /// assert_eq!(Locale::new("en", "us", "").to_language_tag(), "en-US");
    /// assert_eq!(Locale::new("es", "ES", "tradnl").to_language_tag(), "es-ES-tradnl");
    /// ```
    pub fn to_language_tag(&self) -> String {
        [
            self.language.as_str(),
            self.country.as_str(),
            self.variant.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
    }
}

impl std::fmt::Display for Locale {
    /// Underscore form: `en`, `en_US`, `en_US_POSIX`, `en__POSIX`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

/// Parse an MS-style `language[_country[_variant]]` string.
///
/// Field contents are not validated. Trailing empty fields are dropped, so
/// `"en_"` is a language-only locale; an empty string or more than three
/// fields is an error.
pub fn parse_ms_locale(value: &str) -> Result<Locale, LcidError> {
    let mut fields: Vec<&str> = value.split('_').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    match fields.as_slice() {
        [language] => Ok(Locale::new(language, "", "")),
        [language, country] => Ok(Locale::new(language, country, "")),
        [language, country, variant] => Ok(Locale::new(language, country, variant)),
        _ => Err(LcidError::MalformedLocaleString(value.to_string())),
    }
}

/// Convert an LCID, reporting why it failed.
///
/// Only the lower 16 bits take part in the lookup; sort bits are ignored.
pub fn resolve(lcid: i32) -> Result<Locale, LcidError> {
    let code = (lcid & 0xFFFF) as u16;
    let entry = registry::lookup_by_code(code).ok_or(LcidError::UnknownLanguageCode(code))?;
    let canonical = entry
        .canonical()
        .ok_or(LcidError::NoCanonicalString(code))?;
    parse_ms_locale(canonical)
}

/// Best-effort LCID → locale conversion.
///
/// # Examples
/// ```
/// use lcid_locale::locale::{lcid_to_locale, Locale};
/// assert_eq!(lcid_to_locale(Some(0x0409)), Some(Locale::new("en", "US", "")));
/// assert_eq!(lcid_to_locale(Some(0x9999)), None);
/// assert_eq!(lcid_to_locale(None), None);
/// ```
pub fn lcid_to_locale(lcid: Option<i32>) -> Option<Locale> {
    lcid.and_then(|value| resolve(value).ok())
}
