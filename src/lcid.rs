// SPDX-License-Identifier: PMPL-1.0-or-later

//! The packed 32-bit LCID value.
//!
//! Layout: bits 0..16 hold the language identifier, bits 16.. hold the sort
//! identifier. Raw values are accepted as-is since they usually come from
//! external documents; only the `(language, SortId)` form validates.

use crate::error::LcidError;
use crate::locale::Locale;
use crate::registry::{self, LanguageEntry};
use crate::sort::SortId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lcid(i32);

impl Lcid {
    /// Wrap a raw LCID without any validation.
    pub const fn from_raw(raw: i32) -> Self {
        Lcid(raw)
    }

    /// Pack a language and a numeric sort identifier. No validation.
    pub const fn new(language: u16, sort: u8) -> Self {
        Lcid(((sort as i32) << 16) | language as i32)
    }

    /// Pack a language with the default sort.
    pub const fn from_language(language: u16) -> Self {
        Lcid::new(language, 0)
    }

    /// Pack a language with a named sort, rejecting combinations the sort
    /// catalog does not allow.
    ///
    /// # Examples
    /// ```
    /// use lcid_locale::lcid::Lcid;
    /// use lcid_locale::sort::SortId;
    ///
    /// let lcid = Lcid::with_sort(0x0407, SortId::GermanPhoneBook).unwrap();
    /// assert_eq!(lcid.raw(), 0x0001_0407);
    /// assert!(Lcid::with_sort(0x0409, SortId::GermanPhoneBook).is_err());
    /// ```
    pub fn with_sort(language: u16, sort: SortId) -> Result<Self, LcidError> {
        let value = sort.validate(language)?;
        Ok(Lcid::new(language, value))
    }

    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Lower 16 bits.
    pub const fn language_id(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    pub const fn sort_id(&self) -> u8 {
        (((self.0 as u32) >> 16) & 0xFF) as u8
    }

    /// Registry row for the language part, ignoring the sort bits.
    pub fn language_entry(&self) -> Option<&'static LanguageEntry> {
        registry::lookup_by_code(self.language_id())
    }

    /// Best-effort conversion, see [`crate::locale::lcid_to_locale`].
    pub fn to_locale(&self) -> Option<Locale> {
        crate::locale::lcid_to_locale(Some(self.0))
    }
}

impl From<i32> for Lcid {
    fn from(raw: i32) -> Self {
        Lcid::from_raw(raw)
    }
}

impl From<Lcid> for i32 {
    fn from(lcid: Lcid) -> Self {
        lcid.raw()
    }
}

impl FromStr for Lcid {
    type Err = LcidError;

    /// Accepts decimal (`1033`, `-1`, `4294967295`) or `0x`-prefixed hex
    /// (`0x0409`). Both cover the full 32 bits; hex digits take no sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()
            }
            Some(_) => None,
            None => trimmed
                .parse::<i64>()
                .ok()
                .filter(|value| (i64::from(i32::MIN)..=i64::from(u32::MAX)).contains(value))
                .map(|value| value as u32),
        };
        parsed
            .map(|bits| Lcid::from_raw(bits as i32))
            .ok_or_else(|| LcidError::InvalidLcidLiteral(s.to_string()))
    }
}

impl std::fmt::Display for Lcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_language_and_sort() {
        let lcid = Lcid::new(0x0404, 3);
        assert_eq!(lcid.raw(), 0x0003_0404);
        assert_eq!(lcid.language_id(), 0x0404);
        assert_eq!(lcid.sort_id(), 3);
    }

    #[test]
    fn high_language_codes_do_not_sign_extend() {
        let lcid = Lcid::from_language(0xE40C);
        assert_eq!(lcid.raw(), 0x0000_E40C);
        assert_eq!(lcid.language_id(), 0xE40C);
        assert_eq!(lcid.sort_id(), 0);
    }

    #[test]
    fn raw_values_are_not_validated() {
        let lcid = Lcid::from_raw(-1);
        assert_eq!(lcid.language_id(), 0xFFFF);
        assert_eq!(lcid.sort_id(), 0xFF);
    }

    #[test]
    fn default_sort_matches_plain_language() {
        assert_eq!(
            Lcid::with_sort(0x0409, SortId::Default),
            Ok(Lcid::from_language(0x0409))
        );
    }

    #[test]
    fn restricted_sort_is_checked() {
        assert_eq!(
            Lcid::with_sort(0x0411, SortId::JapaneseRadicalStroke).map(|l| l.raw()),
            Ok(0x0004_0411)
        );
        assert_eq!(
            Lcid::with_sort(0x0804, SortId::JapaneseRadicalStroke),
            Err(LcidError::InvalidSortForLanguage {
                sort: SortId::JapaneseRadicalStroke,
                language: 0x0804,
            })
        );
    }

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!("1033".parse::<Lcid>(), Ok(Lcid::from_raw(0x0409)));
        assert_eq!("0x0409".parse::<Lcid>(), Ok(Lcid::from_raw(0x0409)));
        assert_eq!(" 0X10407 ".parse::<Lcid>(), Ok(Lcid::new(0x0407, 1)));
        assert_eq!("0xFFFFFFFF".parse::<Lcid>(), Ok(Lcid::from_raw(-1)));
        assert!(matches!(
            "en-US".parse::<Lcid>(),
            Err(LcidError::InvalidLcidLiteral(_))
        ));
    }

    #[test]
    fn decimal_and_hex_cover_the_same_range() {
        assert_eq!("4294967295".parse::<Lcid>(), "0xFFFFFFFF".parse::<Lcid>());
        assert_eq!("-2147483648".parse::<Lcid>(), Ok(Lcid::from_raw(i32::MIN)));
        assert_eq!("2147483648".parse::<Lcid>(), "0x80000000".parse::<Lcid>());
        for bad in ["4294967296", "-2147483649", "0x100000000", "0x+409", "0x-1", "0x"] {
            assert_eq!(
                bad.parse::<Lcid>(),
                Err(LcidError::InvalidLcidLiteral(bad.to_string())),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(Lcid::new(0x0407, 1).to_string(), "0x00010407");
    }
}
