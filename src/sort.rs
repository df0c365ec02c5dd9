// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sort identifier catalog.
//!
//! A Windows LCID carries a sort identifier next to its language identifier.
//! Almost every language only ever uses the default sort (0); the handful of
//! alternate collations below are tied to specific language identifiers and
//! must not be combined with any other.
//!
//! Several variants share a numeric value: `0` is the default order for the
//! language, so `SORT_CHINESE_BIG5` and `SORT_KOREAN_KSC` are both `0` but
//! only legal for their own languages.

use crate::error::LcidError;
use serde::{Deserialize, Serialize};

/// A named sort identifier from the Windows LCID catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortId {
    // 0x0
    ChineseBig5,
    ChinesePrcp,
    Default,
    GeorgianTraditional,
    HungarianDefault,
    JapaneseXjis,
    KoreanKsc,

    // 0x1
    GeorgianModern,
    GermanPhoneBook,
    HungarianTechnical,

    // 0x2, 0x3
    ChinesePrc,
    ChineseBopomofo,

    // 0x4
    ChineseRadicalStroke,
    JapaneseRadicalStroke,
}

impl SortId {
    /// Numeric sort identifier stored in bits 16.. of an LCID.
    pub fn value(&self) -> u8 {
        match self {
            SortId::ChineseBig5
            | SortId::ChinesePrcp
            | SortId::Default
            | SortId::GeorgianTraditional
            | SortId::HungarianDefault
            | SortId::JapaneseXjis
            | SortId::KoreanKsc => 0x0,
            SortId::GeorgianModern | SortId::GermanPhoneBook | SortId::HungarianTechnical => 0x1,
            SortId::ChinesePrc => 0x2,
            SortId::ChineseBopomofo => 0x3,
            SortId::ChineseRadicalStroke | SortId::JapaneseRadicalStroke => 0x4,
        }
    }

    /// Language identifiers allowed to use this sort.
    ///
    /// `None` means unrestricted, which only holds for [`SortId::Default`].
    /// Every other variant returns a non-empty slice.
    pub fn restricted_languages(&self) -> Option<&'static [u16]> {
        match self {
            SortId::Default => None,
            SortId::ChineseBig5 | SortId::ChineseRadicalStroke => Some(&[0x0404, 0x0C04, 0x1404]),
            SortId::ChinesePrcp | SortId::ChinesePrc => Some(&[0x0804, 0x1004]),
            SortId::ChineseBopomofo => Some(&[0x0404]),
            SortId::GeorgianTraditional | SortId::GeorgianModern => Some(&[0x0437]),
            SortId::HungarianDefault | SortId::HungarianTechnical => Some(&[0x040E]),
            SortId::JapaneseXjis | SortId::JapaneseRadicalStroke => Some(&[0x0411]),
            SortId::KoreanKsc => Some(&[0x0412]),
            SortId::GermanPhoneBook => Some(&[0x0407]),
        }
    }

    /// Returns the sort value if `language` may use this sort.
    ///
    /// # Examples
    /// ```
    /// use lcid_locale::sort::SortId;
    /// assert_eq!(SortId::GermanPhoneBook.validate(0x0407), Ok(1));
    /// assert!(SortId::GermanPhoneBook.validate(0x0409).is_err());
    /// assert_eq!(SortId::Default.validate(0x0409), Ok(0));
    /// ```
    pub fn validate(&self, language: u16) -> Result<u8, LcidError> {
        match self.restricted_languages() {
            None => Ok(self.value()),
            Some(allowed) if allowed.contains(&language) => Ok(self.value()),
            Some(_) => Err(LcidError::InvalidSortForLanguage {
                sort: *self,
                language,
            }),
        }
    }

    /// Catalog name, e.g. `SORT_GERMAN_PHONE_BOOK`.
    pub fn name(&self) -> &'static str {
        match self {
            SortId::ChineseBig5 => "SORT_CHINESE_BIG5",
            SortId::ChinesePrcp => "SORT_CHINESE_PRCP",
            SortId::Default => "SORT_DEFAULT",
            SortId::GeorgianTraditional => "SORT_GEORGIAN_TRADITIONAL",
            SortId::HungarianDefault => "SORT_HUNGARIAN_DEFAULT",
            SortId::JapaneseXjis => "SORT_JAPANESE_XJIS",
            SortId::KoreanKsc => "SORT_KOREAN_KSC",
            SortId::GeorgianModern => "SORT_GEORGIAN_MODERN",
            SortId::GermanPhoneBook => "SORT_GERMAN_PHONE_BOOK",
            SortId::HungarianTechnical => "SORT_HUNGARIAN_TECHNICAL",
            SortId::ChinesePrc => "SORT_CHINESE_PRC",
            SortId::ChineseBopomofo => "SORT_CHINESE_BOPOMOFO",
            SortId::ChineseRadicalStroke => "SORT_CHINESE_RADICALSTROKE",
            SortId::JapaneseRadicalStroke => "SORT_JAPANESE_RADICALSTROKE",
        }
    }

    /// Parse a catalog name. Accepts the `SORT_` prefix or not, any case,
    /// with `-` or `_` as separator.
    pub fn from_name(name: &str) -> Option<SortId> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        let wanted = if normalized.starts_with("SORT_") {
            normalized
        } else {
            format!("SORT_{}", normalized)
        };
        SortId::all()
            .iter()
            .copied()
            .find(|sort| sort.name() == wanted)
    }

    /// Every catalog entry, grouped by numeric value.
    pub fn all() -> &'static [SortId] {
        &[
            SortId::ChineseBig5,
            SortId::ChinesePrcp,
            SortId::Default,
            SortId::GeorgianTraditional,
            SortId::HungarianDefault,
            SortId::JapaneseXjis,
            SortId::KoreanKsc,
            SortId::GeorgianModern,
            SortId::GermanPhoneBook,
            SortId::HungarianTechnical,
            SortId::ChinesePrc,
            SortId::ChineseBopomofo,
            SortId::ChineseRadicalStroke,
            SortId::JapaneseRadicalStroke,
        ]
    }
}

impl Default for SortId {
    fn default() -> Self {
        SortId::Default
    }
}

impl std::fmt::Display for SortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_accepts_any_language() {
        for language in [0x0000, 0x0409, 0x0407, 0x9999, 0xFFFF] {
            assert_eq!(SortId::Default.validate(language), Ok(0));
        }
    }

    #[test]
    fn german_phone_book_is_german_only() {
        assert_eq!(SortId::GermanPhoneBook.validate(0x0407), Ok(1));
        for language in [0x0409, 0x0807, 0x0C07, 0x040C] {
            assert_eq!(
                SortId::GermanPhoneBook.validate(language),
                Err(LcidError::InvalidSortForLanguage {
                    sort: SortId::GermanPhoneBook,
                    language,
                })
            );
        }
    }

    #[test]
    fn zero_valued_sorts_are_still_restricted() {
        assert_eq!(SortId::KoreanKsc.value(), 0);
        assert!(SortId::KoreanKsc.validate(0x0412).is_ok());
        assert!(SortId::KoreanKsc.validate(0x0411).is_err());
    }

    #[test]
    fn only_default_is_unrestricted() {
        for sort in SortId::all() {
            match sort.restricted_languages() {
                None => assert_eq!(*sort, SortId::Default),
                Some(allowed) => assert!(!allowed.is_empty(), "{} has empty restriction", sort),
            }
        }
    }

    #[test]
    fn names_roundtrip() {
        for sort in SortId::all() {
            assert_eq!(SortId::from_name(sort.name()), Some(*sort));
        }
        assert_eq!(SortId::from_name("german-phone-book"), Some(SortId::GermanPhoneBook));
        assert_eq!(SortId::from_name("default"), Some(SortId::Default));
        assert_eq!(SortId::from_name("klingon"), None);
    }
}
