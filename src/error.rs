// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for LCID conversion and construction.

use crate::sort::SortId;
use thiserror::Error;

/// Reasons an LCID cannot be turned into a locale, or cannot be built.
///
/// None of these are fatal. The best-effort lookup in
/// [`crate::locale::lcid_to_locale`] collapses all of them into `None`;
/// only [`crate::lcid::Lcid::with_sort`] hands `InvalidSortForLanguage`
/// back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcidError {
    #[error("unknown language identifier 0x{0:04X}")]
    UnknownLanguageCode(u16),

    #[error("language identifier 0x{0:04X} has no locale mapping")]
    NoCanonicalString(u16),

    #[error("bad locale string '{0}'")]
    MalformedLocaleString(String),

    #[error("unexpected sort id '{}' for language id 0x{language:04X}", .sort.name())]
    InvalidSortForLanguage { sort: SortId, language: u16 },

    #[error("'{0}' is not a decimal or 0x-prefixed hex LCID")]
    InvalidLcidLiteral(String),
}
