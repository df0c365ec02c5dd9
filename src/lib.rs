// SPDX-License-Identifier: PMPL-1.0-or-later

//! lcid-locale — Windows LCID ↔ locale conversion.
//!
//! Documents, OLAP metadata and other Windows-originated data carry locales
//! as LCIDs: a 16-bit language identifier, optionally combined with a sort
//! identifier. This crate maps them onto structured locales and BCP-47 tags.
//!
//! BUILDING BLOCKS:
//! 1. **Registry**: the curated language identifier table, indexed by code
//!    and by tag.
//! 2. **Sort catalog**: which alternate collations a language may use when
//!    packing an [`Lcid`].
//! 3. **Services**: the best-effort LCID → locale capability, either
//!    table-driven or pinned to a configured locale.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lcid;
pub mod locale;
pub mod registry;
pub mod service;
pub mod sort;

pub use error::LcidError;
pub use lcid::Lcid;
pub use locale::{lcid_to_locale, Locale};
pub use sort::SortId;
