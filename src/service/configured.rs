// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed-locale service.
//!
//! The configuration lives in an immutable snapshot behind an `Arc`.
//! Reconfiguring builds a new snapshot and swaps the pointer, so a reader
//! sees either the old or the new configuration, never a mix.

use super::LcidService;
use crate::config::LcidConfig;
use crate::locale::Locale;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug)]
struct Snapshot {
    config: LcidConfig,
    locale: Locale,
}

impl Snapshot {
    fn new(config: LcidConfig) -> Arc<Self> {
        let locale = config.fixed_locale();
        Arc::new(Self { config, locale })
    }
}

#[derive(Debug, Default)]
pub struct ConfiguredLcidService {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl ConfiguredLcidService {
    pub fn activate(config: LcidConfig) -> Self {
        Self {
            current: RwLock::new(Some(Snapshot::new(config))),
        }
    }

    /// Replace the active configuration, or activate a deactivated service.
    pub fn reconfigure(&self, config: LcidConfig) {
        let next = Snapshot::new(config);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(next);
    }

    /// After this every lookup answers `None` until reconfigured.
    pub fn deactivate(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_active(&self) -> bool {
        self.snapshot().is_some()
    }

    pub fn config(&self) -> Option<LcidConfig> {
        self.snapshot().map(|snapshot| snapshot.config.clone())
    }

    fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LcidService for ConfiguredLcidService {
    fn lcid_to_locale(&self, _lcid: Option<i32>) -> Option<Locale> {
        self.snapshot().map(|snapshot| snapshot.locale.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(language: &str, country: &str, variant: &str) -> LcidConfig {
        LcidConfig {
            locale_language: language.to_string(),
            locale_country: country.to_string(),
            locale_variant: variant.to_string(),
            ..LcidConfig::default()
        }
    }

    #[test]
    fn ignores_the_lcid() {
        let service = ConfiguredLcidService::activate(config("de", "AT", ""));
        let expected = Some(Locale::new("de", "AT", ""));
        assert_eq!(service.lcid_to_locale(Some(0x0409)), expected);
        assert_eq!(service.lcid_to_locale(Some(0x9999)), expected);
        assert_eq!(service.lcid_to_locale(None), expected);
    }

    #[test]
    fn unconfigured_or_deactivated_is_absent() {
        let service = ConfiguredLcidService::default();
        assert!(!service.is_active());
        assert_eq!(service.lcid_to_locale(Some(0x0409)), None);

        service.reconfigure(LcidConfig::default());
        assert_eq!(
            service.lcid_to_locale(None),
            Some(Locale::new("en", "US", ""))
        );

        service.deactivate();
        assert_eq!(service.lcid_to_locale(Some(0x0409)), None);
        assert_eq!(service.config(), None);
    }

    #[test]
    fn reconfigure_swaps_whole_snapshot() {
        let service = ConfiguredLcidService::activate(config("en", "US", ""));
        service.reconfigure(config("ja", "JP", "JP"));
        assert_eq!(
            service.lcid_to_locale(None),
            Some(Locale::new("ja", "JP", "JP"))
        );
        assert_eq!(service.config().map(|c| c.locale_language), Some("ja".to_string()));
    }

    #[test]
    fn empty_language_is_still_answered() {
        let service = ConfiguredLcidService::activate(config("", "US", ""));
        assert_eq!(
            service.lcid_to_locale(Some(0x0409)),
            Some(Locale::new("", "US", ""))
        );
    }
}
