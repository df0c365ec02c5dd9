// SPDX-License-Identifier: PMPL-1.0-or-later

//! The LCID → locale capability and its two deployments.
//!
//! | Mode    | Type                      | Behaviour                          |
//! |---------|---------------------------|------------------------------------|
//! | `table` | [`BasicLcidService`]      | registry lookup on the LCID        |
//! | `fixed` | [`ConfiguredLcidService`] | configured locale, LCID ignored    |
//!
//! Both answer `None` instead of failing. Which one runs is decided once,
//! from [`LcidConfig::mode`], by [`service_for`].

mod basic;
mod configured;

pub use basic::BasicLcidService;
pub use configured::ConfiguredLcidService;

use crate::config::{LcidConfig, ServiceMode};
use crate::locale::Locale;

pub trait LcidService: Send + Sync {
    /// Absent input, and anything that cannot be converted, yield `None`.
    fn lcid_to_locale(&self, lcid: Option<i32>) -> Option<Locale>;
}

pub fn service_for(config: &LcidConfig) -> Box<dyn LcidService> {
    match config.mode {
        ServiceMode::Table => Box::new(BasicLcidService),
        ServiceMode::Fixed => Box::new(ConfiguredLcidService::activate(config.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_implementation() {
        let table = service_for(&LcidConfig::default());
        assert_eq!(
            table.lcid_to_locale(Some(0x0407)),
            Some(Locale::new("de", "DE", ""))
        );

        let fixed = service_for(&LcidConfig {
            mode: ServiceMode::Fixed,
            ..LcidConfig::default()
        });
        assert_eq!(
            fixed.lcid_to_locale(Some(0x0407)),
            Some(Locale::new("en", "US", ""))
        );
    }
}
