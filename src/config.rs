// SPDX-License-Identifier: PMPL-1.0-or-later

//! Service configuration loading.
//!
//! A deployment picks one of two modes: `table` looks LCIDs up in the
//! registry, `fixed` ignores the LCID and always answers with the
//! configured locale.

use crate::locale::Locale;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SERVICE_NAME: &str = "";
pub const DEFAULT_LOCALE_LANGUAGE: &str = "en";
pub const DEFAULT_LOCALE_COUNTRY: &str = "US";
pub const DEFAULT_LOCALE_VARIANT: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    #[default]
    Table,
    Fixed,
}

impl ServiceMode {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "table" | "basic" | "lookup" => Some(ServiceMode::Table),
            "fixed" | "configured" | "cfg" => Some(ServiceMode::Fixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LcidConfig {
    pub service_name: String,
    pub mode: ServiceMode,
    pub locale_language: String,
    pub locale_country: String,
    pub locale_variant: String,
}

impl Default for LcidConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            mode: ServiceMode::default(),
            locale_language: DEFAULT_LOCALE_LANGUAGE.to_string(),
            locale_country: DEFAULT_LOCALE_COUNTRY.to_string(),
            locale_variant: DEFAULT_LOCALE_VARIANT.to_string(),
        }
    }
}

impl LcidConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lcid config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json lcid config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml lcid config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported lcid config extension for {}",
                path.display()
            )),
        }
    }

    /// Defaults when `path` does not exist or cannot be loaded; a broken
    /// file is reported on stderr and otherwise ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("warning: {:#}, using defaults", err);
                Self::default()
            }
        }
    }

    /// Switch mode by name (`table`, `fixed` or an alias).
    pub fn override_mode(&mut self, value: &str) -> Result<()> {
        self.mode = ServiceMode::from_str(value)
            .ok_or_else(|| anyhow!("unknown service mode '{}'", value))?;
        Ok(())
    }

    /// The locale used in `fixed` mode, taken verbatim from the
    /// configured strings.
    pub fn fixed_locale(&self) -> Locale {
        Locale::new(
            &self.locale_language,
            &self.locale_country,
            &self.locale_variant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_en_us() {
        let config = LcidConfig::default();
        assert_eq!(config.mode, ServiceMode::Table);
        assert_eq!(config.service_name, "");
        assert_eq!(config.fixed_locale(), Locale::new("en", "US", ""));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LcidConfig =
            serde_json::from_str(r#"{"mode":"fixed","localeCountry":"GB"}"#).unwrap();
        assert_eq!(config.mode, ServiceMode::Fixed);
        assert_eq!(config.locale_language, "en");
        assert_eq!(config.fixed_locale(), Locale::new("en", "GB", ""));
    }

    #[test]
    fn empty_language_still_builds_a_locale() {
        let config = LcidConfig {
            locale_language: String::new(),
            ..LcidConfig::default()
        };
        let locale = config.fixed_locale();
        assert_eq!(locale.language(), "");
        assert_eq!(locale.country(), "US");
        assert_eq!(locale.to_string(), "_US");
    }

    #[test]
    fn mode_aliases() {
        assert_eq!(ServiceMode::from_str("Basic"), Some(ServiceMode::Table));
        assert_eq!(ServiceMode::from_str("fixed"), Some(ServiceMode::Fixed));
        assert_eq!(ServiceMode::from_str("csv"), None);
    }

    #[test]
    fn mode_override_by_name() {
        let mut config = LcidConfig::default();
        config.override_mode("configured").unwrap();
        assert_eq!(config.mode, ServiceMode::Fixed);

        let err = config.override_mode("csv").unwrap_err();
        assert_eq!(err.to_string(), "unknown service mode 'csv'");
        assert_eq!(config.mode, ServiceMode::Fixed);
    }
}
