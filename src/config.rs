use crate::i18n::LocaleAliases;
use crate::resolver::{LocaleConfig, LocaleProvider};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // Base domain every locale subdomain hangs off, e.g. "example.com"
    pub domain: String,

    // alias -> canonical locale, e.g. {"german": "de"}
    #[serde(default)]
    pub aliases: LocaleAliases,

    // Locales the site is published in
    pub available_locales: Vec<String>,
    pub default_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let domain = std::env::var("LOCALIZATION_DOMAIN").context("LOCALIZATION_DOMAIN not set")?;
        if domain.trim().is_empty() {
            bail!("LOCALIZATION_DOMAIN must not be empty");
        }

        let aliases = match std::env::var("LOCALIZATION_ALIASES") {
            Ok(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .context("LOCALIZATION_ALIASES must be a JSON object of alias -> locale")?,
            _ => LocaleAliases::default(),
        };

        let available_locales = std::env::var("LOCALIZATION_LOCALES")
            .ok()
            .map(|v| parse_locale_list(&v))
            .filter(|locales| !locales.is_empty())
            .unwrap_or_else(|| vec!["en".to_string()]);

        let default_locale = std::env::var("LOCALIZATION_DEFAULT_LOCALE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| available_locales[0].clone());

        Ok(Self {
            domain: domain.trim().to_string(),
            aliases,
            available_locales,
            default_locale,
        })
    }
}

/// Split a comma-separated locale list, dropping blanks.
fn parse_locale_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl LocaleConfig for Config {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn aliases(&self) -> &LocaleAliases {
        &self.aliases
    }
}

impl LocaleProvider for Config {
    fn available_locales(&self) -> Vec<String> {
        self.available_locales.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "LOCALIZATION_DOMAIN",
        "LOCALIZATION_ALIASES",
        "LOCALIZATION_LOCALES",
        "LOCALIZATION_DEFAULT_LOCALE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_full() {
        clear_env();
        std::env::set_var("LOCALIZATION_DOMAIN", "example.com");
        std::env::set_var("LOCALIZATION_ALIASES", r#"{"german": "de"}"#);
        std::env::set_var("LOCALIZATION_LOCALES", "en, de ,fr");
        std::env::set_var("LOCALIZATION_DEFAULT_LOCALE", "de");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.aliases.alias_for("de"), Some("german"));
        assert_eq!(config.available_locales, vec!["en", "de", "fr"]);
        assert_eq!(config.default_locale, "de");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("LOCALIZATION_DOMAIN", "example.com");

        let config = Config::from_env().expect("config should load");
        assert!(config.aliases.is_empty());
        assert_eq!(config.available_locales, vec!["en"]);
        assert_eq!(config.default_locale, "en");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_domain() {
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("LOCALIZATION_DOMAIN"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_aliases() {
        clear_env();
        std::env::set_var("LOCALIZATION_DOMAIN", "example.com");
        std::env::set_var("LOCALIZATION_ALIASES", "german=de");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("LOCALIZATION_ALIASES"));

        clear_env();
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_parse_locale_list_drops_blanks() {
        assert_eq!(parse_locale_list("en,,de, "), vec!["en", "de"]);
        assert!(parse_locale_list(" , ").is_empty());
    }

    #[test]
    fn test_config_serde() {
        let config: Config = serde_json::from_str(
            r#"{"domain": "example.com", "available_locales": ["en"], "default_locale": "en"}"#,
        )
        .unwrap();
        assert_eq!(config.domain(), "example.com");
        assert!(config.aliases().is_empty());
        assert_eq!(config.available_locales(), vec!["en"]);
    }
}
