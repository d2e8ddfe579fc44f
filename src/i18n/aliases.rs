//! Locale aliases: human-facing subdomain labels for canonical locales.
//!
//! The map is keyed by alias (e.g. "german") with the canonical locale code
//! as the value (e.g. "de"), matching how it is written in configuration.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Read-only mapping of alias -> canonical locale, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleAliases {
    aliases: Vec<(String, String)>,
}

impl LocaleAliases {
    /// Create an alias map from (alias, locale) pairs.
    ///
    /// A repeated alias keeps its first position and takes the later locale.
    pub fn new<I, A, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, L)>,
        A: Into<String>,
        L: Into<String>,
    {
        let mut aliases = Self::default();
        for (alias, locale) in pairs {
            aliases.insert(alias.into(), locale.into());
        }
        aliases
    }

    fn insert(&mut self, alias: String, locale: String) {
        match self.aliases.iter_mut().find(|(existing, _)| *existing == alias) {
            Some(entry) => entry.1 = locale,
            None => self.aliases.push((alias, locale)),
        }
    }

    /// Find the alias configured for a canonical locale.
    ///
    /// Entries are searched in configuration order and the first match wins.
    /// Empty aliases are never returned.
    pub fn alias_for(&self, locale: &str) -> Option<&str> {
        self.iter()
            .find(|(alias, canonical)| !alias.is_empty() && *canonical == locale)
            .map(|(alias, _)| alias)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, locale)| (alias.as_str(), locale.as_str()))
    }
}

impl Serialize for LocaleAliases {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.aliases.len()))?;
        for (alias, locale) in self.iter() {
            map.serialize_entry(alias, locale)?;
        }
        map.end()
    }
}

struct LocaleAliasesVisitor;

impl<'de> Visitor<'de> for LocaleAliasesVisitor {
    type Value = LocaleAliases;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of alias -> locale")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        // Entries arrive in document order
        let mut aliases = LocaleAliases::default();
        while let Some((alias, locale)) = access.next_entry::<String, String>()? {
            aliases.insert(alias, locale);
        }
        Ok(aliases)
    }
}

impl<'de> Deserialize<'de> for LocaleAliases {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocaleAliasesVisitor)
    }
}

/// Turn a canonical locale into the subdomain label it is served under.
///
/// Returns the alias if one is configured, otherwise the locale unchanged.
///
/// # Example
/// ```ignore
/// let aliases = LocaleAliases::new([("german", "de")]);
/// assert_eq!(alias_locale(&aliases, "de"), "german");
/// assert_eq!(alias_locale(&aliases, "fr"), "fr");
/// ```
pub fn alias_locale(aliases: &LocaleAliases, locale: &str) -> String {
    aliases.alias_for(locale).unwrap_or(locale).to_string()
}
