//! Route name catalog: localized path templates keyed by route name and locale.

use std::collections::HashMap;

/// Lookup of localized path templates.
///
/// Implementations usually wrap an application's translation store. `has`
/// must return `true` exactly when `translate` would return a real entry.
pub trait RouteCatalog {
    /// Check if the catalog has a path for `name` under `locale`.
    fn has(&self, name: &str, locale: &str) -> bool;

    /// Get the path template for `name` under `locale`.
    ///
    /// Only meaningful when `has` returned `true`.
    fn translate(&self, name: &str, locale: &str) -> String;
}

/// A `RouteCatalog` held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// locale -> (route name -> path template)
    routes: HashMap<String, HashMap<String, String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the path for a route in one locale.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) {
        self.routes
            .entry(locale.into())
            .or_default()
            .insert(name.into(), path.into());
    }

    /// Builder form of `insert`.
    pub fn with_route(
        mut self,
        locale: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.insert(locale, name, path);
        self
    }

    fn get(&self, name: &str, locale: &str) -> Option<&String> {
        self.routes.get(locale).and_then(|routes| routes.get(name))
    }
}

impl RouteCatalog for InMemoryCatalog {
    fn has(&self, name: &str, locale: &str) -> bool {
        self.get(name, locale).is_some()
    }

    fn translate(&self, name: &str, locale: &str) -> String {
        // Translators echo the key back for missing entries
        self.get(name, locale)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}
