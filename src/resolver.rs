//! Localized URL resolution for named routes.
//!
//! A `LocalizedUrlResolver` is created per request. It borrows the request,
//! router, route catalog and locale configuration, and keeps two pieces of
//! per-request state:
//!
//! - the request skeleton (scheme and authority of the current URL, with the
//!   host replaced by the base domain), parsed on first use
//! - the route name index, which records every (name, path) pair resolved
//!   through `resolve` so the router's matched path can be mapped back to a
//!   route name
//!
//! # Example
//!
//! ```rust,ignore
//! let mut resolver = LocalizedUrlResolver::new(Collaborators {
//!     request: &snapshot,
//!     router: &snapshot,
//!     catalog: &catalog,
//!     config: &config,
//!     locales: &config,
//! });
//!
//! // "http://german.example.com/ueber-uns"
//! let url = resolver.url("about.page", None, Some("de"))?;
//! ```

use crate::error::RouteError;
use crate::i18n::{
    alias_locale, substitute_attributes, LocaleAliases, RouteCatalog, RouteParameters,
};
use crate::request::{CurrentRequest, Router};
use crate::url_parts::{assemble, disassemble, UrlComponents};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Domain and alias settings for locale subdomains.
pub trait LocaleConfig {
    /// The base domain, e.g. `example.com`.
    fn domain(&self) -> &str;

    /// Alias -> canonical locale map.
    fn aliases(&self) -> &LocaleAliases;
}

/// Source of the locales a site is published in.
pub trait LocaleProvider {
    fn available_locales(&self) -> Vec<String>;
}

/// Everything a resolver reads from its host application.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub request: &'a dyn CurrentRequest,
    pub router: &'a dyn Router,
    pub catalog: &'a dyn RouteCatalog,
    pub config: &'a dyn LocaleConfig,
    pub locales: &'a dyn LocaleProvider,
}

/// URLs of one page keyed by locale, in the order the locales are published.
///
/// Serializes as a JSON object that keeps that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleVersions {
    entries: Vec<(String, String)>,
}

impl LocaleVersions {
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.iter().find(|(l, _)| *l == locale).map(|(_, url)| url)
    }

    pub fn contains_key(&self, locale: &str) -> bool {
        self.get(locale).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(locale, _)| locale)
    }

    /// (locale, url) pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(locale, url)| (locale.as_str(), url.as_str()))
    }
}

impl Serialize for LocaleVersions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (locale, url) in self.iter() {
            map.serialize_entry(locale, url)?;
        }
        map.end()
    }
}

/// Resolves route names to URLs on locale subdomains.
///
/// Not meant to outlive the request it was created for.
pub struct LocalizedUrlResolver<'a> {
    deps: Collaborators<'a>,

    /// Current URL without path, query and fragment, host set to the domain
    skeleton: Option<UrlComponents>,

    /// (route name, localized path) in resolution order
    route_index: Vec<(String, String)>,
}

impl<'a> LocalizedUrlResolver<'a> {
    pub fn new(deps: Collaborators<'a>) -> Self {
        Self {
            deps,
            skeleton: None,
            route_index: Vec::new(),
        }
    }

    /// Build the full URL of a route in a locale.
    ///
    /// The scheme, port and userinfo come from the current request; the host
    /// is the locale's subdomain of the configured domain. Attributes, when
    /// given, are substituted into the localized path template.
    ///
    /// # Arguments
    /// * `route_name` - Route identifier, e.g. `"about.page"`
    /// * `attributes` - Path parameter values
    /// * `locale` - Target locale (defaults to the active locale)
    ///
    /// # Errors
    /// * `RouteError::MalformedUrl` if the current request URL cannot be parsed
    /// * `RouteError::RouteNotFound` if the route has no path in the locale
    pub fn url(
        &mut self,
        route_name: &str,
        attributes: Option<&RouteParameters>,
        locale: Option<&str>,
    ) -> Result<String, RouteError> {
        let deps = self.deps;
        let locale = locale
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| deps.request.active_locale());

        let mut components = self.skeleton()?;
        components.host = Some(self.locale_host(locale));

        let mut path = self.find_route_path_by_name(route_name, Some(locale))?;
        if let Some(attributes) = attributes {
            path = substitute_attributes(attributes, &path);
        }
        components.path = Some(path);

        Ok(assemble(&components))
    }

    /// Resolve a route name to its path in the active locale.
    ///
    /// The first successful resolution of each name is recorded so the path
    /// can later be mapped back to the name.
    pub fn resolve(&mut self, route_name: &str) -> Result<String, RouteError> {
        let route_path = self.find_route_path_by_name(route_name, None)?;

        if !self.route_index.iter().any(|(name, _)| name == route_name) {
            debug!("Recording route '{}' -> '{}'", route_name, route_path);
            self.route_index.push((route_name.to_string(), route_path.clone()));
        }

        Ok(route_path)
    }

    /// URL of the current route in another locale.
    ///
    /// # Errors
    /// * `RouteError::NoCurrentRoute` if no route is matched or its name is unknown
    /// * `RouteError::RouteNotFound` if the route has no path in `locale`
    /// * `RouteError::MalformedUrl` if the current request URL cannot be parsed
    pub fn current(&mut self, locale: &str) -> Result<String, RouteError> {
        let route_name = self.current_route_name()?;
        let attributes = self.current_route_attributes().ok();

        self.url(&route_name, attributes.as_ref(), Some(locale))
    }

    /// URLs of the current route in every available locale.
    ///
    /// Entries follow `LocaleProvider::available_locales` order. Locales
    /// without a translation of the current route are left out.
    ///
    /// # Arguments
    /// * `exclude_current_locale` - Skip the locale being served
    ///
    /// # Errors
    /// Only `RouteError::MalformedUrl` is propagated.
    pub fn get_current_versions(
        &mut self,
        exclude_current_locale: bool,
    ) -> Result<LocaleVersions, RouteError> {
        let deps = self.deps;
        let active_locale = deps.request.active_locale();
        let mut versions = LocaleVersions::default();

        for locale in deps.locales.available_locales() {
            if exclude_current_locale && locale == active_locale {
                continue;
            }

            match self.current(&locale) {
                Ok(url) => {
                    versions.entries.push((locale, url));
                }
                Err(e) if e.is_missing_route() => {
                    debug!("Omitting locale '{}' from current versions: {}", locale, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(versions)
    }

    /// The current URL moved onto the active locale's subdomain.
    ///
    /// Path, query and fragment are kept as requested.
    pub fn get_redirect_url(&self) -> Result<String, RouteError> {
        let components = disassemble(self.deps.request.full_url())?
            .with_host(self.locale_host(self.deps.request.active_locale()));

        Ok(assemble(&components))
    }

    /// Name of the route being served.
    ///
    /// Falls back to the route name index when the router only reports the
    /// matched path, which works only for names resolved earlier.
    pub fn current_route_name(&self) -> Result<String, RouteError> {
        if let Some(name) = self.deps.router.current_route_name() {
            return Ok(name.to_string());
        }

        self.deps
            .router
            .current_match()
            .and_then(|route_match| self.find_route_name_by_path(&route_match.uri))
            .map(str::to_string)
            .ok_or(RouteError::NoCurrentRoute)
    }

    /// Bound parameters of the route being served, without unbound ones.
    pub fn current_route_attributes(&self) -> Result<RouteParameters, RouteError> {
        self.deps
            .router
            .current_match()
            .map(|route_match| route_match.parameters_without_nulls())
            .ok_or(RouteError::NoCurrentRoute)
    }

    /// Localized path template of a route.
    ///
    /// # Arguments
    /// * `route_name` - Route identifier
    /// * `locale` - Locale to look up (defaults to the active locale)
    pub fn find_route_path_by_name(
        &self,
        route_name: &str,
        locale: Option<&str>,
    ) -> Result<String, RouteError> {
        let locale = locale
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.deps.request.active_locale());

        if self.deps.catalog.has(route_name, locale) {
            Ok(self.deps.catalog.translate(route_name, locale))
        } else {
            Err(RouteError::RouteNotFound {
                name: route_name.to_string(),
                locale: locale.to_string(),
            })
        }
    }

    /// First recorded route name whose path equals `route_path` exactly.
    pub fn find_route_name_by_path(&self, route_path: &str) -> Option<&str> {
        self.route_index
            .iter()
            .find(|(_, path)| path == route_path)
            .map(|(name, _)| name.as_str())
    }

    /// Subdomain label a locale is served under.
    pub fn alias_locale(&self, locale: &str) -> String {
        alias_locale(self.deps.config.aliases(), locale)
    }

    pub fn get_domain(&self) -> String {
        self.deps.config.domain().to_string()
    }

    fn locale_host(&self, locale: &str) -> String {
        format!("{}.{}", self.alias_locale(locale), self.get_domain())
    }

    fn skeleton(&mut self) -> Result<UrlComponents, RouteError> {
        if let Some(skeleton) = &self.skeleton {
            return Ok(skeleton.clone());
        }

        let skeleton = disassemble(self.deps.request.full_url())?
            .without_location()
            .with_host(self.get_domain());
        debug!("Parsed request skeleton: {}", skeleton);
        self.skeleton = Some(skeleton.clone());

        Ok(skeleton)
    }
}
