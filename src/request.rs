//! Views of the request being served.
//!
//! The host application's request and router are reached only through these
//! traits. `RequestSnapshot` is a plain-data implementation of both for hosts
//! that capture the request state up front.

use crate::i18n::RouteParameters;
use std::collections::BTreeMap;

/// The request currently being served.
pub trait CurrentRequest {
    /// The full URL of the request, including path and query.
    fn full_url(&self) -> &str;

    /// The locale the request is being served in.
    fn active_locale(&self) -> &str;
}

/// The router's view of the current request.
pub trait Router {
    /// The name of the matched route, if the router knows it.
    fn current_route_name(&self) -> Option<&str>;

    /// The matched route, if any.
    fn current_match(&self) -> Option<&RouteMatch>;
}

/// A route matched against the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    /// The route URI template as registered, e.g. `/posts/{id}`.
    pub uri: String,

    /// Bound parameters. `None` marks an optional parameter left unbound.
    pub parameters: BTreeMap<String, Option<String>>,
}

impl RouteMatch {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Bound parameters, leaving out the unbound ones.
    pub fn parameters_without_nulls(&self) -> RouteParameters {
        self.parameters
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.clone(), v.clone())))
            .collect()
    }
}

/// Captured state of one request.
#[derive(Debug, Clone, Default)]
pub struct RequestSnapshot {
    pub full_url: String,
    pub active_locale: String,
    pub route_name: Option<String>,
    pub route_match: Option<RouteMatch>,
}

impl RequestSnapshot {
    pub fn new(full_url: impl Into<String>, active_locale: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            active_locale: active_locale.into(),
            route_name: None,
            route_match: None,
        }
    }

    pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    pub fn with_route_match(mut self, route_match: RouteMatch) -> Self {
        self.route_match = Some(route_match);
        self
    }
}

impl CurrentRequest for RequestSnapshot {
    fn full_url(&self) -> &str {
        &self.full_url
    }

    fn active_locale(&self) -> &str {
        &self.active_locale
    }
}

impl Router for RequestSnapshot {
    fn current_route_name(&self) -> Option<&str> {
        self.route_name.as_deref().filter(|name| !name.is_empty())
    }

    fn current_match(&self) -> Option<&RouteMatch> {
        self.route_match.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_without_nulls() {
        let route_match = RouteMatch::new("/posts/{id}/{slug?}")
            .with_parameter("id", Some("42".to_string()))
            .with_parameter("slug", None);

        let params = route_match.parameters_without_nulls();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(!params.contains_key("slug"));
    }

    #[test]
    fn test_snapshot_as_request_and_router() {
        let snapshot = RequestSnapshot::new("http://de.example.com/ueber-uns", "de")
            .with_route_name("about.page")
            .with_route_match(RouteMatch::new("/ueber-uns"));

        assert_eq!(snapshot.full_url(), "http://de.example.com/ueber-uns");
        assert_eq!(snapshot.active_locale(), "de");
        assert_eq!(snapshot.current_route_name(), Some("about.page"));
        assert_eq!(snapshot.current_match().map(|m| m.uri.as_str()), Some("/ueber-uns"));
    }

    #[test]
    fn test_snapshot_empty_route_name_counts_as_missing() {
        let snapshot = RequestSnapshot::new("http://example.com/", "en").with_route_name("");
        assert_eq!(snapshot.current_route_name(), None);
        assert!(snapshot.current_match().is_none());
    }
}
