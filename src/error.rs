use thiserror::Error;

/// Errors produced while resolving localized route URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A URL string could not be parsed into components.
    #[error("Malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The catalog has no localized path for the route in the given locale.
    #[error("No localized path for route '{name}' in locale '{locale}'")]
    RouteNotFound { name: String, locale: String },

    /// Introspection was attempted while no route is matched.
    #[error("No route is currently matched")]
    NoCurrentRoute,
}

impl RouteError {
    /// Check if this error only means "there is no route to link to".
    ///
    /// Locale switchers skip a locale on these errors instead of failing.
    pub fn is_missing_route(&self) -> bool {
        matches!(
            self,
            RouteError::RouteNotFound { .. } | RouteError::NoCurrentRoute
        )
    }
}
