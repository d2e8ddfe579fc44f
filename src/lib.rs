//! Locale-aware URLs for named application routes.
//!
//! Every locale is served on its own subdomain of a base domain
//! (`de.example.com`, or `german.example.com` when aliased). Given a route
//! name, this crate looks up the route's localized path, fills in its
//! parameters and builds the URL on the right subdomain. It can also list the
//! current page's URL in every other locale, for locale switchers.

pub mod config;
pub mod error;
pub mod i18n;
pub mod request;
pub mod resolver;
pub mod url_parts;

pub use error::RouteError;
pub use resolver::{
    Collaborators, LocaleConfig, LocaleProvider, LocaleVersions, LocalizedUrlResolver,
};
pub use url_parts::{assemble, disassemble, UrlComponents};
