//! Localization primitives for route URLs.
//!
//! # Architecture
//!
//! - `aliases`: Canonical locale -> public subdomain label
//! - `catalog`: Localized path templates per route name and locale
//! - `params`: Parameter substitution into path templates
//!
//! # Example
//!
//! ```rust,ignore
//! use localized_routes::i18n::{alias_locale, substitute_attributes, LocaleAliases};
//!
//! let aliases = LocaleAliases::new([("german", "de")]);
//! assert_eq!(alias_locale(&aliases, "de"), "german");
//!
//! let params = [("id".to_string(), "42".to_string())].into();
//! assert_eq!(substitute_attributes(&params, "/posts/{id}"), "/posts/42");
//! ```

mod aliases;
mod catalog;
mod params;

pub use aliases::{alias_locale, LocaleAliases};
pub use catalog::{InMemoryCatalog, RouteCatalog};
pub use params::{substitute_attributes, RouteParameters};
