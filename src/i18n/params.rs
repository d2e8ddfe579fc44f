//! Route parameter substitution into localized path templates.
//!
//! Templates use `{name}` for required and `{name?}` for optional parameters,
//! e.g. `/posts/{id}/{slug?}`.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Route parameter values keyed by parameter name.
pub type RouteParameters = BTreeMap<String, String>;

// Matches an unfilled optional segment. The `[^)]+` run is deliberately loose
// and greedy: `/{a?}/x/{b?}` is removed as a single match.
static OPTIONAL_SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Substitute parameter values into a path template.
///
/// Every `{key}` and `{key?}` is replaced with its value, then any remaining
/// `/{...?}` optional segment is removed together with its leading slash.
/// Required placeholders without a value are left in place.
pub fn substitute_attributes(attributes: &RouteParameters, path: &str) -> String {
    let mut route = path.to_string();

    for (key, value) in attributes {
        route = route.replace(&format!("{{{}}}", key), value);
        route = route.replace(&format!("{{{}?}}", key), value);
    }

    let regex = OPTIONAL_SEGMENT_REGEX.get_or_init(|| Regex::new(r"/\{[^)]+\?\}").unwrap());

    regex.replace_all(&route, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Substitution Tests ====================

    #[test]
    fn test_required_parameter() {
        assert_eq!(
            substitute_attributes(&params(&[("id", "42")]), "/posts/{id}"),
            "/posts/42"
        );
    }

    #[test]
    fn test_optional_parameter_supplied() {
        assert_eq!(
            substitute_attributes(&params(&[("id", "42")]), "/posts/{id?}"),
            "/posts/42"
        );
    }

    #[test]
    fn test_optional_parameter_dropped_with_slash() {
        assert_eq!(substitute_attributes(&params(&[]), "/posts/{id?}"), "/posts");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        assert_eq!(
            substitute_attributes(&params(&[("tag", "rust")]), "/t/{tag}/{tag?}"),
            "/t/rust/rust"
        );
    }

    #[test]
    fn test_multiple_parameters() {
        let attributes = params(&[("year", "2024"), ("slug", "hello")]);
        assert_eq!(
            substitute_attributes(&attributes, "/blog/{year}/{slug}"),
            "/blog/2024/hello"
        );
    }

    #[test]
    fn test_missing_required_placeholder_left_alone() {
        assert_eq!(
            substitute_attributes(&params(&[]), "/posts/{id}"),
            "/posts/{id}"
        );
    }

    #[test]
    fn test_unrelated_parameters_ignored() {
        assert_eq!(
            substitute_attributes(&params(&[("page", "2")]), "/about"),
            "/about"
        );
    }

    // ==================== Loose Cleanup Tests ====================

    #[test]
    fn test_cleanup_is_greedy_across_segments() {
        assert_eq!(
            substitute_attributes(&params(&[]), "/a/{x?}/b/{y?}"),
            "/a"
        );
    }

    #[test]
    fn test_cleanup_accepts_any_identifier_chars() {
        assert_eq!(
            substitute_attributes(&params(&[]), "/files/{some path-name?}"),
            "/files"
        );
    }

    #[test]
    fn test_cleanup_keeps_filled_prefix() {
        assert_eq!(
            substitute_attributes(&params(&[("id", "7")]), "/posts/{id}/{slug?}"),
            "/posts/7"
        );
    }
}
