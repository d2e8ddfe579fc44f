//! URL component assembly and disassembly.
//!
//! `UrlComponents` mirrors the parts of an absolute URL with every field
//! optional. A missing field is omitted from the assembled output, which is not
//! the same as an empty one: `query: Some("")` still emits a bare `?`.

use crate::error::RouteError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// The individual parts of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// Drop path, query and fragment, keeping scheme and authority.
    pub fn without_location(mut self) -> Self {
        self.path = None;
        self.query = None;
        self.fragment = None;
        self
    }

    /// Replace the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&assemble(self))
    }
}

impl FromStr for UrlComponents {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        disassemble(s)
    }
}

/// Parse an absolute URL into its components.
///
/// # Errors
/// Returns `RouteError::MalformedUrl` if the input is not a valid absolute URL.
pub fn disassemble(full_url: &str) -> Result<UrlComponents, RouteError> {
    let parsed = Url::parse(full_url).map_err(|e| RouteError::MalformedUrl {
        url: full_url.to_string(),
        reason: e.to_string(),
    })?;

    let user = Some(parsed.username())
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    let path = if has_explicit_path(full_url, &parsed) {
        Some(parsed.path().to_string())
    } else {
        None
    };

    Ok(UrlComponents {
        scheme: Some(parsed.scheme().to_string()),
        host: parsed.host_str().map(str::to_string),
        port: parsed.port(),
        user,
        pass: parsed.password().map(str::to_string),
        path,
        query: parsed.query().map(str::to_string),
        fragment: parsed.fragment().map(str::to_string),
    })
}

/// Whether the raw input carries a path, as opposed to the `/` the parser
/// fills in for hierarchical URLs such as `http://example.com`.
fn has_explicit_path(raw: &str, parsed: &Url) -> bool {
    if parsed.path().is_empty() {
        return false;
    }

    match raw.trim().split_once("://") {
        Some((_, rest)) => rest
            .chars()
            .find(|c| matches!(c, '/' | '\\' | '?' | '#'))
            .is_some_and(|c| c == '/' || c == '\\'),
        // Opaque URLs like `mailto:` keep their path verbatim
        None => true,
    }
}

/// Rebuild a URL string from its components.
///
/// Userinfo is emitted after the port, and a path is given exactly one leading
/// slash only when something precedes it. A path-only value is left relative.
pub fn assemble(c: &UrlComponents) -> String {
    let mut url = String::new();

    if let Some(scheme) = &c.scheme {
        url.push_str(scheme);
        url.push_str("://");
    }
    if let Some(host) = &c.host {
        url.push_str(host);
    }
    if let Some(port) = c.port {
        url.push(':');
        url.push_str(&port.to_string());
    }

    // A present password counts even when empty, so `pass: Some("")` emits `:@`
    let user = c.user.as_deref().unwrap_or("");
    if !user.is_empty() || c.pass.is_some() {
        url.push_str(user);
        if let Some(pass) = &c.pass {
            url.push(':');
            url.push_str(pass);
        }
        url.push('@');
    }

    if let Some(path) = &c.path {
        if url.is_empty() {
            url.push_str(path);
        } else {
            url.push('/');
            url.push_str(path.trim_start_matches('/'));
        }
    }

    if let Some(query) = &c.query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = &c.fragment {
        url.push('#');
        url.push_str(fragment);
    }

    url
}
