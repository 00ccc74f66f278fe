//! Route patterns and dispatch URL parsing.
//!
//! A route key is a URI of the shape `scheme://host/path` — no query, no
//! fragment. The same syntax, plus an optional `?k=v&...` query, forms the
//! incoming dispatch URL. Both sides funnel through the `url` crate, so the
//! scheme and host are normalized identically on registration and lookup.
//!
//! # Matching Semantics
//!
//! - Exact triple equality, no wildcards, no prefix matching.
//! - Path comparison is case-sensitive; scheme and host are lowercased by
//!   URL normalization on both sides.
//! - Query and fragment never participate in matching.

use std::fmt;
use thiserror::Error;
use url::Url;

/// A raw string could not be parsed as a `scheme://host/path` URI.
#[derive(Error, Debug)]
#[error("`{key}` is not a valid `scheme://host/path` URL")]
pub struct PatternError {
    key: String,
    #[source]
    source: url::ParseError,
}

impl PatternError {
    /// The raw string that failed to parse.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A parsed route key: the scheme/host/path triple an incoming URL is
/// matched against.
///
/// Produced once per raw key at load time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    scheme: String,
    host: String,
    path: String,
}

impl RoutePattern {
    /// Parse a raw route-key string (`scheme://host/path`).
    ///
    /// A trailing query or fragment is tolerated and ignored; registration
    /// keys are not supposed to carry one, but a key that does still
    /// matches on its triple alone.
    pub fn parse(key: &str) -> Result<Self, PatternError> {
        let url = Url::parse(key).map_err(|source| PatternError {
            key: key.to_owned(),
            source,
        })?;
        Ok(Self::from_url(&url))
    }

    fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_owned(),
            // A host is absent for non-authority URLs; treat it as empty so
            // the triple stays comparable.
            host: url.host_str().unwrap_or_default().to_owned(),
            path: url.path().to_owned(),
        }
    }

    /// The URL scheme, e.g. `router`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host component, empty if the URL carried none.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The absolute path, empty for host-only keys like `router://home`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// A transient parse of one incoming dispatch URL: the matchable
/// [`RoutePattern`] plus the raw, un-decoded query component.
///
/// Created per dispatch call and discarded with it; never persisted.
#[derive(Debug, Clone)]
pub struct DispatchUrl {
    pattern: RoutePattern,
    query: Option<String>,
}

impl DispatchUrl {
    /// Parse an incoming URL (`scheme://host/path?k=v&...`).
    ///
    /// A missing query component is valid, not an error.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let url = Url::parse(raw).map_err(|source| PatternError {
            key: raw.to_owned(),
            source,
        })?;
        Ok(Self {
            pattern: RoutePattern::from_url(&url),
            query: url.query().map(str::to_owned),
        })
    }

    /// The scheme/host/path triple to match against the route table.
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The raw query string, if the URL carried one.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
