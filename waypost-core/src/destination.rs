//! Destination identifiers.

use std::fmt;

/// An opaque handle naming the unit a matched route should launch.
///
/// The router never interprets the identifier; only the launcher
/// collaborator knows how to turn it into a presentable unit (a screen, a
/// handler, a module). Typical values are fully-qualified type or module
/// names emitted by whatever produces the route mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(String);

impl DestinationId {
    /// Create a destination identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, yielding the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DestinationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for DestinationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
