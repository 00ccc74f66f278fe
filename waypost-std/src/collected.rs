//! Distributed route declaration via `inventory`.
//!
//! Destinations declare their own route next to their definition with
//! [`inventory::submit!`], and the composition root gathers every
//! declaration with [`CollectedRoutes`]. This replaces build-time
//! annotation processing with link-time collection.
//!
//! # Example
//!
//! ```rust,ignore
//! inventory::submit! {
//!     CollectedRoute::new("router://page-user", "UserDestination")
//! }
//!
//! // At composition time:
//! table.load_from(&CollectedRoutes);
//! ```

use std::collections::HashMap;
use waypost_core::{BoxError, RouteProvider};

/// A route declaration submitted to the distributed collection.
pub struct CollectedRoute {
    /// The raw route key (`scheme://host/path`).
    pub url: &'static str,
    /// The destination identifier the key maps to.
    pub destination: &'static str,
}

impl CollectedRoute {
    /// Create a new route declaration.
    pub const fn new(url: &'static str, destination: &'static str) -> Self {
        Self { url, destination }
    }
}

inventory::collect!(CollectedRoute);

/// A provider that gathers every submitted [`CollectedRoute`].
///
/// Later submissions with a duplicate key fold into one entry; which
/// declaration wins follows the table's last-write-wins rule, so duplicate
/// declarations are a configuration error to avoid, not a supported
/// override mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectedRoutes;

impl RouteProvider for CollectedRoutes {
    fn routes(&self) -> Result<HashMap<String, String>, BoxError> {
        Ok(inventory::iter::<CollectedRoute>
            .into_iter()
            .map(|route| (route.url.to_owned(), route.destination.to_owned()))
            .collect())
    }
}
