//! # Mapping Seam (RouteProvider)
//!
//! The route provider is the collaborator that owns the full route-key →
//! destination mapping — typically a build-time generated table or a
//! declarative configuration block. The router queries it exactly once, at
//! load time, and injects the result into the route table.
//!
//! Making this an explicit injected trait (rather than a by-name runtime
//! lookup) is the Rust-native replacement for reflective discovery of a
//! generated mapping class.

use crate::error::BoxError;
use std::collections::HashMap;

/// Produces the raw route mapping consumed by a route table load.
pub trait RouteProvider: Send + Sync {
    /// Return the full `raw route key → destination id` mapping.
    ///
    /// A failure here is soft: the caller treats it as "zero routes" and
    /// stays usable, it is never propagated as a fatal error.
    fn routes(&self) -> Result<HashMap<String, String>, BoxError>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn routes(&self) -> Result<HashMap<String, String>, BoxError> {
        (**self).routes()
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn routes(&self) -> Result<HashMap<String, String>, BoxError> {
        (**self).routes()
    }
}
