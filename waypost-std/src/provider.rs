//! Standard route providers.

use std::collections::HashMap;
use waypost_core::{BoxError, RouteProvider};

/// A provider backed by a declarative in-code route list.
///
/// This is the simplest composition-root style: spell out the routes where
/// the dispatcher is assembled.
///
/// # Example
///
/// ```rust,ignore
/// let routes = StaticRoutes::new([
///     ("router://page-user", "UserDestination"),
///     ("router://home", "HomeDestination"),
/// ]);
/// table.load_from(&routes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes {
    routes: HashMap<String, String>,
}

impl StaticRoutes {
    /// Build a provider from `(route key, destination)` pairs.
    pub fn new<I, K, V>(routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            routes: routes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl RouteProvider for StaticRoutes {
    fn routes(&self) -> Result<HashMap<String, String>, BoxError> {
        Ok(self.routes.clone())
    }
}
