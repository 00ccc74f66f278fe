//! # waypost - Declarative URL Route Dispatch
//!
//! `waypost` maintains a mapping from declarative route patterns
//! (`scheme://host/path`) to opaque destination identifiers, resolves
//! incoming URLs against that mapping, extracts query parameters into a
//! [`ParamBag`], and hands the resolved destination to a [`Launcher`]
//! collaborator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypost::prelude::*;
//! use waypost::launchers::LauncherRegistryBuilder;
//! use waypost::provider::StaticRoutes;
//!
//! let launcher = LauncherRegistryBuilder::new()
//!     .register("UserDestination", |app: &App, params| {
//!         app.open_user_screen(params);
//!         Ok(())
//!     })
//!     .build();
//!
//! let routes = StaticRoutes::new([("router://page-user", "UserDestination")]);
//! let dispatcher = Dispatcher::from_provider(&routes, launcher);
//!
//! dispatcher.resolve_and_launch(&app, "router://page-user?name=imooc")?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;

pub use dispatcher::{Dispatched, Dispatcher};

pub use waypost_core::{
    // Errors
    BoxError,
    // Destination hand-off
    DestinationId,
    DispatchError,
    // URL vocabulary
    DispatchUrl,
    LaunchError,
    // Collaborator seams
    Launcher,
    ParamBag,
    PatternError,
    RoutePattern,
    RouteProvider,
};

pub use waypost_std::RouteTable;
pub use waypost_std::routing::MatchResult;

/// Standard launcher implementations.
pub mod launchers {
    pub use waypost_std::launchers::{FnLauncher, LauncherRegistry, LauncherRegistryBuilder};
}

/// Standard route providers.
pub mod provider {
    pub use waypost_std::provider::StaticRoutes;

    #[cfg(feature = "inventory")]
    pub use waypost_std::collected::{CollectedRoute, CollectedRoutes};
}

/// Testing utilities.
pub mod testing {
    pub use waypost_std::testing::{FailingProvider, SpyLauncher};
}

/// Prelude module - common imports for Waypost.
///
/// # Usage
///
/// ```rust,ignore
/// use waypost::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DestinationId, DispatchError, Dispatched, Dispatcher, LaunchError, Launcher, MatchResult,
        ParamBag, RoutePattern, RouteProvider, RouteTable,
    };
}

#[cfg(feature = "inventory")]
pub use waypost_std::inventory;
