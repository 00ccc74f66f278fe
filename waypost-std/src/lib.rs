//! # waypost-std
//!
//! Standard implementations for the Waypost URL router.
//!
//! This crate provides:
//! - **Route table**: [`RouteTable`], [`MatchResult`](routing::MatchResult)
//! - **Launchers**: [`FnLauncher`](launchers::FnLauncher),
//!   [`LauncherRegistry`](launchers::LauncherRegistry)
//! - **Providers**: [`StaticRoutes`](provider::StaticRoutes), plus
//!   `inventory`-collected declarations behind the `inventory` feature
//! - **Testing utilities**: spy launcher and failing provider

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use waypost_core;

// Modules
pub mod launchers;
pub mod provider;
pub mod routing;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

pub use routing::RouteTable;

#[cfg(feature = "inventory")]
pub use inventory;
