//! # waypost-core
//!
//! Core types and collaborator traits for the Waypost URL router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! route providers and launchers that don't need the full `waypost-std`
//! implementation.
//!
//! # Architecture
//!
//! Waypost resolves declarative route patterns to opaque destinations in
//! three layers, each with a seam a host application can replace:
//!
//! ## Layer 1: Patterns ([`RoutePattern`], [`DispatchUrl`], [`ParamBag`])
//!
//! The wire-level vocabulary. A route key is `scheme://host/path`; an
//! incoming dispatch URL is the same triple plus an optional query whose
//! `k=v` pairs become the parameter bag.
//!
//! ## Layer 2: Mapping ([`RouteProvider`])
//!
//! Where the route table's contents come from. The provider is injected at
//! composition time and queried exactly once during load; its absence or
//! failure degrades to an empty, still-usable table.
//!
//! ## Layer 3: Launch ([`Launcher`])
//!
//! The terminal hand-off. A matched destination identifier and its
//! parameter bag are given to the launcher, which alone knows how to turn
//! them into a presented unit.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Terminal dispatch outcomes
//! - [`LaunchError`] - Launcher-reported failures
//! - [`PatternError`] - Route-key / URL parse failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod destination;
mod error;
mod launcher;
mod params;
mod pattern;
mod provider;

// Re-exports
pub use destination::DestinationId;
pub use error::{BoxError, DispatchError, LaunchError};
pub use launcher::Launcher;
pub use params::ParamBag;
pub use pattern::{DispatchUrl, PatternError, RoutePattern};
pub use provider::RouteProvider;
