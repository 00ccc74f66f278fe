//! # Routing Implementations
//!
//! This module provides the route table and its lookup result type:
//!
//! - [`RouteTable`]: the raw-key → destination mapping with a parsed
//!   pattern cache, loaded once at composition time.
//! - [`MatchResult`]: explicit hit/miss outcome of a lookup — a miss is a
//!   value, never a panic or a silent default.

pub mod table;

pub use table::RouteTable;

use waypost_core::DestinationId;

/// The result of a route table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// A registered pattern matched; contains its destination.
    Matched(&'a DestinationId),
    /// No registered pattern matches the triple.
    NotFound,
}

impl<'a> MatchResult<'a> {
    /// Returns true if a pattern matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Returns the matched destination, if any.
    pub fn matched(self) -> Option<&'a DestinationId> {
        match self {
            MatchResult::Matched(destination) => Some(destination),
            MatchResult::NotFound => None,
        }
    }
}
