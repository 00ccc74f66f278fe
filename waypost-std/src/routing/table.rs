//! The route table.
//!
//! # Data Flow
//! ```text
//! RouteProvider (queried once at load)
//!     → load: raw key → DestinationId map, last-write-wins per key
//!     → parsed cache rebuilt (RoutePattern per key)
//!
//! Lookup:
//!     parsed triple → scan cache → Matched(destination) | NotFound
//! ```
//!
//! # Design Decisions
//! - Raw keys keep their identity in a `HashMap`, so re-loading a key
//!   silently replaces its destination (bulk "add all" compatibility).
//! - Patterns are parsed once per load instead of once per lookup; the
//!   observable matching behavior is identical.
//! - Two entries matching the same triple are a configuration smell: the
//!   lookup keeps the last one evaluated and logs a warning, it does not
//!   reject the table.

use crate::routing::MatchResult;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use waypost_core::{DestinationId, RoutePattern, RouteProvider};

/// The mapping from raw route keys to destination identifiers.
///
/// Constructed empty, populated via [`load`](RouteTable::load) (typically
/// once during process initialization), and read for the rest of the
/// process's life. Loading again merges rather than replaces.
#[derive(Debug, Default)]
pub struct RouteTable {
    raw: HashMap<String, DestinationId>,
    // Rebuilt from `raw` after every load; keys that fail to parse are
    // excluded (they could never match anyway).
    parsed: Vec<(RoutePattern, DestinationId)>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge raw `key → destination` entries into the table.
    ///
    /// An empty iterator is a no-op, not an error. A key already present is
    /// silently overwritten with the later destination.
    pub fn load<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut added = 0usize;
        for (key, destination) in entries {
            let key = key.into();
            let destination = DestinationId::new(destination.into());
            debug!(key = %key, destination = %destination, "route registered");
            self.raw.insert(key, destination);
            added += 1;
        }
        if added == 0 {
            return;
        }
        self.rebuild_cache();
        info!(routes = self.raw.len(), "route table loaded");
    }

    /// Pull the full mapping from a [`RouteProvider`], exactly once.
    ///
    /// A provider failure is soft: it is logged and the table keeps its
    /// current (possibly empty) contents, so the router stays usable with
    /// zero new routes.
    pub fn load_from<P: RouteProvider + ?Sized>(&mut self, provider: &P) {
        match provider.routes() {
            Ok(routes) => self.load(routes),
            Err(error) => {
                warn!(error = %error, "route provider failed; continuing without its routes");
            }
        }
    }

    fn rebuild_cache(&mut self) {
        self.parsed.clear();
        for (key, destination) in &self.raw {
            match RoutePattern::parse(key) {
                Ok(pattern) => self.parsed.push((pattern, destination.clone())),
                Err(error) => {
                    warn!(key = %key, error = %error, "unmatchable route key skipped");
                }
            }
        }
    }

    /// Look up the destination for an exact scheme/host/path triple.
    ///
    /// Scans every entry; when several entries match the same triple the
    /// last one evaluated wins and the ambiguity is logged. Callers must
    /// not rely on a specific winner among duplicates.
    pub fn match_route(&self, pattern: &RoutePattern) -> MatchResult<'_> {
        let mut found: Option<&DestinationId> = None;
        for (candidate, destination) in &self.parsed {
            if candidate == pattern {
                if let Some(previous) = found {
                    warn!(
                        pattern = %pattern,
                        shadowed = %previous,
                        kept = %destination,
                        "ambiguous route table: multiple entries match this triple"
                    );
                }
                found = Some(destination);
            }
        }
        match found {
            Some(destination) => MatchResult::Matched(destination),
            None => MatchResult::NotFound,
        }
    }

    /// Number of registered raw keys.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
