//! # Dispatch Engine (Dispatcher)
//!
//! End-to-end resolve-and-launch for one URL.
//!
//! # Data Flow
//! ```text
//! resolve_and_launch(ctx, url)
//!     → contract check (empty URL → InvalidArgument, no table query)
//!     → parse URL (scheme/host/path + optional query)
//!     → RouteTable::match_route (miss → NotFound, no launch)
//!     → ParamBag::from_query
//!     → Launcher::launch(ctx, destination, params)
//! ```
//!
//! # Design Decisions
//! - Synchronous and lock-free: one call does O(routes) work, nothing is
//!   retried and nothing runs in the background.
//! - Every outcome — success or failure — is a returned value plus one
//!   structured log event; nothing panics across the dispatch boundary.
//! - The table is owned by the dispatcher and loaded before serving;
//!   callers needing concurrent load/lookup wrap the dispatcher itself.

use tracing::{debug, warn};
use waypost_core::{
    DestinationId, DispatchError, DispatchUrl, Launcher, ParamBag, RouteProvider,
};
use waypost_std::routing::MatchResult;
use waypost_std::RouteTable;

/// Receipt for a successful dispatch: the launch happened, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    /// The destination the matched route resolved to.
    pub destination: DestinationId,
}

/// Resolves incoming URLs against a [`RouteTable`] and hands matches to a
/// [`Launcher`].
///
/// Owned by whatever composes the router; construct, load, then serve.
/// There is no global instance.
pub struct Dispatcher<L> {
    table: RouteTable,
    launcher: L,
}

impl<L> Dispatcher<L> {
    /// Assemble a dispatcher from an already-loaded table and a launcher.
    pub fn new(table: RouteTable, launcher: L) -> Self {
        Self { table, launcher }
    }

    /// Assemble a dispatcher by loading the table from a provider.
    ///
    /// Provider failure is tolerated as zero routes; the dispatcher stays
    /// usable and simply reports `NotFound` for everything.
    pub fn from_provider<P: RouteProvider + ?Sized>(provider: &P, launcher: L) -> Self {
        let mut table = RouteTable::new();
        table.load_from(provider);
        Self::new(table, launcher)
    }

    /// The route table backing this dispatcher.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Mutable access to the table, for loads that happen after
    /// construction but before serving.
    pub fn table_mut(&mut self) -> &mut RouteTable {
        &mut self.table
    }

    /// The launcher collaborator.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Resolve `url` against the route table and launch its destination.
    ///
    /// `ctx` is the caller's context handle, passed through to the launcher
    /// untouched. On a miss or a refused launch nothing is presented; the
    /// caller decides whether to surface feedback.
    pub fn resolve_and_launch<C: ?Sized>(
        &self,
        ctx: &C,
        url: &str,
    ) -> Result<Dispatched, DispatchError>
    where
        L: Launcher<C>,
    {
        if url.trim().is_empty() {
            warn!("dispatch refused: empty url");
            return Err(DispatchError::InvalidArgument {
                reason: "url is empty".to_owned(),
            });
        }

        let parsed = DispatchUrl::parse(url).map_err(|error| {
            warn!(url, error = %error, "dispatch refused: unparseable url");
            DispatchError::InvalidArgument {
                reason: error.to_string(),
            }
        })?;

        let destination = match self.table.match_route(parsed.pattern()) {
            MatchResult::Matched(destination) => destination.clone(),
            MatchResult::NotFound => {
                warn!(pattern = %parsed.pattern(), "no destination found");
                return Err(DispatchError::NotFound(parsed.pattern().clone()));
            }
        };

        let params = parsed.query().map(ParamBag::from_query).unwrap_or_default();

        debug!(destination = %destination, params = params.len(), "launching destination");
        self.launcher
            .launch(ctx, &destination, params)
            .map_err(|source| {
                warn!(destination = %destination, error = %source, "launch failed");
                DispatchError::LaunchFailed {
                    destination: destination.clone(),
                    source,
                }
            })?;

        Ok(Dispatched { destination })
    }
}
