//! # Launch Seam (Launcher)
//!
//! The launcher is the platform-specific collaborator that turns a resolved
//! destination identifier and its parameter bag into an actual presented
//! unit. The router core knows nothing about what a destination *is*; it
//! only hands over the identifier it matched.
//!
//! # Roles
//!
//! - **Resolution**: Map the opaque identifier onto a concrete handler.
//! - **Hand-off**: Receive ownership of the extracted [`ParamBag`].
//! - **Failure reporting**: Signal an unknown identifier via
//!   [`LaunchError::NotResolvable`] instead of panicking.

use crate::destination::DestinationId;
use crate::error::LaunchError;
use crate::params::ParamBag;
use std::sync::Arc;

/// The destination-launcher interface.
///
/// `C` is the caller-supplied context handle threaded through each dispatch
/// call (a window handle, an app environment, `()` when none is needed).
/// The dispatcher itself never inspects it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot launch destinations with context `{C}`",
    label = "missing `Launcher` implementation",
    note = "Implement `Launcher<{C}>` so the dispatcher can hand matched routes to it."
)]
pub trait Launcher<C: ?Sized>: Send + Sync {
    /// Launch the destination with the extracted parameters.
    ///
    /// Returns [`LaunchError::NotResolvable`] when the identifier names no
    /// known handler; the dispatcher reports that as a launch failure and
    /// does not retry.
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError>;
}

impl<C: ?Sized, L: Launcher<C> + ?Sized> Launcher<C> for &L {
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        (**self).launch(ctx, destination, params)
    }
}

impl<C: ?Sized, L: Launcher<C> + ?Sized> Launcher<C> for Arc<L> {
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        (**self).launch(ctx, destination, params)
    }
}

impl<C: ?Sized, L: Launcher<C> + ?Sized> Launcher<C> for Box<L> {
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        (**self).launch(ctx, destination, params)
    }
}
