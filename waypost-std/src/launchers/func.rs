//! Closure-backed launcher.

use waypost_core::{DestinationId, LaunchError, Launcher, ParamBag};

/// A launcher backed by a single closure.
///
/// Useful when the host application already has its own destination
/// resolution and just needs to plug it into the dispatcher.
pub struct FnLauncher<F> {
    f: F,
}

impl<F> FnLauncher<F> {
    /// Wrap a closure as a launcher.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<C, F> Launcher<C> for FnLauncher<F>
where
    C: ?Sized,
    F: Fn(&C, &DestinationId, ParamBag) -> Result<(), LaunchError> + Send + Sync,
{
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        (self.f)(ctx, destination, params)
    }
}

#[cfg(test)]
mod tests {
    use super::FnLauncher;
    use waypost_core::{DestinationId, LaunchError, Launcher, ParamBag};

    #[test]
    fn forwards_to_the_closure() {
        let launcher = FnLauncher::new(
            |ctx: &str, destination: &DestinationId, params: ParamBag| -> Result<(), LaunchError> {
                assert_eq!(ctx, "window-1");
                assert_eq!(destination.as_str(), "Home");
                assert!(params.is_empty());
                Ok(())
            },
        );

        launcher
            .launch("window-1", &DestinationId::new("Home"), ParamBag::new())
            .unwrap();
    }

    #[test]
    fn closure_errors_pass_through() {
        let launcher = FnLauncher::new(
            |_: &(), destination: &DestinationId, _: ParamBag| -> Result<(), LaunchError> {
                Err(LaunchError::NotResolvable {
                    destination: destination.clone(),
                })
            },
        );

        let err = launcher
            .launch(&(), &DestinationId::new("Nowhere"), ParamBag::new())
            .unwrap_err();
        assert!(matches!(err, LaunchError::NotResolvable { .. }));
    }
}
