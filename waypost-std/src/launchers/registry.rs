//! Registry launcher for destination handler registration.
//!
//! The registry is the explicit, composition-time replacement for resolving
//! destination identifiers by name at runtime: every presentable unit
//! registers a handler closure under its identifier, and an identifier with
//! no handler is reported as not resolvable.

use std::collections::HashMap;
use waypost_core::{BoxError, DestinationId, LaunchError, Launcher, ParamBag};

type Handler<C> = Box<dyn Fn(&C, ParamBag) -> Result<(), BoxError> + Send + Sync>;

/// A launcher that resolves destination identifiers against registered
/// handler closures.
pub struct LauncherRegistry<C: ?Sized> {
    handlers: HashMap<String, Handler<C>>,
}

impl<C: ?Sized> LauncherRegistry<C> {
    /// Whether a handler is registered for the given destination.
    pub fn resolves(&self, destination: &DestinationId) -> bool {
        self.handlers.contains_key(destination.as_str())
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<C: ?Sized> Launcher<C> for LauncherRegistry<C> {
    fn launch(
        &self,
        ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        let Some(handler) = self.handlers.get(destination.as_str()) else {
            return Err(LaunchError::NotResolvable {
                destination: destination.clone(),
            });
        };
        handler(ctx, params).map_err(LaunchError::Failed)
    }
}

/// Builder for constructing a [`LauncherRegistry`].
pub struct LauncherRegistryBuilder<C: ?Sized> {
    handlers: HashMap<String, Handler<C>>,
}

impl<C: ?Sized> Default for LauncherRegistryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> LauncherRegistryBuilder<C> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a destination identifier.
    ///
    /// Registering the same identifier again replaces the earlier handler.
    pub fn register<F>(mut self, destination: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&C, ParamBag) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.handlers.insert(destination.into(), Box::new(handler));
        self
    }

    /// Build the registry.
    pub fn build(self) -> LauncherRegistry<C> {
        LauncherRegistry {
            handlers: self.handlers,
        }
    }
}
