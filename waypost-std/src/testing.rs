//! Testing utilities for Waypost.
//!
//! This module provides doubles for the two collaborator seams:
//!
//! - [`SpyLauncher`]: records every launch it receives and can be
//!   programmed to refuse resolution
//! - [`FailingProvider`]: a route provider that always fails, for
//!   exercising the soft init-failure path

use std::sync::{Arc, Mutex};
use waypost_core::{DestinationId, LaunchError, Launcher, ParamBag, RouteProvider};

/// A launcher that records every call and can be told to refuse.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyLauncher::new();
/// let dispatcher = Dispatcher::new(table, spy.clone());
///
/// dispatcher.resolve_and_launch(&(), "router://page-user?name=imooc")?;
///
/// assert_eq!(spy.call_count(), 1);
/// let (destination, params) = &spy.calls()[0];
/// ```
pub struct SpyLauncher {
    calls: Arc<Mutex<Vec<(DestinationId, ParamBag)>>>,
    resolvable: Arc<Mutex<bool>>,
}

impl SpyLauncher {
    /// Create a spy that accepts every launch.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            resolvable: Arc::new(Mutex::new(true)),
        }
    }

    /// Make subsequent launches fail with `NotResolvable`.
    ///
    /// The refused calls are still recorded.
    pub fn refuse_resolution(&self) {
        *self.resolvable.lock().unwrap() = false;
    }

    /// Accept launches again.
    pub fn accept_resolution(&self) {
        *self.resolvable.lock().unwrap() = true;
    }

    /// Get a clone of the recorded `(destination, params)` calls.
    pub fn calls(&self) -> Vec<(DestinationId, ParamBag)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `launch` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for SpyLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SpyLauncher {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            resolvable: self.resolvable.clone(),
        }
    }
}

impl<C: ?Sized> Launcher<C> for SpyLauncher {
    fn launch(
        &self,
        _ctx: &C,
        destination: &DestinationId,
        params: ParamBag,
    ) -> Result<(), LaunchError> {
        self.calls
            .lock()
            .unwrap()
            .push((destination.clone(), params));

        if *self.resolvable.lock().unwrap() {
            Ok(())
        } else {
            Err(LaunchError::NotResolvable {
                destination: destination.clone(),
            })
        }
    }
}

/// A route provider that always fails.
///
/// Models the "mapping table was never generated" situation the router must
/// tolerate as zero routes.
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    /// Create a provider that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RouteProvider for FailingProvider {
    fn routes(&self) -> Result<std::collections::HashMap<String, String>, waypost_core::BoxError> {
        Err(self.message.clone().into())
    }
}
