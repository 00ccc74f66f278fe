//! Error types for Waypost.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Terminal outcomes of a failed dispatch call
//! - [`LaunchError`] - Failures reported by the launcher collaborator
//!
//! Every variant is a local, terminal outcome: dispatch failures are
//! returned and logged, never raised as a panic that could take down the
//! calling process.

use crate::destination::DestinationId;
use crate::pattern::RoutePattern;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving and launching one URL.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The caller handed over an empty or unparseable URL.
    ///
    /// This is a contract check, not a recoverable retry path: no table
    /// lookup and no launch attempt happens. Unparseable covers more than
    /// the missing/empty case: a string that is not `scheme://host/path`
    /// syntax lands here rather than in [`NotFound`](Self::NotFound),
    /// since it never produces a triple to match.
    #[error("invalid dispatch argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// No registered route matches the parsed scheme/host/path triple.
    ///
    /// The launcher collaborator is never invoked for a miss.
    #[error("no route registered for `{0}`")]
    NotFound(RoutePattern),

    /// A route matched but the launcher collaborator could not complete
    /// the launch.
    #[error("launch failed for destination `{destination}`")]
    LaunchFailed {
        /// The destination the matched route resolved to.
        destination: DestinationId,
        /// The launcher's report of what went wrong.
        #[source]
        source: LaunchError,
    },
}

/// Errors reported by the launcher collaborator.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The destination identifier is unknown to the launcher.
    #[error("destination `{destination}` cannot be resolved to a handler")]
    NotResolvable {
        /// The identifier that could not be resolved.
        destination: DestinationId,
    },

    /// The destination resolved but its handler failed.
    #[error("destination handler failed")]
    Failed(#[source] BoxError),
}

// Convenience conversions
impl From<BoxError> for LaunchError {
    fn from(err: BoxError) -> Self {
        LaunchError::Failed(err)
    }
}

impl DispatchError {
    /// Returns true if this is the no-matching-route outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{DispatchError, LaunchError};
    use crate::destination::DestinationId;
    use crate::pattern::RoutePattern;

    #[test]
    fn display_names_the_offending_input() {
        let pattern = RoutePattern::parse("app://settings/audio").unwrap();
        let err = DispatchError::NotFound(pattern);
        assert_eq!(
            err.to_string(),
            "no route registered for `app://settings/audio`"
        );
        assert!(err.is_not_found());

        let err = DispatchError::LaunchFailed {
            destination: DestinationId::new("SettingsScreen"),
            source: LaunchError::NotResolvable {
                destination: DestinationId::new("SettingsScreen"),
            },
        };
        assert_eq!(
            err.to_string(),
            "launch failed for destination `SettingsScreen`"
        );
    }
}
