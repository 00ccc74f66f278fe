//! Standard launcher implementations.

pub mod func;
pub mod registry;

pub use func::FnLauncher;
pub use registry::{LauncherRegistry, LauncherRegistryBuilder};
