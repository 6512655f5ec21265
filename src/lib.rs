//! Periodic HTTP health checker library.

// Core subsystems
pub mod config;
pub mod probe;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProbeConfig;
pub use lifecycle::Shutdown;
pub use probe::{Expectation, Monitor, Observation};
