//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; every subsystem logs through the
//!   same global subscriber
//! - Pretty format for interactive use, JSON for machine parsing
//! - The sink is chosen at startup (stdout or a file) and never changes

pub mod logging;

pub use logging::LogFormat;
