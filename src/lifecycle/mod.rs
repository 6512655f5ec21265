//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → trigger shutdown coordinator
//!
//! Shutdown (shutdown.rs):
//!     broadcast channel → monitor observes between ticks → clean exit
//! ```
//!
//! # Design Decisions
//! - The signal listener only triggers shutdown; it never terminates the
//!   process itself, so the top-level caller owns the exit code
//! - Shutdown is one-shot and non-resumable; the current check finishes,
//!   no new tick begins

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
