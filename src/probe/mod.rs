//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Poll loop (monitor.rs):
//!     Periodic timer
//!     → one GET against the target URL
//!     → Observation captured from the response
//!
//! Evaluation (evaluate.rs):
//!     Observation × Expectation
//!     → zero or more Mismatches
//!     → one log line each
//! ```
//!
//! # Design Decisions
//! - One target, one in-flight check at a time; the loop is single-tasked
//! - A failed request is fatal and surfaces to the caller; a mismatch is
//!   an observation and the loop continues
//! - Shutdown is observed between ticks only, never mid-request

pub mod evaluate;
pub mod monitor;
pub mod types;

pub use evaluate::{Field, Mismatch};
pub use monitor::Monitor;
pub use types::{Expectation, Observation, ProbeError};
