//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (cli.rs)          config file (TOML, schema.rs)
//!        │                            │
//!        └────────────┬───────────────┘
//!                     ▼
//!             loader.rs (resolve: flags > file > defaults)
//!                     ▼
//!             validation.rs (semantic checks)
//!                     ▼
//!             ProbeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Flags and file share one option namespace; an explicit flag always
//!   wins over the file value for the same option
//! - All options have defaults so a minimal invocation needs only a URL
//! - Validation separates syntactic (serde/clap) from semantic checks
//!   and reports every violation, not just the first

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{resolve, ConfigError};
pub use schema::ProbeConfig;
pub use validation::ValidationError;
