//! Configuration schema definitions.

use std::path::PathBuf;

use serde::Deserialize;

use crate::observability::logging::LogFormat;

/// Default expected status code when neither flag nor file sets one.
pub const DEFAULT_STATUS: u16 = 200;

/// Default ticking interval in seconds.
pub const DEFAULT_TICK_SECS: u64 = 60;

/// Options accepted from a TOML config file.
///
/// Mirrors the CLI flag namespace one-to-one. Every field is optional;
/// unset fields fall back to the built-in defaults during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub status: Option<u16>,
    pub server: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub tick: Option<u64>,
    pub log_format: Option<LogFormat>,
    pub log_output: Option<PathBuf>,
}

/// Fully resolved probe configuration.
///
/// Produced once at startup by [`loader::resolve`](crate::config::loader::resolve)
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Target URL for the periodic GET.
    pub url: String,

    /// Expected response status code.
    pub status: u16,

    /// Expected `Server` header value; empty means "expect absent".
    pub server: String,

    /// Expected `Content-Type` header value; empty means "expect absent".
    pub content_type: String,

    /// Expected `User-Agent` header value; empty means "expect absent".
    pub user_agent: String,

    /// Poll interval in seconds.
    pub tick_secs: u64,

    /// Log line format.
    pub log_format: LogFormat,

    /// Log sink; `None` means stdout.
    pub log_output: Option<PathBuf>,
}
