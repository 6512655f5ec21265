//! Command-line interface definition.
//!
//! Every option here can also come from a TOML config file (see
//! [`schema::FileConfig`](crate::config::schema::FileConfig)); flags
//! given on the command line override file values.

use std::path::PathBuf;

use clap::Parser;

use crate::observability::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "vigil")]
#[command(version, about = "Periodic HTTP health checker", long_about = None)]
pub struct Cli {
    /// Request URL to poll.
    #[arg(long)]
    pub url: Option<String>,

    /// Expected response HTTP status code [default: 200].
    #[arg(long)]
    pub status: Option<u16>,

    /// Expected Server header value (unset = expect absent).
    #[arg(long)]
    pub server: Option<String>,

    /// Expected Content-Type header value (unset = expect absent).
    #[arg(long)]
    pub content_type: Option<String>,

    /// Expected User-Agent header value (unset = expect absent).
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Ticking interval in seconds [default: 60].
    #[arg(long)]
    pub tick: Option<u64>,

    /// Path to a TOML config file providing the same options.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log line format [default: pretty].
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Write log lines to this file instead of stdout.
    #[arg(long)]
    pub log_output: Option<PathBuf>,
}
