//! vigil — periodic HTTP health checker.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐     ┌───────────────────────────────┐
//!   │   CLI    │────▶│  config (flags > file > defaults,
//!   │  flags   │     │  semantic validation)          │
//!   └──────────┘     └──────────────┬────────────────┘
//!                                   │ Expectation
//!                                   ▼
//!   ┌──────────┐  trigger   ┌──────────────┐   GET    ┌─────────┐
//!   │ signals  │───────────▶│   monitor    │─────────▶│ target  │
//!   │SIGINT/TERM│  shutdown │  (poll loop) │◀─────────│  URL    │
//!   └──────────┘            └──────┬───────┘ response └─────────┘
//!                                  │ Observation
//!                                  ▼
//!                           ┌──────────────┐
//!                           │  evaluator   │──▶ one log line
//!                           │ (4 fields)   │    per mismatch
//!                           └──────────────┘
//! ```
//!
//! Exit code policy: 0 on clean shutdown via signal, 1 on configuration
//! error or request failure (message on stderr).

use clap::Parser;

use vigil::config::{self, Cli};
use vigil::lifecycle::{signals, Shutdown};
use vigil::observability::logging;
use vigil::probe::{Expectation, Monitor};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::resolve(cli)?;
    logging::init(config.log_format, config.log_output.as_deref())?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.url,
        tick_secs = config.tick_secs,
        "vigil starting"
    );

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let monitor = Monitor::new(Expectation::from(&config));
    monitor.run(monitor_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
