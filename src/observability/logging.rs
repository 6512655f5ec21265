//! Structured logging setup.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::ValueEnum;
use serde::Deserialize;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Install the global subscriber.
///
/// `output` of `None` means stdout; a path is opened in append mode.
/// `RUST_LOG` overrides the default `vigil=info` filter.
pub fn init(format: LogFormat, output: Option<&Path>) -> io::Result<()> {
    let writer = match output {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "vigil=info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(writer);

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }

    Ok(())
}
