//! Configuration loading and resolution.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::cli::Cli;
use crate::config::schema::{FileConfig, ProbeConfig, DEFAULT_STATUS, DEFAULT_TICK_SECS};
use crate::config::validation::{validate, ValidationError};
use crate::observability::logging::LogFormat;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolve the effective configuration from CLI flags and the optional
/// config file they point at, then validate it.
///
/// Resolution order per option: explicit flag, then file value, then
/// built-in default.
pub fn resolve(cli: Cli) -> Result<ProbeConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => load_file(path)?,
        None => FileConfig::default(),
    };

    let config = ProbeConfig {
        url: cli.url.or(file.url).unwrap_or_default(),
        status: cli.status.or(file.status).unwrap_or(DEFAULT_STATUS),
        server: cli.server.or(file.server).unwrap_or_default(),
        content_type: cli.content_type.or(file.content_type).unwrap_or_default(),
        user_agent: cli.user_agent.or(file.user_agent).unwrap_or_default(),
        tick_secs: cli.tick.or(file.tick).unwrap_or(DEFAULT_TICK_SECS),
        log_format: cli.log_format.or(file.log_format).unwrap_or(LogFormat::Pretty),
        log_output: cli.log_output.or(file.log_output),
    };

    validate(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
