//! Configuration validation.
//!
//! Semantic checks on a resolved configuration; serde and clap handle
//! the syntactic side. Returns all violations, not just the first, so a
//! broken invocation is fixable in one pass.

use thiserror::Error;
use url::Url;

use crate::config::schema::ProbeConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("url is required")]
    MissingUrl,

    #[error("url {url:?} is not a valid absolute URL: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("url scheme {0:?} is not supported (expected http or https)")]
    UnsupportedScheme(String),

    #[error("status {0} is outside the HTTP status range 100..=599")]
    StatusOutOfRange(u16),

    #[error("tick must be at least 1 second")]
    ZeroTick,
}

/// Check a resolved configuration before the monitor starts.
pub fn validate(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.url.is_empty() {
        errors.push(ValidationError::MissingUrl);
    } else {
        match Url::parse(&config.url) {
            Ok(parsed) if parsed.scheme() != "http" && parsed.scheme() != "https" => {
                errors.push(ValidationError::UnsupportedScheme(
                    parsed.scheme().to_string(),
                ));
            }
            Ok(_) => {}
            Err(source) => errors.push(ValidationError::InvalidUrl {
                url: config.url.clone(),
                source,
            }),
        }
    }

    if !(100..=599).contains(&config.status) {
        errors.push(ValidationError::StatusOutOfRange(config.status));
    }

    if config.tick_secs == 0 {
        errors.push(ValidationError::ZeroTick);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
