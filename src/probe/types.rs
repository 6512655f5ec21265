//! Probe value types and error definitions.

use std::time::Duration;

use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::config::ProbeConfig;

/// The fixed set of values every check is validated against.
///
/// Built once at startup and owned by the [`Monitor`](crate::probe::Monitor)
/// for its entire lifetime; every tick is evaluated against the same
/// expectation. An empty header value means the header is expected to be
/// absent or blank on the live response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub url: String,
    pub status: u16,
    pub server: String,
    pub content_type: String,
    pub user_agent: String,
    pub tick: Duration,
}

impl From<&ProbeConfig> for Expectation {
    fn from(config: &ProbeConfig) -> Self {
        Self {
            url: config.url.clone(),
            status: config.status,
            server: config.server.clone(),
            content_type: config.content_type.clone(),
            user_agent: config.user_agent.clone(),
            tick: Duration::from_secs(config.tick_secs),
        }
    }
}

/// The watched subset of one live HTTP response.
///
/// Created fresh per tick and discarded after evaluation; nothing is
/// carried across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub status: u16,
    pub server: String,
    pub content_type: String,
    pub user_agent: String,
}

impl Observation {
    /// Capture status code and watched headers from a response.
    ///
    /// An absent header and a header value that is not valid UTF-8 both
    /// read as empty.
    pub fn capture(status: u16, headers: &HeaderMap) -> Self {
        Self {
            status,
            server: header_text(headers, "server"),
            content_type: header_text(headers, "content-type"),
            user_agent: header_text(headers, "user-agent"),
        }
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Errors that can occur while polling.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The GET itself failed (connect error, timeout, malformed response).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
