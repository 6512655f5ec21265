//! The poll loop.
//!
//! # Responsibilities
//! - Wake once per interval and issue a single GET against the target
//! - Hand each response to the evaluator and log every mismatch
//! - Exit cleanly when the shutdown signal fires

use tokio::sync::broadcast;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::probe::evaluate::evaluate;
use crate::probe::types::{Expectation, Observation, ProbeError};

/// Drives periodic checks against one target URL.
///
/// Owns its [`Expectation`] for the whole run; every tick is evaluated
/// against the same values.
pub struct Monitor {
    expectation: Expectation,
    client: reqwest::Client,
}

impl Monitor {
    pub fn new(expectation: Expectation) -> Self {
        Self {
            expectation,
            client: reqwest::Client::new(),
        }
    }

    /// Run until the shutdown signal fires or a request fails.
    ///
    /// The first check happens one full interval after start; there is
    /// no check at t=0. Shutdown is observed only between ticks, so an
    /// in-flight check always runs to completion. A failed request is
    /// fatal and surfaces to the caller; mismatches are logged and the
    /// loop continues.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> Result<(), ProbeError> {
        tracing::info!(
            url = %self.expectation.url,
            interval_secs = self.expectation.tick.as_secs(),
            "monitor starting"
        );

        let mut ticker = time::interval_at(
            Instant::now() + self.expectation.tick,
            self.expectation.tick,
        );
        // A slow request must not cause a burst of catch-up ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check().await?;
                }
                _ = shutdown.recv() => {
                    tracing::info!("monitor received shutdown signal, exiting loop");
                    return Ok(());
                }
            }
        }
    }

    async fn check(&self) -> Result<(), ProbeError> {
        let response = self
            .client
            .get(&self.expectation.url)
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: self.expectation.url.clone(),
                source,
            })?;

        let observation = Observation::capture(response.status().as_u16(), response.headers());

        for mismatch in evaluate(&self.expectation, &observation) {
            tracing::warn!(
                field = %mismatch.field,
                observed = %mismatch.observed,
                expected = %mismatch.expected,
                "response does not match expectation"
            );
        }

        Ok(())
    }
}
