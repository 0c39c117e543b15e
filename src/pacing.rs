//! Pacing for rewrite service calls.
//!
//! A flat minimum gap between the end of one call and the start of the next.
//! It bounds throughput only; bursts are not a concern because calls are
//! strictly sequential.

use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::info;

#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_call: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: None,
        }
    }

    /// Wait until `interval` has passed since the last recorded call.
    ///
    /// Returns immediately before the first call.
    pub async fn wait(&self) {
        let Some(last) = self.last_call else {
            return;
        };
        let ready_at = last + self.interval;
        let now = Instant::now();
        if ready_at > now {
            let delay = ready_at - now;
            info!(delay_ms = delay.as_millis(), "Waiting to respect rewrite service limits");
            sleep(delay).await;
        }
    }

    /// Record that a call just finished, successful or not.
    pub fn mark(&mut self) {
        self.last_call = Some(Instant::now());
    }
}
