use crate::Metrics;

use sk_auth::LoginRateLimiter;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically drop rate limit entries whose window has elapsed.
/// The task runs until aborted.
pub fn spawn_rate_limit_sweeper(
    limiter: Arc<LoginRateLimiter>,
    every: Duration,
    metrics: Metrics,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = limiter.sweep_expired();
            let remaining = limiter.tracked_keys();
            metrics.rate_limit_swept(removed, remaining);
            debug!(
                "Rate limit sweep: {} removed, {} tracked",
                removed, remaining
            );
        }
    })
}
