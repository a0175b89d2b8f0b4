//! Time provider abstraction.

use async_trait::async_trait;
use std::time::Duration;

/// Provider trait for time operations.
///
/// This trait lets the simulated API and the controllers work against either
/// real wall-clock time or a test-controlled clock in a unified way.
/// Implementations handle sleeping and reporting elapsed time appropriate
/// for their environment.
#[async_trait(?Send)]
pub trait TimeProvider: Clone {
    /// Sleep for the specified duration.
    async fn sleep(&self, duration: Duration);

    /// Elapsed time since the provider was created.
    ///
    /// Use this for scheduling comparisons (toast deadlines, latency
    /// assertions), never for wall-clock timestamps.
    fn now(&self) -> Duration;
}

/// Time provider backed by Tokio's clock.
///
/// Uses `tokio::time` throughout, so tests running under a paused runtime
/// clock (`start_paused`) observe deterministic, auto-advancing time.
#[derive(Debug, Clone)]
pub struct TokioTimeProvider {
    /// Start instant for calculating elapsed duration
    start_time: tokio::time::Instant,
}

impl TokioTimeProvider {
    /// Create a new Tokio time provider anchored at the current instant.
    pub fn new() -> Self {
        Self {
            start_time: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TimeProvider for TokioTimeProvider {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn now_advances_with_sleep() {
        let time = TokioTimeProvider::new();
        assert_eq!(time.now(), Duration::ZERO);

        time.sleep(Duration::from_millis(250)).await;

        assert!(time.now() >= Duration::from_millis(250));
    }
}
