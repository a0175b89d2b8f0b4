//! Configuration for the simulated API.

use std::ops::Range;
use std::time::Duration;

/// Default key for the durable slot holding the collection.
pub(crate) const DEFAULT_STORAGE_KEY: &str = "form_builder_questions";

/// Configuration for the simulated persistence API.
///
/// Controls the latency envelope, the failure-injection probability, and the
/// durable slot key. Every operation draws its latency uniformly from
/// `latency` and then fails with probability `failure_probability` before
/// touching storage.
#[derive(Debug, Clone)]
pub struct ApiConfiguration {
    /// Uniform latency range applied to every call, exclusive upper bound.
    pub latency: Range<Duration>,

    /// Probability in [0.0, 1.0] that a call fails with an injected fault.
    ///
    /// 0.0 disables injection entirely; 1.0 makes every call fail. Tests use
    /// the extremes to exercise both paths deterministically.
    pub failure_probability: f64,

    /// Key of the durable slot holding the serialized collection.
    pub storage_key: String,
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000)..Duration::from_millis(3000),
            failure_probability: 0.1,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ApiConfiguration {
    /// Millisecond latencies, default fault rate. Keeps tests that only care
    /// about behavior from spending simulated seconds per call.
    pub fn fast_local() -> Self {
        Self {
            latency: Duration::from_millis(1)..Duration::from_millis(3),
            ..Self::default()
        }
    }

    /// Millisecond latencies with failure injection disabled.
    pub fn reliable() -> Self {
        Self {
            failure_probability: 0.0,
            ..Self::fast_local()
        }
    }

    /// Set the failure probability, keeping everything else.
    pub fn with_failure_probability(mut self, probability: f64) -> Self {
        self.failure_probability = probability;
        self
    }
}
