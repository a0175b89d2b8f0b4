//! Provider traits for time, randomness, and task spawning.
//!
//! All timing and randomness in the crate flows through these seams so tests
//! can substitute a paused clock and a seeded (or forced) randomness source
//! and exercise latency, debounce, and failure-injection paths
//! deterministically.

mod random;
mod task;
mod time;

pub use random::{RandomProvider, SeededRandomProvider, ThreadRandomProvider};
pub use task::{TaskProvider, TokioTaskProvider};
pub use time::{TimeProvider, TokioTimeProvider};
