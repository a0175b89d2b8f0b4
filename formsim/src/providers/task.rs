//! Task spawning abstraction for single-threaded execution.

use std::future::Future;

/// Provider for spawning local tasks in a single-threaded context.
///
/// The controllers spawn background work (debounced autosaves) through this
/// trait so the spawning strategy stays swappable. Tasks run via
/// `spawn_local` to preserve the crate's single-threaded execution model;
/// callers must be inside a `tokio::task::LocalSet` or local runtime.
pub trait TaskProvider: Clone {
    /// Spawn a named task that runs on the current thread.
    fn spawn_task<F>(&self, name: &str, future: F) -> tokio::task::JoinHandle<()>
    where
        F: Future<Output = ()> + 'static;
}

/// Task provider backed by `tokio::task::spawn_local`.
#[derive(Debug, Clone, Default)]
pub struct TokioTaskProvider;

impl TokioTaskProvider {
    /// Create a new local task provider.
    pub fn new() -> Self {
        Self
    }
}

impl TaskProvider for TokioTaskProvider {
    fn spawn_task<F>(&self, name: &str, future: F) -> tokio::task::JoinHandle<()>
    where
        F: Future<Output = ()> + 'static,
    {
        tracing::trace!("spawning local task: {}", name);
        tokio::task::spawn_local(future)
    }
}
