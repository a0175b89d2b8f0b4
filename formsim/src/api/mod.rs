//! Simulated persistence API.
//!
//! [`QuestionApi`] stands in for a real backend: four asynchronous CRUD
//! operations over one durable collection, each preceded by a randomized
//! latency and a probabilistic injected failure. The contract is precise
//! enough that a real network client could replace it without changing
//! caller code.

mod config;
mod question_api;

pub use config::ApiConfiguration;
pub use question_api::{Operation, QuestionApi};
