//! Test utilities for hashkit
//!
//! This crate provides byte-source mocks, progress recorders, test data
//! builders and reference digests for testing hash contexts.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{KnownVector, TestDataBuilder, a_vectors, abc_vectors, streebog_empty_vectors};
pub use mocks::{FailingSource, RecordingProvider, TrickleSource};
