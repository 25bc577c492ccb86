//! Mock implementations for testing

mod progress;
mod source;

pub use progress::RecordingProvider;
pub use source::{FailingSource, TrickleSource};
