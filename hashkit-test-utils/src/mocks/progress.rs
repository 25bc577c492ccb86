//! Progress provider that records every update

use hashkit_core::{ProgressProvider, ProgressUpdate};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Captures progress updates for later assertions
#[derive(Debug, Default)]
pub struct RecordingProvider {
    updates: Mutex<Vec<ProgressUpdate>>,
    completed: AtomicBool,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every update received so far
    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// Byte counts of the `HashProgress` updates, in order
    pub fn progress_offsets(&self) -> Vec<u64> {
        self.updates()
            .into_iter()
            .filter_map(|update| match update {
                ProgressUpdate::HashProgress {
                    bytes_processed, ..
                } => Some(bytes_processed),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<ProgressUpdate> {
        self.updates.lock().unwrap().last().cloned()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

impl ProgressProvider for RecordingProvider {
    fn report(&self, update: ProgressUpdate) {
        self.updates.lock().unwrap().push(update);
    }

    fn complete(&self) {
        self.completed.store(true, Ordering::SeqCst);
    }
}
