//! Progress reporting for source hashing
//!
//! The context reports how many bytes of a source were consumed after every
//! chunk. Providers decide what to do with it (nothing, forward to a shared
//! provider, push snapshots into a tokio channel).

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Core trait for progress reporting
pub trait ProgressProvider: Send + Sync {
    /// Report a progress update
    fn report(&self, update: ProgressUpdate);

    /// Signal that no further updates will follow
    fn complete(&self);
}

/// Progress update emitted while a source is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// A chunk was fed to the context
    HashProgress {
        source: String,
        bytes_processed: u64,
        total_bytes: Option<u64>,
    },

    /// The source was read to its end
    Finished { source: String, bytes_processed: u64 },

    /// Reading stopped at a chunk boundary because cancellation was requested
    Cancelled { source: String, bytes_processed: u64 },
}

/// Null implementation for when no progress is needed
pub struct NullProvider;

impl ProgressProvider for NullProvider {
    fn report(&self, _update: ProgressUpdate) {}

    fn complete(&self) {}
}

/// Arc-wrapped provider for easy sharing across tasks
pub struct SharedProvider {
    inner: Arc<dyn ProgressProvider>,
}

impl SharedProvider {
    /// Create a new shared provider wrapping the given provider
    pub fn new(provider: Arc<dyn ProgressProvider>) -> Self {
        Self { inner: provider }
    }
}

impl Clone for SharedProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ProgressProvider for SharedProvider {
    fn report(&self, update: ProgressUpdate) {
        self.inner.report(update);
    }

    fn complete(&self) {
        self.inner.complete();
    }
}

/// Snapshot sent through a [`ChannelAdapter`]
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub source: String,
    pub bytes_processed: u64,
    pub total_bytes: Option<u64>,
    /// Percentage of `total_bytes`, when the total is known
    pub percentage: Option<f64>,
    pub throughput_mbps: f64,
    pub cancelled: bool,
}

/// Forwards progress snapshots into a tokio mpsc channel
///
/// Sending never blocks: snapshots are dropped when the channel is full or the
/// receiver is gone.
pub struct ChannelAdapter {
    tx: Mutex<Option<tokio::sync::mpsc::Sender<Progress>>>,
    start_time: Instant,
}

impl ChannelAdapter {
    /// Create a new adapter from an mpsc sender
    pub fn new(tx: tokio::sync::mpsc::Sender<Progress>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
            start_time: Instant::now(),
        }
    }

    fn snapshot(&self, source: String, bytes_processed: u64, total_bytes: Option<u64>) -> Progress {
        let percentage = total_bytes.map(|total| {
            if total > 0 {
                (bytes_processed as f64 / total as f64) * 100.0
            } else {
                100.0
            }
        });
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let throughput_mbps = if elapsed > 0.0 {
            (bytes_processed as f64 / 1_048_576.0) / elapsed
        } else {
            0.0
        };

        Progress {
            source,
            bytes_processed,
            total_bytes,
            percentage,
            throughput_mbps,
            cancelled: false,
        }
    }
}

impl ProgressProvider for ChannelAdapter {
    fn report(&self, update: ProgressUpdate) {
        let progress = match update {
            ProgressUpdate::HashProgress {
                source,
                bytes_processed,
                total_bytes,
            } => self.snapshot(source, bytes_processed, total_bytes),
            ProgressUpdate::Finished {
                source,
                bytes_processed,
            } => self.snapshot(source, bytes_processed, Some(bytes_processed)),
            ProgressUpdate::Cancelled {
                source,
                bytes_processed,
            } => Progress {
                cancelled: true,
                ..self.snapshot(source, bytes_processed, None)
            },
        };

        let tx = self.tx.lock().ok().and_then(|guard| guard.clone());
        if let Some(tx) = tx {
            let _ = tx.try_send(progress);
        }
    }

    fn complete(&self) {
        // Dropping the sender lets receivers observe channel closure
        if let Ok(mut guard) = self.tx.lock() {
            *guard = None;
        }
    }
}
