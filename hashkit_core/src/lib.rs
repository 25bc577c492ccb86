//! Hashkit Core Library
//!
//! Multi-algorithm incremental hashing: one pass over the input computes every
//! selected digest, which can then be rendered in several encodings or
//! combined into a magnet URI.
//!
//! ```
//! use hashkit_core::{AlgorithmId, HashContext};
//!
//! let mut context = HashContext::new(AlgorithmId::CRC32 | AlgorithmId::MD5)?;
//! context.update(b"12345\n")?;
//! context.finish()?;
//!
//! assert_eq!(context.to_hex(AlgorithmId::CRC32)?, "261dafe6");
//! # Ok::<(), hashkit_core::Error>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod context;
mod engine;
pub mod error;
pub mod format;
pub mod hashing;
pub mod magnet;
pub mod progress;
pub mod source;

// Re-export main types
pub use algorithm::{AlgorithmId, AlgorithmMask};
pub use config::{HashConfig, TorrentConfig};
pub use context::{
    ContextState, DigestView, HashContext, HashResult, digest_of_bytes, digest_of_file,
    digest_of_source, magnet_for_file,
};
pub use error::{Error, Result};
pub use format::{Encoding, Formatted, OutputFormat};
pub use hashing::{TorrentFile, default_piece_length};
pub use magnet::MagnetOptions;
pub use progress::{
    ChannelAdapter, NullProvider, Progress, ProgressProvider, ProgressUpdate, SharedProvider,
};
pub use source::{FileSource, MemorySource, StreamSource};
pub use tokio_util::sync::CancellationToken;

/// Build the algorithm registry ahead of the first context
///
/// Contexts initialize it lazily, so calling this is optional. Repeated calls
/// are cheap.
pub fn init() {
    hashing::AlgorithmRegistry::global();
}
