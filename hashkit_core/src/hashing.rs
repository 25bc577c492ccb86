//! Digest engine building blocks
//!
//! Every algorithm is a [`HashAlgorithmImpl`] registered once in the global
//! [`AlgorithmRegistry`]. A hasher created from it consumes bytes
//! incrementally and yields the binary digest on finalization.

mod algorithms;
mod registry;
mod traits;

pub use algorithms::btih::{DEFAULT_PIECE_LENGTH, default_piece_length};
pub use algorithms::ed2k::CHUNK_SIZE as ED2K_CHUNK_SIZE;
pub use registry::AlgorithmRegistry;
pub use traits::{HashAlgorithmImpl, HasherParams, StreamingHasher, TorrentFile, TorrentParams};

pub(crate) use algorithms::btih::effective_piece_length;
