//! Core traits of the digest engine

use crate::algorithm::AlgorithmId;

/// Single file entry bound to a BitTorrent info dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentFile {
    /// Base name written as `name` in the info dictionary
    pub name: String,
    /// Declared file length in bytes
    pub size: u64,
}

/// Parameters of the BitTorrent info hash
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentParams {
    /// Explicit piece length; derived from the file size when unset
    pub piece_length: Option<u64>,
    /// Emit `7:privatei1e` in the info dictionary
    pub private: bool,
    /// Optional single file entry
    pub file: Option<TorrentFile>,
}

/// Options every hasher is created with
///
/// Only the composite BitTorrent hash reads them today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HasherParams {
    pub torrent: TorrentParams,
}

/// Core trait that all hash algorithms must implement
pub trait HashAlgorithmImpl: Send + Sync {
    /// Identifier of this algorithm
    fn id(&self) -> AlgorithmId;

    /// Create a new streaming hasher instance
    fn create_hasher(&self, params: &HasherParams) -> Box<dyn StreamingHasher>;

    /// Calculate the digest of in-memory data with default parameters
    fn hash_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.create_hasher(&HasherParams::default());
        hasher.update(data);
        hasher.finalize()
    }
}

/// Trait for streaming hash calculation
///
/// `Sync` lets a finalized context be queried from several threads.
pub trait StreamingHasher: Send + Sync {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash calculation and return the binary digest
    fn finalize(self: Box<Self>) -> Vec<u8>;
}
