//! Adapter for the fixed-output hash functions built on the `digest` traits

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};
use digest::Digest;
use std::marker::PhantomData;

/// A plain hash function backed by a `digest::Digest` implementation
pub(crate) struct DigestAlgorithm<D> {
    id: AlgorithmId,
    _hasher: PhantomData<fn() -> D>,
}

impl<D> DigestAlgorithm<D> {
    pub(crate) fn new(id: AlgorithmId) -> Self {
        Self {
            id,
            _hasher: PhantomData,
        }
    }
}

/// Streaming hasher wrapping any `Digest`
struct DigestStreamingHasher<D> {
    hasher: D,
}

impl<D: Digest + Send + Sync> StreamingHasher for DigestStreamingHasher<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }
}

impl<D: Digest + Send + Sync + 'static> HashAlgorithmImpl for DigestAlgorithm<D> {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(DigestStreamingHasher { hasher: D::new() })
    }

    fn hash_bytes(&self, data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }
}
