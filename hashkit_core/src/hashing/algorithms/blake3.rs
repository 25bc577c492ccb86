//! BLAKE3 hash algorithm implementation

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};

pub struct Blake3Algorithm;

struct Blake3StreamingHasher {
    hasher: blake3::Hasher,
}

impl StreamingHasher for Blake3StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().as_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Blake3Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BLAKE3
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(Blake3StreamingHasher {
            hasher: blake3::Hasher::new(),
        })
    }

    fn hash_bytes(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }
}
