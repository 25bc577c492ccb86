//! CRC32 and CRC32C checksum implementations

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};
use crc32fast::Hasher as Crc32Hasher;

/// CRC32 (IEEE) checksum
pub struct Crc32Algorithm;

/// CRC32C (Castagnoli) checksum
pub struct Crc32cAlgorithm;

struct Crc32StreamingHasher {
    hasher: Crc32Hasher,
}

impl StreamingHasher for Crc32StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_be_bytes().to_vec()
    }
}

struct Crc32cStreamingHasher {
    crc: u32,
}

impl StreamingHasher for Crc32cStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        self.crc = crc32c::crc32c_append(self.crc, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.crc.to_be_bytes().to_vec()
    }
}

impl HashAlgorithmImpl for Crc32Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::CRC32
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(Crc32StreamingHasher {
            hasher: Crc32Hasher::new(),
        })
    }
}

impl HashAlgorithmImpl for Crc32cAlgorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::CRC32C
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(Crc32cStreamingHasher { crc: 0 })
    }
}
