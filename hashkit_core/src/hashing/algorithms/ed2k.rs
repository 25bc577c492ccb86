//! ED2K hash algorithm implementation

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};
use md4::{Digest, Md4};

/// eDonkey chunk size (9500 KiB)
pub const CHUNK_SIZE: usize = 9_728_000;

pub struct Ed2kAlgorithm;

/// ED2K streaming hasher
///
/// Inputs shorter than one chunk hash to their plain MD4. Longer inputs hash to
/// the MD4 of the concatenated chunk MD4s, where the trailing chunk is always
/// included even when it is empty (eMule behaviour for exact multiples).
pub(crate) struct Ed2kStreamingHasher {
    // MD4 of the chunk being filled
    chunk: Md4,
    chunk_fill: usize,
    // MD4 over the digests of completed chunks
    chunk_hashes: Md4,
    completed_chunks: u64,
}

impl Ed2kStreamingHasher {
    fn new() -> Self {
        Self {
            chunk: Md4::new(),
            chunk_fill: 0,
            chunk_hashes: Md4::new(),
            completed_chunks: 0,
        }
    }
}

impl StreamingHasher for Ed2kStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        let mut remaining = data;

        while !remaining.is_empty() {
            let to_copy = remaining.len().min(CHUNK_SIZE - self.chunk_fill);
            self.chunk.update(&remaining[..to_copy]);
            self.chunk_fill += to_copy;
            remaining = &remaining[to_copy..];

            if self.chunk_fill == CHUNK_SIZE {
                let chunk_hash = self.chunk.finalize_reset();
                self.chunk_hashes.update(chunk_hash);
                self.chunk_fill = 0;
                self.completed_chunks += 1;
            }
        }
    }

    fn finalize(mut self: Box<Self>) -> Vec<u8> {
        if self.completed_chunks == 0 {
            return self.chunk.finalize().to_vec();
        }

        let last_chunk = self.chunk.finalize();
        self.chunk_hashes.update(last_chunk);
        self.chunk_hashes.finalize().to_vec()
    }
}

impl HashAlgorithmImpl for Ed2kAlgorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ED2K
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(Ed2kStreamingHasher::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md4(data: &[u8]) -> Vec<u8> {
        Md4::digest(data).to_vec()
    }

    #[test]
    fn test_ed2k_empty_data() {
        assert_eq!(
            hex::encode(Ed2kAlgorithm.hash_bytes(b"")),
            "31d6cfe0d16ae931b73c59d7e0c089c0"
        );
    }

    #[test]
    fn test_ed2k_small_data() {
        assert_eq!(
            hex::encode(Ed2kAlgorithm.hash_bytes(b"test content")),
            "a69899814931280e2f527219ad6ac754"
        );
        assert_eq!(
            hex::encode(Ed2kAlgorithm.hash_bytes(b"a")),
            "bde52cb31de33e46245e05fbdbd6fb24"
        );
    }

    #[test]
    fn test_ed2k_just_below_one_chunk_is_plain_md4() {
        let data = vec![0x42u8; CHUNK_SIZE - 1];
        assert_eq!(Ed2kAlgorithm.hash_bytes(&data), md4(&data));
    }

    #[test]
    fn test_ed2k_exact_chunk_appends_empty_chunk_hash() {
        let data = vec![0x42u8; CHUNK_SIZE];
        let mut joined = md4(&data);
        joined.extend(md4(b""));

        assert_eq!(Ed2kAlgorithm.hash_bytes(&data), md4(&joined));
    }

    #[test]
    fn test_ed2k_multiple_chunks_streamed() {
        let data: Vec<u8> = (0..CHUNK_SIZE + 1000).map(|i| (i % 256) as u8).collect();
        let mut joined = md4(&data[..CHUNK_SIZE]);
        joined.extend(md4(&data[CHUNK_SIZE..]));

        let mut hasher = Ed2kAlgorithm.create_hasher(&HasherParams::default());
        for chunk in data.chunks(1 << 20) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), md4(&joined));
    }
}
