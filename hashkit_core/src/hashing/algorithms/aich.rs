//! AICH (eMule Advanced Intelligent Corruption Handling) hash
//!
//! SHA-1 hash tree. Input is cut into 9 728 000-byte parts and every part into
//! 184 320-byte blocks (the last block of a part is shorter). Block hashes are
//! the leaves; when a subtree splits into an odd number of pieces the extra
//! piece goes to the left child of a left branch and to the right child of a
//! right branch.

use super::ed2k::CHUNK_SIZE;
use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};
use sha1::{Digest, Sha1};

pub struct AichAlgorithm;

const BLOCK_SIZE: u64 = 184_320;
const PART_SIZE: u64 = CHUNK_SIZE as u64;

type Node = [u8; 20];

struct AichStreamingHasher {
    block: Sha1,
    block_fill: u64,
    part_fill: u64,
    total: u64,
    // Leaf hashes, one list per part
    parts: Vec<Vec<Node>>,
}

fn to_node(hasher: Sha1) -> Node {
    let mut node = [0u8; 20];
    node.copy_from_slice(&hasher.finalize());
    node
}

impl AichStreamingHasher {
    fn new() -> Self {
        Self {
            block: Sha1::new(),
            block_fill: 0,
            part_fill: 0,
            total: 0,
            parts: vec![Vec::new()],
        }
    }

    fn close_block(&mut self) {
        let block = std::mem::take(&mut self.block);
        if let Some(part) = self.parts.last_mut() {
            part.push(to_node(block));
        }
        self.block_fill = 0;

        if self.part_fill == PART_SIZE {
            self.parts.push(Vec::new());
            self.part_fill = 0;
        }
    }

    fn leaf(&self, offset: u64) -> Node {
        let part = (offset / PART_SIZE) as usize;
        let index = ((offset % PART_SIZE) / BLOCK_SIZE) as usize;
        self.parts
            .get(part)
            .and_then(|blocks| blocks.get(index))
            .copied()
            .unwrap_or_default()
    }

    fn node(&self, offset: u64, len: u64, is_left: bool) -> Node {
        if len <= BLOCK_SIZE {
            return self.leaf(offset);
        }

        let unit = if len <= PART_SIZE { BLOCK_SIZE } else { PART_SIZE };
        let units = len.div_ceil(unit);
        let left_units = if is_left { units.div_ceil(2) } else { units / 2 };
        let left_len = left_units * unit;

        let mut hasher = Sha1::new();
        hasher.update(self.node(offset, left_len, true));
        hasher.update(self.node(offset + left_len, len - left_len, false));
        to_node(hasher)
    }
}

impl StreamingHasher for AichStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        let mut remaining = data;

        while !remaining.is_empty() {
            let block_room = BLOCK_SIZE - self.block_fill;
            let part_room = PART_SIZE - self.part_fill;
            let room = block_room.min(part_room);
            let to_copy = (remaining.len() as u64).min(room) as usize;

            self.block.update(&remaining[..to_copy]);
            self.block_fill += to_copy as u64;
            self.part_fill += to_copy as u64;
            self.total += to_copy as u64;
            remaining = &remaining[to_copy..];

            if self.block_fill == BLOCK_SIZE || self.part_fill == PART_SIZE {
                self.close_block();
            }
        }
    }

    fn finalize(mut self: Box<Self>) -> Vec<u8> {
        if self.total == 0 {
            return Sha1::digest(b"").to_vec();
        }
        if self.block_fill > 0 {
            self.close_block();
        }
        self.node(0, self.total, true).to_vec()
    }
}

impl HashAlgorithmImpl for AichAlgorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::AICH
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(AichStreamingHasher::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::base32_encode;

    fn sha1(data: &[u8]) -> Vec<u8> {
        Sha1::digest(data).to_vec()
    }

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn test_aich_single_block_is_sha1() {
        assert_eq!(
            base32_encode(&AichAlgorithm.hash_bytes(b"a")),
            "q336in72uwt7zyk5dxolt2xk5i3xmz5y"
        );
        let block = patterned(BLOCK_SIZE as usize);
        assert_eq!(AichAlgorithm.hash_bytes(&block), sha1(&block));
    }

    #[test]
    fn test_aich_empty() {
        assert_eq!(AichAlgorithm.hash_bytes(b""), sha1(b""));
    }

    #[test]
    fn test_aich_three_blocks() {
        let data = patterned(BLOCK_SIZE as usize * 2 + 100);
        assert_eq!(
            base32_encode(&AichAlgorithm.hash_bytes(&data)),
            "jyi3oe6n6am3qsrycd33c4h5ovu7olf5"
        );
    }

    #[test]
    fn test_aich_two_blocks_tree_shape() {
        let data = patterned(BLOCK_SIZE as usize + 10);
        let mut joined = sha1(&data[..BLOCK_SIZE as usize]);
        joined.extend(sha1(&data[BLOCK_SIZE as usize..]));
        assert_eq!(AichAlgorithm.hash_bytes(&data), sha1(&joined));
    }

    #[test]
    fn test_aich_streaming_matches_one_shot() {
        let data = patterned(BLOCK_SIZE as usize * 3 + 5);
        let mut hasher = AichAlgorithm.create_hasher(&HasherParams::default());
        for chunk in data.chunks(65_537) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), AichAlgorithm.hash_bytes(&data));
    }
}
