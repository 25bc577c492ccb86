//! Tiger Tree Hash (TTH) algorithm implementation
//!
//! THEX Merkle tree over 1024-byte leaves. Completed subtrees are kept on a
//! stack keyed by height, so memory grows with the tree height rather than
//! with the number of leaves.

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher};
use tiger::{Digest as TigerDigest, Tiger};

pub struct TthAlgorithm;

const LEAF_SIZE: usize = 1024;
const HASH_SIZE: usize = 24;
const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

type Node = [u8; HASH_SIZE];

/// TTH streaming hasher
struct TthStreamingHasher {
    leaf: Tiger,
    leaf_fill: usize,
    leaf_count: u64,
    // (height, hash) of completed subtrees, tallest at the bottom
    stack: Vec<(u32, Node)>,
}

impl TthStreamingHasher {
    fn new() -> Self {
        Self {
            leaf: Tiger::new_with_prefix([LEAF_PREFIX]),
            leaf_fill: 0,
            leaf_count: 0,
            stack: Vec::new(),
        }
    }

    fn close_leaf(&mut self) {
        let leaf = std::mem::replace(&mut self.leaf, Tiger::new_with_prefix([LEAF_PREFIX]));
        let mut node = to_node(leaf);
        let mut height = 0;

        while self.stack.last().is_some_and(|(h, _)| *h == height) {
            if let Some((_, left)) = self.stack.pop() {
                node = combine(&left, &node);
            }
            height += 1;
        }

        self.stack.push((height, node));
        self.leaf_fill = 0;
        self.leaf_count += 1;
    }
}

fn to_node(hasher: Tiger) -> Node {
    let mut node = [0u8; HASH_SIZE];
    node.copy_from_slice(&hasher.finalize());
    node
}

fn combine(left: &Node, right: &Node) -> Node {
    let mut hasher = Tiger::new_with_prefix([NODE_PREFIX]);
    TigerDigest::update(&mut hasher, left);
    TigerDigest::update(&mut hasher, right);
    to_node(hasher)
}

impl StreamingHasher for TthStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        let mut remaining = data;

        while !remaining.is_empty() {
            let to_copy = remaining.len().min(LEAF_SIZE - self.leaf_fill);
            TigerDigest::update(&mut self.leaf, &remaining[..to_copy]);
            self.leaf_fill += to_copy;
            remaining = &remaining[to_copy..];

            if self.leaf_fill == LEAF_SIZE {
                self.close_leaf();
            }
        }
    }

    fn finalize(mut self: Box<Self>) -> Vec<u8> {
        // Empty input still hashes one empty leaf
        if self.leaf_fill > 0 || self.leaf_count == 0 {
            self.close_leaf();
        }

        // A lone right subtree is promoted, then merged under its left sibling
        let mut nodes = self.stack.into_iter().rev().map(|(_, node)| node);
        let mut root = nodes.next().unwrap_or_default();
        for left in nodes {
            root = combine(&left, &root);
        }
        root.to_vec()
    }
}

impl HashAlgorithmImpl for TthAlgorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::TTH
    }

    fn create_hasher(&self, _params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(TthStreamingHasher::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::base32_encode;

    fn leaf(data: &[u8]) -> Node {
        let mut hasher = Tiger::new_with_prefix([LEAF_PREFIX]);
        TigerDigest::update(&mut hasher, data);
        to_node(hasher)
    }

    #[test]
    fn test_tth_empty() {
        let digest = TthAlgorithm.hash_bytes(b"");
        assert_eq!(
            hex::encode(&digest),
            "5d9ed00a030e638bdb753a6a24fb900e5a63b8e73e6c25b6"
        );
        assert_eq!(
            base32_encode(&digest),
            "lwpnacqdbzryxw3vhjvcj64qbznghohhhzwclnq"
        );
    }

    #[test]
    fn test_tth_known_values() {
        assert_eq!(
            base32_encode(&TthAlgorithm.hash_bytes(b"a")),
            "czquwh3iyxbf5l3bgyugzhassmxu647ip2ike4y"
        );
        assert_eq!(
            base32_encode(&TthAlgorithm.hash_bytes(b"abc")),
            "asd4ujseh5m47pdyb46kbtsqtsgdklbhyxomuia"
        );
    }

    #[test]
    fn test_tth_exact_leaf_is_single_leaf() {
        let data = vec![b'x'; LEAF_SIZE];
        assert_eq!(TthAlgorithm.hash_bytes(&data), leaf(&data).to_vec());
    }

    #[test]
    fn test_tth_two_leaves() {
        let data = vec![b'A'; LEAF_SIZE + 1];
        let expected = combine(&leaf(&data[..LEAF_SIZE]), &leaf(&data[LEAF_SIZE..]));
        assert_eq!(TthAlgorithm.hash_bytes(&data), expected.to_vec());
    }

    #[test]
    fn test_tth_odd_leaf_is_promoted() {
        let data: Vec<u8> = (0..(LEAF_SIZE * 5 + 17)).map(|i| (i % 251) as u8).collect();
        let leaves: Vec<Node> = data.chunks(LEAF_SIZE).map(leaf).collect();
        assert_eq!(leaves.len(), 6);

        // Level-wise THEX construction
        let mut level = leaves;
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => combine(left, right),
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
        }

        assert_eq!(TthAlgorithm.hash_bytes(&data), level[0].to_vec());
    }

    #[test]
    fn test_tth_streaming_split_across_leaves() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * 31 % 256) as u8).collect();
        let mut hasher = TthAlgorithm.create_hasher(&HasherParams::default());
        for chunk in data.chunks(700) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), TthAlgorithm.hash_bytes(&data));
    }
}
