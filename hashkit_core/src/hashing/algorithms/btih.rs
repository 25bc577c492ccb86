//! BitTorrent info hash (BTIH)
//!
//! Input is split into SHA-1 pieces; the digest is the SHA-1 of the bencoded
//! info dictionary of a single-file torrent.

use crate::algorithm::AlgorithmId;
use crate::hashing::traits::{HashAlgorithmImpl, HasherParams, StreamingHasher, TorrentParams};
use sha1::{Digest, Sha1};

pub struct BtihAlgorithm;

/// Piece length used when nothing else is known about the input
pub const DEFAULT_PIECE_LENGTH: u64 = 65_536;

/// Default piece length for a torrent of `total_size` bytes
///
/// 64 KiB below 64 MiB, 4 MiB from 2 GiB on, otherwise the smallest power of
/// two above the size (at least 128 MiB) divided by 1024.
pub fn default_piece_length(total_size: u64) -> u64 {
    const SMALL: u64 = 64 << 20;
    const LARGE: u64 = 2 << 30;

    if total_size < SMALL {
        return DEFAULT_PIECE_LENGTH;
    }
    if total_size >= LARGE {
        return 4 << 20;
    }

    let mut hi_bit = SMALL << 1;
    while hi_bit <= total_size {
        hi_bit <<= 1;
    }
    hi_bit >> 10
}

/// Piece length a hasher built from `params` will use
pub fn effective_piece_length(params: &TorrentParams) -> u64 {
    match (params.piece_length, &params.file) {
        (Some(length), _) => length,
        (None, Some(file)) => default_piece_length(file.size),
        (None, None) => DEFAULT_PIECE_LENGTH,
    }
}

struct BtihStreamingHasher {
    params: TorrentParams,
    piece_length: u64,
    piece: Sha1,
    piece_fill: u64,
    pieces: Vec<u8>,
}

impl BtihStreamingHasher {
    fn new(params: &TorrentParams) -> Self {
        Self {
            params: params.clone(),
            piece_length: effective_piece_length(params).max(1),
            piece: Sha1::new(),
            piece_fill: 0,
            pieces: Vec::new(),
        }
    }

    fn close_piece(&mut self) {
        let hash = self.piece.finalize_reset();
        self.pieces.extend_from_slice(&hash);
        self.piece_fill = 0;
    }

    fn info_dictionary(&self) -> Vec<u8> {
        let mut info = Vec::with_capacity(self.pieces.len() + 128);
        info.push(b'd');

        if let Some(file) = &self.params.file {
            info.extend_from_slice(b"6:length");
            bencode_int(&mut info, file.size);
            info.extend_from_slice(b"4:name");
            bencode_bytes(&mut info, file.name.as_bytes());
        }

        info.extend_from_slice(b"12:piece length");
        bencode_int(&mut info, self.piece_length);
        info.extend_from_slice(b"6:pieces");
        bencode_bytes(&mut info, &self.pieces);

        if self.params.private {
            info.extend_from_slice(b"7:privatei1e");
        }

        info.push(b'e');
        info
    }
}

fn bencode_int(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(format!("i{value}e").as_bytes());
}

fn bencode_bytes(out: &mut Vec<u8>, value: &[u8]) {
    out.extend_from_slice(format!("{}:", value.len()).as_bytes());
    out.extend_from_slice(value);
}

impl StreamingHasher for BtihStreamingHasher {
    fn update(&mut self, data: &[u8]) {
        let mut remaining = data;

        while !remaining.is_empty() {
            let room = self.piece_length - self.piece_fill;
            let to_copy = (remaining.len() as u64).min(room) as usize;
            self.piece.update(&remaining[..to_copy]);
            self.piece_fill += to_copy as u64;
            remaining = &remaining[to_copy..];

            if self.piece_fill == self.piece_length {
                self.close_piece();
            }
        }
    }

    fn finalize(mut self: Box<Self>) -> Vec<u8> {
        if self.piece_fill > 0 {
            self.close_piece();
        }
        Sha1::digest(self.info_dictionary()).to_vec()
    }
}

impl HashAlgorithmImpl for BtihAlgorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BTIH
    }

    fn create_hasher(&self, params: &HasherParams) -> Box<dyn StreamingHasher> {
        Box::new(BtihStreamingHasher::new(&params.torrent))
    }
}
