//! Algorithm identifiers and selection masks
//!
//! Every supported hash function owns exactly one bit of a `u64`. A set of
//! algorithms is the bitwise OR of those bits, which lets one context compute
//! several digests in a single pass over the input.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Hash functions supported by the digest engine
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmId {
    /// CRC32 checksum
    CRC32,
    /// MD4 hash
    MD4,
    /// MD5 hash
    MD5,
    /// SHA-1 hash
    SHA1,
    /// Tiger hash
    TIGER,
    /// Tiger Tree Hash
    TTH,
    /// BitTorrent info hash
    BTIH,
    /// eDonkey 2000 hash
    ED2K,
    /// eMule Advanced Intelligent Corruption Handling hash
    AICH,
    /// Whirlpool hash
    WHIRLPOOL,
    /// RIPEMD-160 hash
    RIPEMD160,
    /// GOST R 34.11-94, test parameter set
    GOST94,
    /// GOST R 34.11-94, CryptoPro parameter set
    GOST94_CRYPTOPRO,
    /// GOST R 34.11-2012, 256 bit
    GOST12_256,
    /// GOST R 34.11-2012, 512 bit
    GOST12_512,
    /// SHA-224 hash
    SHA224,
    /// SHA-256 hash
    SHA256,
    /// SHA-384 hash
    SHA384,
    /// SHA-512 hash
    SHA512,
    /// SHA3-224 hash
    SHA3_224,
    /// SHA3-256 hash
    SHA3_256,
    /// SHA3-384 hash
    SHA3_384,
    /// SHA3-512 hash
    SHA3_512,
    /// CRC32C (Castagnoli) checksum
    CRC32C,
    /// BLAKE2s hash
    BLAKE2S,
    /// BLAKE2b hash
    BLAKE2B,
    /// BLAKE3 hash
    BLAKE3,
}

/// Bits kept for algorithms the engine has no implementation for
const RESERVED_BITS: [(u32, &str); 5] = [
    (13, "HAS-160"),
    (20, "EDON-R256"),
    (21, "EDON-R512"),
    (27, "SNEFRU-128"),
    (28, "SNEFRU-256"),
];

impl AlgorithmId {
    /// All supported algorithms in bit order
    pub const ALL: [AlgorithmId; 27] = [
        AlgorithmId::CRC32,
        AlgorithmId::MD4,
        AlgorithmId::MD5,
        AlgorithmId::SHA1,
        AlgorithmId::TIGER,
        AlgorithmId::TTH,
        AlgorithmId::BTIH,
        AlgorithmId::ED2K,
        AlgorithmId::AICH,
        AlgorithmId::WHIRLPOOL,
        AlgorithmId::RIPEMD160,
        AlgorithmId::GOST94,
        AlgorithmId::GOST94_CRYPTOPRO,
        AlgorithmId::GOST12_256,
        AlgorithmId::GOST12_512,
        AlgorithmId::SHA224,
        AlgorithmId::SHA256,
        AlgorithmId::SHA384,
        AlgorithmId::SHA512,
        AlgorithmId::SHA3_224,
        AlgorithmId::SHA3_256,
        AlgorithmId::SHA3_384,
        AlgorithmId::SHA3_512,
        AlgorithmId::CRC32C,
        AlgorithmId::BLAKE2S,
        AlgorithmId::BLAKE2B,
        AlgorithmId::BLAKE3,
    ];

    /// Bit index of this algorithm inside an [`AlgorithmMask`]
    pub const fn bit_index(self) -> u32 {
        match self {
            AlgorithmId::CRC32 => 0,
            AlgorithmId::MD4 => 1,
            AlgorithmId::MD5 => 2,
            AlgorithmId::SHA1 => 3,
            AlgorithmId::TIGER => 4,
            AlgorithmId::TTH => 5,
            AlgorithmId::BTIH => 6,
            AlgorithmId::ED2K => 7,
            AlgorithmId::AICH => 8,
            AlgorithmId::WHIRLPOOL => 9,
            AlgorithmId::RIPEMD160 => 10,
            AlgorithmId::GOST94 => 11,
            AlgorithmId::GOST94_CRYPTOPRO => 12,
            AlgorithmId::GOST12_256 => 14,
            AlgorithmId::GOST12_512 => 15,
            AlgorithmId::SHA224 => 16,
            AlgorithmId::SHA256 => 17,
            AlgorithmId::SHA384 => 18,
            AlgorithmId::SHA512 => 19,
            AlgorithmId::SHA3_224 => 22,
            AlgorithmId::SHA3_256 => 23,
            AlgorithmId::SHA3_384 => 24,
            AlgorithmId::SHA3_512 => 25,
            AlgorithmId::CRC32C => 26,
            AlgorithmId::BLAKE2S => 29,
            AlgorithmId::BLAKE2B => 30,
            AlgorithmId::BLAKE3 => 31,
        }
    }

    /// Single-bit mask value of this algorithm
    pub const fn bit(self) -> u64 {
        1u64 << self.bit_index()
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            AlgorithmId::CRC32 => "CRC32",
            AlgorithmId::MD4 => "MD4",
            AlgorithmId::MD5 => "MD5",
            AlgorithmId::SHA1 => "SHA1",
            AlgorithmId::TIGER => "TIGER",
            AlgorithmId::TTH => "TTH",
            AlgorithmId::BTIH => "BTIH",
            AlgorithmId::ED2K => "ED2K",
            AlgorithmId::AICH => "AICH",
            AlgorithmId::WHIRLPOOL => "WHIRLPOOL",
            AlgorithmId::RIPEMD160 => "RIPEMD-160",
            AlgorithmId::GOST94 => "GOST94",
            AlgorithmId::GOST94_CRYPTOPRO => "GOST94-CRYPTOPRO",
            AlgorithmId::GOST12_256 => "GOST12-256",
            AlgorithmId::GOST12_512 => "GOST12-512",
            AlgorithmId::SHA224 => "SHA-224",
            AlgorithmId::SHA256 => "SHA-256",
            AlgorithmId::SHA384 => "SHA-384",
            AlgorithmId::SHA512 => "SHA-512",
            AlgorithmId::SHA3_224 => "SHA3-224",
            AlgorithmId::SHA3_256 => "SHA3-256",
            AlgorithmId::SHA3_384 => "SHA3-384",
            AlgorithmId::SHA3_512 => "SHA3-512",
            AlgorithmId::CRC32C => "CRC32C",
            AlgorithmId::BLAKE2S => "BLAKE2S",
            AlgorithmId::BLAKE2B => "BLAKE2B",
            AlgorithmId::BLAKE3 => "BLAKE3",
        }
    }

    /// Name used in `xt=urn:<name>:<digest>` magnet segments
    pub const fn magnet_name(self) -> &'static str {
        match self {
            AlgorithmId::CRC32 => "crc32",
            AlgorithmId::MD4 => "md4",
            AlgorithmId::MD5 => "md5",
            AlgorithmId::SHA1 => "sha1",
            AlgorithmId::TIGER => "tiger",
            AlgorithmId::TTH => "tree:tiger",
            AlgorithmId::BTIH => "btih",
            AlgorithmId::ED2K => "ed2k",
            AlgorithmId::AICH => "aich",
            AlgorithmId::WHIRLPOOL => "whirlpool",
            AlgorithmId::RIPEMD160 => "ripemd160",
            AlgorithmId::GOST94 => "gost94",
            AlgorithmId::GOST94_CRYPTOPRO => "gost94-cryptopro",
            AlgorithmId::GOST12_256 => "gost12-256",
            AlgorithmId::GOST12_512 => "gost12-512",
            AlgorithmId::SHA224 => "sha224",
            AlgorithmId::SHA256 => "sha256",
            AlgorithmId::SHA384 => "sha384",
            AlgorithmId::SHA512 => "sha512",
            AlgorithmId::SHA3_224 => "sha3-224",
            AlgorithmId::SHA3_256 => "sha3-256",
            AlgorithmId::SHA3_384 => "sha3-384",
            AlgorithmId::SHA3_512 => "sha3-512",
            AlgorithmId::CRC32C => "crc32c",
            AlgorithmId::BLAKE2S => "blake2s",
            AlgorithmId::BLAKE2B => "blake2b",
            AlgorithmId::BLAKE3 => "blake3",
        }
    }

    /// Size of the binary digest in bytes
    pub const fn digest_size(self) -> usize {
        match self {
            AlgorithmId::CRC32 | AlgorithmId::CRC32C => 4,
            AlgorithmId::MD4 | AlgorithmId::MD5 | AlgorithmId::ED2K => 16,
            AlgorithmId::SHA1 | AlgorithmId::BTIH | AlgorithmId::AICH | AlgorithmId::RIPEMD160 => {
                20
            }
            AlgorithmId::TIGER | AlgorithmId::TTH => 24,
            AlgorithmId::SHA224 | AlgorithmId::SHA3_224 => 28,
            AlgorithmId::GOST94
            | AlgorithmId::GOST94_CRYPTOPRO
            | AlgorithmId::GOST12_256
            | AlgorithmId::SHA256
            | AlgorithmId::SHA3_256
            | AlgorithmId::BLAKE2S
            | AlgorithmId::BLAKE3 => 32,
            AlgorithmId::SHA384 | AlgorithmId::SHA3_384 => 48,
            AlgorithmId::WHIRLPOOL
            | AlgorithmId::GOST12_512
            | AlgorithmId::SHA512
            | AlgorithmId::SHA3_512
            | AlgorithmId::BLAKE2B => 64,
        }
    }

    /// Whether the canonical text form of this digest is base32 rather than hex
    pub const fn is_base32_default(self) -> bool {
        matches!(self, AlgorithmId::TTH | AlgorithmId::AICH)
    }

    /// Look up the algorithm owning a single bit
    pub fn from_bit(bit: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.bit() == bit)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::str::FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_name(s);
        AlgorithmId::ALL
            .into_iter()
            .find(|id| {
                normalize_name(id.name()) == wanted || normalize_name(id.magnet_name()) == wanted
            })
            .ok_or_else(|| {
                Error::Validation(ValidationError::invalid_parameter(
                    "algorithm",
                    &format!("Unknown hash algorithm: {s}"),
                ))
            })
    }
}

const fn supported_bits() -> u64 {
    let mut bits = 0u64;
    let mut i = 0;
    while i < AlgorithmId::ALL.len() {
        bits |= AlgorithmId::ALL[i].bit();
        i += 1;
    }
    bits
}

/// A non-empty set of algorithms
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmMask(u64);

impl AlgorithmMask {
    /// Every supported algorithm
    pub const ALL: AlgorithmMask = AlgorithmMask(supported_bits());

    /// Lift a single algorithm into a mask
    pub const fn from_single(id: AlgorithmId) -> Self {
        Self(id.bit())
    }

    /// Validate a raw bitmask
    ///
    /// Fails with `InvalidSelection` when no bit is set or when a bit does not
    /// belong to a supported algorithm.
    pub fn from_bits(raw: u64) -> Result<Self> {
        if raw == 0 {
            return Err(ValidationError::invalid_selection(raw, "no algorithm requested").into());
        }

        let unknown = raw & !Self::ALL.0;
        if unknown != 0 {
            let reserved: Vec<&str> = RESERVED_BITS
                .iter()
                .filter(|(bit, _)| unknown & (1u64 << bit) != 0)
                .map(|(_, name)| *name)
                .collect();
            let reason = if reserved.is_empty() {
                format!("unrecognized algorithm bits {unknown:#x}")
            } else {
                format!(
                    "unrecognized algorithm bits {unknown:#x} (no implementation for {})",
                    reserved.join(", ")
                )
            };
            return Err(ValidationError::invalid_selection(raw, &reason).into());
        }

        Ok(Self(raw))
    }

    /// Build a mask from a list of algorithms
    pub fn from_ids(ids: &[AlgorithmId]) -> Result<Self> {
        Self::from_bits(ids.iter().fold(0, |bits, id| bits | id.bit()))
    }

    /// Membership test
    pub const fn contains(self, id: AlgorithmId) -> bool {
        self.0 & id.bit() != 0
    }

    /// Bitwise union of two masks
    pub const fn union(self, other: AlgorithmMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Raw bit value
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Number of selected algorithms
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when no bit is set
    ///
    /// The public constructors reject empty selections, so this only holds for
    /// masks built inside the crate.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Selected algorithms in bit order
    pub fn iter(self) -> impl Iterator<Item = AlgorithmId> {
        AlgorithmId::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

impl From<AlgorithmId> for AlgorithmMask {
    fn from(id: AlgorithmId) -> Self {
        Self::from_single(id)
    }
}

impl BitOr for AlgorithmId {
    type Output = AlgorithmMask;

    fn bitor(self, rhs: AlgorithmId) -> AlgorithmMask {
        AlgorithmMask(self.bit() | rhs.bit())
    }
}

impl BitOr<AlgorithmId> for AlgorithmMask {
    type Output = AlgorithmMask;

    fn bitor(self, rhs: AlgorithmId) -> AlgorithmMask {
        AlgorithmMask(self.0 | rhs.bit())
    }
}

impl BitOr for AlgorithmMask {
    type Output = AlgorithmMask;

    fn bitor(self, rhs: AlgorithmMask) -> AlgorithmMask {
        self.union(rhs)
    }
}

impl fmt::Display for AlgorithmMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(AlgorithmId::name).collect();
        f.write_str(&names.join(", "))
    }
}

impl fmt::Debug for AlgorithmMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlgorithmMask({:#x}: {self})", self.0)
    }
}
