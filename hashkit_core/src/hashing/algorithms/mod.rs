//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;
use crate::algorithm::AlgorithmId;
use generic::DigestAlgorithm;

mod aich;
mod blake3;
pub mod btih;
mod crc32;
pub mod ed2k;
mod generic;
mod tth;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(crc32::Crc32Algorithm);
    registry.register(crc32::Crc32cAlgorithm);
    registry.register(DigestAlgorithm::<md4::Md4>::new(AlgorithmId::MD4));
    registry.register(DigestAlgorithm::<md5::Md5>::new(AlgorithmId::MD5));
    registry.register(DigestAlgorithm::<sha1::Sha1>::new(AlgorithmId::SHA1));
    registry.register(DigestAlgorithm::<tiger::Tiger>::new(AlgorithmId::TIGER));
    registry.register(tth::TthAlgorithm);
    registry.register(btih::BtihAlgorithm);
    registry.register(ed2k::Ed2kAlgorithm);
    registry.register(aich::AichAlgorithm);
    registry.register(DigestAlgorithm::<whirlpool::Whirlpool>::new(AlgorithmId::WHIRLPOOL));
    registry.register(DigestAlgorithm::<ripemd::Ripemd160>::new(AlgorithmId::RIPEMD160));
    registry.register(DigestAlgorithm::<gost94::Gost94Test>::new(AlgorithmId::GOST94));
    registry.register(DigestAlgorithm::<gost94::Gost94CryptoPro>::new(
        AlgorithmId::GOST94_CRYPTOPRO,
    ));
    registry.register(DigestAlgorithm::<streebog::Streebog256>::new(AlgorithmId::GOST12_256));
    registry.register(DigestAlgorithm::<streebog::Streebog512>::new(AlgorithmId::GOST12_512));
    registry.register(DigestAlgorithm::<sha2::Sha224>::new(AlgorithmId::SHA224));
    registry.register(DigestAlgorithm::<sha2::Sha256>::new(AlgorithmId::SHA256));
    registry.register(DigestAlgorithm::<sha2::Sha384>::new(AlgorithmId::SHA384));
    registry.register(DigestAlgorithm::<sha2::Sha512>::new(AlgorithmId::SHA512));
    registry.register(DigestAlgorithm::<sha3::Sha3_224>::new(AlgorithmId::SHA3_224));
    registry.register(DigestAlgorithm::<sha3::Sha3_256>::new(AlgorithmId::SHA3_256));
    registry.register(DigestAlgorithm::<sha3::Sha3_384>::new(AlgorithmId::SHA3_384));
    registry.register(DigestAlgorithm::<sha3::Sha3_512>::new(AlgorithmId::SHA3_512));
    registry.register(DigestAlgorithm::<blake2::Blake2s256>::new(AlgorithmId::BLAKE2S));
    registry.register(DigestAlgorithm::<blake2::Blake2b512>::new(AlgorithmId::BLAKE2B));
    registry.register(blake3::Blake3Algorithm);
}
