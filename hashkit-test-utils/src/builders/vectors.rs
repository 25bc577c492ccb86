//! Published reference digests

use hashkit_core::AlgorithmId;

/// Expected canonical digest of a fixed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVector {
    pub algorithm: AlgorithmId,
    pub input: &'static [u8],
    /// Digest in the algorithm's default encoding
    pub expected: &'static str,
}

impl KnownVector {
    const fn abc(algorithm: AlgorithmId, expected: &'static str) -> Self {
        Self {
            algorithm,
            input: b"abc",
            expected,
        }
    }

    const fn a(algorithm: AlgorithmId, expected: &'static str) -> Self {
        Self {
            algorithm,
            input: b"a",
            expected,
        }
    }

    const fn empty(algorithm: AlgorithmId, expected: &'static str) -> Self {
        Self {
            algorithm,
            input: b"",
            expected,
        }
    }
}

/// Reference digests of `"a"` for every algorithm hashed in one context
///
/// BLAKE3 is not listed.
pub fn a_vectors() -> Vec<KnownVector> {
    use AlgorithmId::*;

    vec![
        KnownVector::a(CRC32, "e8b7be43"),
        KnownVector::a(MD4, "bde52cb31de33e46245e05fbdbd6fb24"),
        KnownVector::a(MD5, "0cc175b9c0f1b6a831c399e269772661"),
        KnownVector::a(SHA1, "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8"),
        KnownVector::a(TIGER, "77befbef2e7ef8ab2ec8f93bf587a7fc613e247f5f247809"),
        KnownVector::a(TTH, "czquwh3iyxbf5l3bgyugzhassmxu647ip2ike4y"),
        KnownVector::a(BTIH, "fd408e9d024b58a57aa1313eff14005ff8b2c5d1"),
        KnownVector::a(ED2K, "bde52cb31de33e46245e05fbdbd6fb24"),
        KnownVector::a(AICH, "q336in72uwt7zyk5dxolt2xk5i3xmz5y"),
        KnownVector::a(
            WHIRLPOOL,
            "8aca2602792aec6f11a67206531fb7d7f0dff59413145e6973c45001d0087b42\
             d11bc645413aeff63a42391a39145a591a92200d560195e53b478584fdae231a",
        ),
        KnownVector::a(RIPEMD160, "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"),
        KnownVector::a(
            GOST94,
            "d42c539e367c66e9c88a801f6649349c21871b4344c6a573f849fdce62f314dd",
        ),
        KnownVector::a(
            GOST94_CRYPTOPRO,
            "e74c52dd282183bf37af0079c9f78055715a103f17e3133ceff1aacf2f403011",
        ),
        KnownVector::a(SHA224, "abd37534c7d9a2efb9465de931cd7055ffdb8879563ae98078d6d6d5"),
        KnownVector::a(
            SHA256,
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb",
        ),
        KnownVector::a(
            SHA384,
            "54a59b9f22b0b80880d8427e548b7c23abd873486e1f035dce9cd697e8517503\
             3caa88e6d57bc35efae0b5afd3145f31",
        ),
        KnownVector::a(
            SHA512,
            "1f40fc92da241694750979ee6cf582f2d5d7d28e18335de05abc54d0560e0f53\
             02860c652bf08d560252aa5e74210546f369fbbbce8c12cfc7957b2652fe9a75",
        ),
        KnownVector::a(SHA3_224, "9e86ff69557ca95f405f081269685b38e3a819b309ee942f482b6a8b"),
        KnownVector::a(
            SHA3_256,
            "80084bf2fba02475726feb2cab2d8215eab14bc6bdd8bfb2c8151257032ecd8b",
        ),
        KnownVector::a(
            SHA3_384,
            "1815f774f320491b48569efec794d249eeb59aae46d22bf77dafe25c5edc28d7\
             ea44f93ee1234aa88f61c91912a4ccd9",
        ),
        KnownVector::a(
            SHA3_512,
            "697f2d856172cb8309d6b8b97dac4de344b549d4dee61edfb4962d8698b7fa80\
             3f4f93ff24393586e28b5b957ac3d1d369420ce53332712f997bd336d09ab02a",
        ),
        KnownVector::a(CRC32C, "c1d04330"),
        KnownVector::a(
            BLAKE2S,
            "4a0d129873403037c2cd9b9048203687f6233fb6738956e0349bd4320fec3e90",
        ),
        KnownVector::a(
            BLAKE2B,
            "333fcb4ee1aa7c115355ec66ceac917c8bfd815bf7587d325aec1864edd24e34\
             d5abe2c6b1b5ee3face62fed78dbef802f2a85cb91d455a8f5249d330853cb3c",
        ),
    ]
}

/// Reference digests of the empty message for GOST R 34.11-2012
pub fn streebog_empty_vectors() -> Vec<KnownVector> {
    vec![
        KnownVector::empty(
            AlgorithmId::GOST12_256,
            "3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb",
        ),
        KnownVector::empty(
            AlgorithmId::GOST12_512,
            "8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7\
             362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a",
        ),
    ]
}

/// Reference digests of `"abc"`
pub fn abc_vectors() -> Vec<KnownVector> {
    use AlgorithmId::*;

    vec![
        KnownVector::abc(CRC32, "352441c2"),
        KnownVector::abc(CRC32C, "364b3fb7"),
        KnownVector::abc(MD4, "a448017aaf21d8525fc10ae87aa6729d"),
        KnownVector::abc(MD5, "900150983cd24fb0d6963f7d28e17f72"),
        KnownVector::abc(ED2K, "a448017aaf21d8525fc10ae87aa6729d"),
        KnownVector::abc(SHA1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        KnownVector::abc(AICH, "vgmt4nsha2awvor6evyxqugcnsonbwe5"),
        KnownVector::abc(TIGER, "2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93"),
        KnownVector::abc(TTH, "asd4ujseh5m47pdyb46kbtsqtsgdklbhyxomuia"),
        KnownVector::abc(BTIH, "83ffaaffa483b91fbc284d1930f2dee886515afb"),
        KnownVector::abc(RIPEMD160, "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
        KnownVector::abc(
            WHIRLPOOL,
            "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c\
             7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5",
        ),
        KnownVector::abc(SHA224, "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
        KnownVector::abc(
            SHA256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        KnownVector::abc(
            SHA384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7",
        ),
        KnownVector::abc(
            SHA512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        KnownVector::abc(SHA3_224, "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
        KnownVector::abc(
            SHA3_256,
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        ),
        KnownVector::abc(
            SHA3_384,
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
             98d88cea927ac7f539f1edf228376d25",
        ),
        KnownVector::abc(
            SHA3_512,
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        ),
        KnownVector::abc(
            BLAKE2S,
            "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982",
        ),
        KnownVector::abc(
            BLAKE2B,
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
        ),
        KnownVector::abc(
            BLAKE3,
            "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85",
        ),
    ]
}
