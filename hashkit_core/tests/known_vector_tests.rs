//! Reference digests through the public context API

use hashkit_core::{AlgorithmId, AlgorithmMask, HashContext, OutputFormat, digest_of_bytes};
use hashkit_test_utils::{a_vectors, abc_vectors, streebog_empty_vectors};

#[test]
fn test_each_algorithm_alone() {
    for vector in abc_vectors() {
        let digest = digest_of_bytes(vector.input, vector.algorithm).unwrap();
        assert_eq!(digest, vector.expected, "{} of abc", vector.algorithm);
    }
}

#[test]
fn test_all_vectors_in_one_pass() {
    let vectors = abc_vectors();
    let ids: Vec<AlgorithmId> = vectors.iter().map(|v| v.algorithm).collect();
    let mask = AlgorithmMask::from_ids(&ids).unwrap();

    let mut context = HashContext::new(mask).unwrap();
    context.update(b"abc").unwrap();
    context.finish().unwrap();

    for vector in &vectors {
        assert_eq!(
            context.hash(vector.algorithm).unwrap(),
            vector.expected,
            "{} in a combined context",
            vector.algorithm
        );
    }
}

#[test]
fn test_all_algorithms_over_letter_a() {
    let mut context = HashContext::new(AlgorithmMask::ALL).unwrap();
    context.update(b"a").unwrap();
    context.finish().unwrap();

    for vector in a_vectors() {
        assert_eq!(
            context.hash(vector.algorithm).unwrap(),
            vector.expected,
            "{} of a",
            vector.algorithm
        );
    }

    // A reset round with no input yields the empty-message digest
    context.reset().unwrap();
    context.finish().unwrap();
    assert_eq!(
        context.to_hex(AlgorithmId::MD5).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn test_gost_vectors_alone() {
    let gost = a_vectors()
        .into_iter()
        .filter(|v| matches!(v.algorithm, AlgorithmId::GOST94 | AlgorithmId::GOST94_CRYPTOPRO));

    for vector in gost.chain(streebog_empty_vectors()) {
        let digest = digest_of_bytes(vector.input, vector.algorithm).unwrap();
        assert_eq!(digest, vector.expected, "{}", vector.algorithm);
    }
}

#[test]
fn test_every_algorithm_over_the_empty_message() {
    let mut context = HashContext::new(AlgorithmMask::ALL).unwrap();
    context.finish().unwrap();

    for id in AlgorithmId::ALL {
        let raw = context.to_raw(id).unwrap();
        assert_eq!(raw.len(), id.digest_size(), "{id} digest size");
    }
    assert_eq!(
        context.to_hex(AlgorithmId::MD5).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(context.to_hex(AlgorithmId::CRC32).unwrap(), "00000000");
    assert_eq!(
        context.to_hex(AlgorithmId::ED2K).unwrap(),
        "31d6cfe0d16ae931b73c59d7e0c089c0"
    );
    assert_eq!(
        context.hash(AlgorithmId::TTH).unwrap(),
        "lwpnacqdbzryxw3vhjvcj64qbznghohhhzwclnq"
    );
    assert_eq!(
        context.hash(AlgorithmId::BLAKE3).unwrap(),
        "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
    );
    for vector in streebog_empty_vectors() {
        assert_eq!(context.to_hex(vector.algorithm).unwrap(), vector.expected);
    }
}

#[test]
fn test_crc32_md5_end_to_end() {
    let mask = AlgorithmId::CRC32 | AlgorithmId::MD5;
    let mut context = HashContext::new(mask).unwrap();
    context.update(b"12345\n").unwrap();
    context.finish().unwrap();

    assert_eq!(
        context
            .digest(AlgorithmId::CRC32, OutputFormat::HEX)
            .unwrap()
            .to_string(),
        "261dafe6"
    );
    assert_eq!(
        context
            .digest(AlgorithmId::MD5, OutputFormat::HEX)
            .unwrap()
            .to_string(),
        "d577273ff885c3f84dadb8578bb41399"
    );
    assert_eq!(
        context.magnet(Some("12345.txt"), mask, true).unwrap(),
        "magnet:?xl=6&dn=12345.txt&xt=urn:crc32:261dafe6&xt=urn:md5:d577273ff885c3f84dadb8578bb41399"
    );
}

#[test]
fn test_tth_single_byte() {
    assert_eq!(
        digest_of_bytes(b"a", AlgorithmId::TTH).unwrap(),
        "czquwh3iyxbf5l3bgyugzhassmxu647ip2ike4y"
    );
}

#[test]
fn test_reverse_and_uppercase_hex() {
    let mut context = HashContext::new(AlgorithmId::CRC32).unwrap();
    context.update(b"12345\n").unwrap();
    context.finish().unwrap();

    let reversed = context
        .digest(AlgorithmId::CRC32, OutputFormat::HEX.reversed())
        .unwrap();
    assert_eq!(reversed.as_text(), Some("e6af1d26"));

    let upper = context
        .digest(AlgorithmId::CRC32, OutputFormat::HEX.uppercase().reversed())
        .unwrap();
    assert_eq!(upper.as_text(), Some("E6AF1D26"));

    let raw = context.digest(AlgorithmId::CRC32, OutputFormat::RAW).unwrap();
    assert_eq!(raw.as_bytes(), &[0x26, 0x1d, 0xaf, 0xe6]);
}
