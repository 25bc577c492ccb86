//! Digest output encodings
//!
//! A finalized digest is rendered according to an [`OutputFormat`]: one of the
//! [`Encoding`]s plus the uppercase and byte-order modifiers.

use crate::algorithm::AlgorithmId;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding applied to a binary digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// Canonical form of the algorithm: base32 for TTH and AICH, hex otherwise
    #[default]
    Default,
    /// Unencoded digest bytes
    Raw,
    /// Lowercase hexadecimal
    Hex,
    /// RFC 4648 base32 without padding, lowercase
    Base32,
    /// RFC 4648 base64 with padding
    Base64,
}

impl Encoding {
    /// Replace `Default` with the canonical encoding of `id`
    pub fn resolve(self, id: AlgorithmId) -> Encoding {
        match self {
            Encoding::Default if id.is_base32_default() => Encoding::Base32,
            Encoding::Default => Encoding::Hex,
            other => other,
        }
    }
}

/// Encoding plus modifier flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OutputFormat {
    pub encoding: Encoding,
    /// Uppercase letters for hex and base32 output
    pub uppercase: bool,
    /// Reverse the digest bytes before hex encoding
    pub reverse: bool,
}

impl OutputFormat {
    pub const DEFAULT: OutputFormat = OutputFormat::new(Encoding::Default);
    pub const RAW: OutputFormat = OutputFormat::new(Encoding::Raw);
    pub const HEX: OutputFormat = OutputFormat::new(Encoding::Hex);
    pub const BASE32: OutputFormat = OutputFormat::new(Encoding::Base32);
    pub const BASE64: OutputFormat = OutputFormat::new(Encoding::Base64);

    pub const fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            uppercase: false,
            reverse: false,
        }
    }

    /// Same format with uppercase letters
    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Same format with reversed byte order (hex only)
    pub const fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}

impl From<Encoding> for OutputFormat {
    fn from(encoding: Encoding) -> Self {
        Self::new(encoding)
    }
}

/// A rendered digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Text(String),
    Raw(Vec<u8>),
}

impl Formatted {
    /// Text form, `None` for raw output
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(text) => Some(text),
            Formatted::Raw(_) => None,
        }
    }

    /// Bytes of the rendered value
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Formatted::Text(text) => text.as_bytes(),
            Formatted::Raw(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Formatted::Text(text) => text.into_bytes(),
            Formatted::Raw(bytes) => bytes,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatted::Text(text) => f.write_str(text),
            Formatted::Raw(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

/// Render the digest of `id` in `format`
pub fn render(id: AlgorithmId, digest: &[u8], format: OutputFormat) -> Formatted {
    match format.encoding.resolve(id) {
        Encoding::Raw => Formatted::Raw(digest.to_vec()),
        // `resolve` never yields Default
        Encoding::Hex | Encoding::Default => {
            let text = if format.reverse {
                let reversed: Vec<u8> = digest.iter().rev().copied().collect();
                hex::encode(reversed)
            } else {
                hex::encode(digest)
            };
            Formatted::Text(apply_case(text, format.uppercase))
        }
        Encoding::Base32 => Formatted::Text(apply_case(base32_encode(digest), format.uppercase)),
        Encoding::Base64 => Formatted::Text(BASE64.encode(digest)),
    }
}

/// Number of bytes `render` produces for `id` in `format`
pub fn rendered_len(id: AlgorithmId, format: OutputFormat) -> usize {
    let size = id.digest_size();
    match format.encoding.resolve(id) {
        Encoding::Raw => size,
        Encoding::Hex | Encoding::Default => size * 2,
        Encoding::Base32 => (size * 8).div_ceil(5),
        Encoding::Base64 => size.div_ceil(3) * 4,
    }
}

fn apply_case(text: String, uppercase: bool) -> String {
    if uppercase {
        text.to_ascii_uppercase()
    } else {
        text
    }
}

/// Lowercase RFC 4648 base32 without padding
pub fn base32_encode(data: &[u8]) -> String {
    const BASE32_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";
    let mut result = String::with_capacity((data.len() * 8).div_ceil(5));

    for chunk in data.chunks(5) {
        let mut bits = 0u64;
        for (i, &byte) in chunk.iter().enumerate() {
            bits |= (byte as u64) << (32 - (i * 8));
        }

        for i in 0..8 {
            if i * 5 < chunk.len() * 8 {
                let index = ((bits >> (35 - i * 5)) & 0x1F) as usize;
                result.push(BASE32_ALPHABET[index] as char);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";

    fn md5_empty() -> Vec<u8> {
        hex::decode(MD5_EMPTY).unwrap()
    }

    #[test]
    fn test_base32_rfc4648_vectors() {
        assert_eq!(base32_encode(b""), "");
        assert_eq!(base32_encode(b"f"), "my");
        assert_eq!(base32_encode(b"fo"), "mzxq");
        assert_eq!(base32_encode(b"foo"), "mzxw6");
        assert_eq!(base32_encode(b"foob"), "mzxw6yq");
        assert_eq!(base32_encode(b"fooba"), "mzxw6ytb");
        assert_eq!(base32_encode(b"foobar"), "mzxw6ytboi");
    }

    #[test]
    fn test_render_encodings() {
        let digest = md5_empty();
        let id = AlgorithmId::MD5;

        assert_eq!(render(id, &digest, OutputFormat::HEX).as_text(), Some(MD5_EMPTY));
        assert_eq!(
            render(id, &digest, OutputFormat::BASE32).as_text(),
            Some("2qoyzwmpaczaj2mabgmoz6ccpy")
        );
        assert_eq!(
            render(id, &digest, OutputFormat::BASE64).as_text(),
            Some("1B2M2Y8AsgTpgAmY7PhCfg==")
        );
        assert_eq!(
            render(id, &digest, OutputFormat::RAW),
            Formatted::Raw(digest.clone())
        );
    }

    #[test]
    fn test_default_encoding_per_algorithm() {
        assert_eq!(Encoding::Default.resolve(AlgorithmId::MD5), Encoding::Hex);
        assert_eq!(Encoding::Default.resolve(AlgorithmId::TTH), Encoding::Base32);
        assert_eq!(Encoding::Default.resolve(AlgorithmId::AICH), Encoding::Base32);
        assert_eq!(Encoding::Base64.resolve(AlgorithmId::TTH), Encoding::Base64);
    }

    #[test]
    fn test_uppercase_modifier() {
        let digest = hex::decode("ebe6c6e6").unwrap();
        let upper = render(AlgorithmId::CRC32, &digest, OutputFormat::HEX.uppercase());
        assert_eq!(upper.as_text(), Some("EBE6C6E6"));

        let upper32 = render(AlgorithmId::MD5, &md5_empty(), OutputFormat::BASE32.uppercase());
        assert_eq!(upper32.as_text(), Some("2QOYZWMPACZAJ2MABGMOZ6CCPY"));

        // base64 is case sensitive and ignores the modifier
        let b64 = render(AlgorithmId::MD5, &md5_empty(), OutputFormat::BASE64.uppercase());
        assert_eq!(b64.as_text(), Some("1B2M2Y8AsgTpgAmY7PhCfg=="));
    }

    #[test]
    fn test_reverse_applies_to_hex_only() {
        let digest = hex::decode("261dafe6").unwrap();
        let reversed = render(AlgorithmId::CRC32, &digest, OutputFormat::HEX.reversed());
        assert_eq!(reversed.as_text(), Some("e6af1d26"));

        let by_default = render(AlgorithmId::CRC32, &digest, OutputFormat::DEFAULT.reversed());
        assert_eq!(by_default.as_text(), Some("e6af1d26"));

        let base32 = render(AlgorithmId::CRC32, &digest, OutputFormat::BASE32.reversed());
        assert_eq!(base32.as_text(), Some(base32_encode(&digest).as_str()));
    }

    #[test]
    fn test_rendered_len_matches_render() {
        for id in AlgorithmId::ALL {
            let digest = vec![0xa5u8; id.digest_size()];
            for encoding in [
                Encoding::Default,
                Encoding::Raw,
                Encoding::Hex,
                Encoding::Base32,
                Encoding::Base64,
            ] {
                let format = OutputFormat::new(encoding);
                assert_eq!(
                    render(id, &digest, format).len(),
                    rendered_len(id, format),
                    "{id} {encoding:?}"
                );
            }
        }
    }

    #[test]
    fn test_formatted_display() {
        assert_eq!(Formatted::Text("abc".into()).to_string(), "abc");
        assert_eq!(Formatted::Raw(vec![0xde, 0xad]).to_string(), "dead");
    }
}
