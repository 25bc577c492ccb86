//! Magnet URI construction
//!
//! `magnet:?xl=<size>&dn=<name>&xt=urn:<urn>:<digest>&...`. Absent fields are
//! omitted. `xt` segments list ED2K and AICH first, then the remaining
//! algorithms in bit order. SHA-1 is written in base32, every other digest in
//! its default encoding.

use crate::algorithm::{AlgorithmId, AlgorithmMask};
use crate::engine::DigestEngine;
use crate::error::InternalError;
use crate::format::{self, OutputFormat};
use crate::Result;

const PREFIX: &str = "magnet:?";
const XT_PREFIX: &str = "xt=urn:";

/// What to include in a magnet URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnetOptions<'a> {
    /// `dn` field; omitted when `None` or empty
    pub display_name: Option<&'a str>,
    /// Algorithms to list; `None` lists the whole context selection
    pub mask: Option<AlgorithmMask>,
    /// Emit `xl=<bytes hashed>`
    pub include_size: bool,
    /// Uppercase digests
    pub uppercase: bool,
}

impl<'a> MagnetOptions<'a> {
    pub fn new(display_name: Option<&'a str>, mask: AlgorithmMask, include_size: bool) -> Self {
        Self {
            display_name,
            mask: Some(mask),
            include_size,
            uppercase: false,
        }
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    fn display_name(&self) -> Option<&'a str> {
        self.display_name.filter(|name| !name.is_empty())
    }
}

/// Algorithms of `mask` in magnet order
pub fn magnet_order(mask: AlgorithmMask) -> impl Iterator<Item = AlgorithmId> {
    const LEADING: [AlgorithmId; 2] = [AlgorithmId::ED2K, AlgorithmId::AICH];

    let leading = LEADING.into_iter().filter(move |id| mask.contains(*id));
    let rest = mask.iter().filter(|id| !LEADING.contains(id));
    leading.chain(rest)
}

fn xt_format(id: AlgorithmId, uppercase: bool) -> OutputFormat {
    let format = if id == AlgorithmId::SHA1 {
        OutputFormat::BASE32
    } else {
        OutputFormat::DEFAULT
    };
    OutputFormat { uppercase, ..format }
}

/// Percent-encode a display name; escape digits follow the digest case
fn encode_name(name: &str, uppercase: bool) -> String {
    let encoded = urlencoding::encode(name);
    if uppercase {
        return encoded.into_owned();
    }

    let mut out = String::with_capacity(encoded.len());
    let mut escape_digits = 0;
    for c in encoded.chars() {
        if escape_digits > 0 {
            out.push(c.to_ascii_lowercase());
            escape_digits -= 1;
        } else {
            if c == '%' {
                escape_digits = 2;
            }
            out.push(c);
        }
    }
    out
}

fn listed_ids(engine: &DigestEngine, options: &MagnetOptions<'_>) -> Vec<AlgorithmId> {
    let selection = engine.selection();
    let requested = options.mask.unwrap_or(selection);
    magnet_order(selection)
        .filter(|id| requested.contains(*id))
        .collect()
}

/// Exact length of the URI [`build`] produces, computed without rendering
pub(crate) fn required_len(engine: &DigestEngine, options: &MagnetOptions<'_>) -> usize {
    let mut fields = Vec::new();

    if options.include_size {
        fields.push("xl=".len() + engine.msg_size().to_string().len());
    }
    if let Some(name) = options.display_name() {
        fields.push("dn=".len() + encode_name(name, options.uppercase).len());
    }
    for id in listed_ids(engine, options) {
        let digest_len = format::rendered_len(id, xt_format(id, options.uppercase));
        fields.push(XT_PREFIX.len() + id.magnet_name().len() + 1 + digest_len);
    }

    let separators = fields.len().saturating_sub(1);
    PREFIX.len() + fields.iter().sum::<usize>() + separators
}

/// Render the URI from a finalized engine
pub(crate) fn build(engine: &DigestEngine, options: &MagnetOptions<'_>) -> Result<String> {
    let mut fields = Vec::new();

    if options.include_size {
        fields.push(format!("xl={}", engine.msg_size()));
    }
    if let Some(name) = options.display_name() {
        fields.push(format!("dn={}", encode_name(name, options.uppercase)));
    }
    for id in listed_ids(engine, options) {
        let digest = engine.digest(id).ok_or_else(|| {
            InternalError::assertion(format!("{id} digest missing from a finalized engine"))
        })?;
        let rendered = format::render(id, digest, xt_format(id, options.uppercase));
        fields.push(format!("{XT_PREFIX}{}:{rendered}", id.magnet_name()));
    }

    Ok(format!("{PREFIX}{}", fields.join("&")))
}
