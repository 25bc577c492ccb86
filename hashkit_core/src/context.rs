//! Multi-algorithm incremental hash context
//!
//! A [`HashContext`] computes every algorithm of its selection in one pass
//! over the input. Bytes are fed with [`HashContext::update`] or read from a
//! source, [`HashContext::finish`] finalizes all algorithms at once, and the
//! digests can then be rendered any number of times until the next
//! [`HashContext::reset`].
//!
//! ```text
//! new ──► Accumulating ──finish──► Finalized ──reset──► Accumulating
//!              │                       │
//!              └────────close──────────┴──► Disposed
//! ```

use crate::algorithm::{AlgorithmId, AlgorithmMask};
use crate::config::HashConfig;
use crate::engine::DigestEngine;
use crate::error::{ContextError, InternalError, IoError, ValidationError};
use crate::format::{self, Encoding, Formatted, OutputFormat};
use crate::hashing::{HasherParams, TorrentFile, effective_piece_length};
use crate::magnet::{self, MagnetOptions};
use crate::progress::{NullProvider, ProgressProvider, ProgressUpdate};
use crate::source::{FileSource, StreamSource};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Read};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;
use log::{debug, trace, warn};

/// Lifecycle state of a [`HashContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextState {
    /// Accepting bytes
    Accumulating,
    /// Digests available, no more bytes until `reset`
    Finalized,
    /// Engine released by `close`
    Disposed,
}

/// Read-only view of one finalized digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestView<'a> {
    algorithm: AlgorithmId,
    digest: &'a [u8],
}

impl<'a> DigestView<'a> {
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.digest
    }

    pub fn format(&self, format: OutputFormat) -> Formatted {
        format::render(self.algorithm, self.digest, format)
    }

    fn text(&self, format: OutputFormat) -> String {
        match self.format(format) {
            Formatted::Text(text) => text,
            Formatted::Raw(bytes) => hex::encode(bytes),
        }
    }

    /// Canonical text form (base32 for TTH and AICH, hex otherwise)
    pub fn to_default(&self) -> String {
        self.text(OutputFormat::DEFAULT)
    }

    pub fn to_hex(&self) -> String {
        self.text(OutputFormat::HEX)
    }

    pub fn to_base32(&self) -> String {
        self.text(OutputFormat::BASE32)
    }

    pub fn to_base64(&self) -> String {
        self.text(OutputFormat::BASE64)
    }
}

/// Serializable summary of one computed digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: AlgorithmId,
    /// Digest in the canonical encoding of the algorithm
    pub digest: String,
    pub encoding: Encoding,
    /// Number of bytes hashed
    pub input_size: u64,
}

/// One hashing session over a fixed algorithm selection
pub struct HashContext {
    selection: AlgorithmMask,
    state: ContextState,
    engine: Option<DigestEngine>,
    config: HashConfig,
}

impl HashContext {
    /// Create a context computing every algorithm in `selection`
    pub fn new(selection: impl Into<AlgorithmMask>) -> Result<Self> {
        Self::with_config(selection, &HashConfig::default())
    }

    /// Create a context from a raw bitmask
    ///
    /// Fails with `InvalidSelection` when the mask is zero or names an
    /// unsupported algorithm.
    pub fn from_mask(raw: u64) -> Result<Self> {
        Self::new(AlgorithmMask::from_bits(raw)?)
    }

    /// Create a context with explicit settings
    pub fn with_config(selection: impl Into<AlgorithmMask>, config: &HashConfig) -> Result<Self> {
        let selection = selection.into();
        config.validate()?;

        let engine = DigestEngine::open(selection, config.hasher_params())?;
        debug!("Opened hash context for [{selection}]");

        Ok(Self {
            selection,
            state: ContextState::Accumulating,
            engine: Some(engine),
            config: config.clone(),
        })
    }

    pub fn selection(&self) -> AlgorithmMask {
        self.selection
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Bytes fed since construction or the last reset
    pub fn bytes_processed(&self) -> u64 {
        self.engine.as_ref().map_or(0, DigestEngine::msg_size)
    }

    /// File entry bound to the BitTorrent info dictionary, if any
    pub fn torrent_file(&self) -> Option<&TorrentFile> {
        self.engine
            .as_ref()
            .and_then(|engine| engine.params().torrent.file.as_ref())
    }

    fn accumulating_engine(&mut self, operation: &'static str) -> Result<&mut DigestEngine> {
        match self.state {
            ContextState::Disposed => Err(ContextError::use_after_dispose(operation).into()),
            ContextState::Finalized => Err(ContextError::already_finalized(operation).into()),
            ContextState::Accumulating => self
                .engine
                .as_mut()
                .ok_or_else(|| ContextError::use_after_dispose(operation).into()),
        }
    }

    fn finalized_engine(&self, operation: &'static str) -> Result<&DigestEngine> {
        match self.state {
            ContextState::Disposed => Err(ContextError::use_after_dispose(operation).into()),
            ContextState::Accumulating => Err(ContextError::not_finalized(operation).into()),
            ContextState::Finalized => self
                .engine
                .as_ref()
                .ok_or_else(|| ContextError::use_after_dispose(operation).into()),
        }
    }

    /// Feed bytes to every selected algorithm
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.accumulating_engine("update")?.feed(data);
        Ok(())
    }

    /// Bind a single file entry to the BitTorrent info hash
    ///
    /// Only valid before the first byte is fed. Unless a piece length is
    /// configured, it is derived from `size`. `reset` drops the binding.
    pub fn set_torrent_file(&mut self, name: &str, size: u64) -> Result<()> {
        let engine = self.accumulating_engine("set_torrent_file")?;
        if engine.msg_size() > 0 {
            return Err(ValidationError::invalid_parameter(
                "torrent_file",
                "hashing already started, reset the context first",
            )
            .into());
        }

        let mut params: HasherParams = engine.params().clone();
        params.torrent.file = Some(TorrentFile {
            name: name.to_string(),
            size,
        });
        debug!(
            "Bound torrent file {name} ({size} bytes), piece length {}",
            effective_piece_length(&params.torrent)
        );
        engine.reconfigure(params);
        Ok(())
    }

    /// Read `reader` to its end in configured chunks
    pub fn update_from_reader(&mut self, mut reader: impl Read) -> Result<u64> {
        self.feed_reader(&mut reader, "<stream>", None, &NullProvider, None)
    }

    /// Read a source to its end in configured chunks
    ///
    /// On a read failure the bytes consumed so far stay fed and the context
    /// remains usable.
    pub fn update_from_source(&mut self, source: &dyn StreamSource) -> Result<u64> {
        self.update_from_source_with(source, &NullProvider, None)
    }

    /// Read a source reporting progress after every chunk
    ///
    /// `cancel` is checked between chunks; a cancelled read fails with an
    /// `IoError` of kind `Cancelled` and leaves the context accumulating over
    /// the bytes read so far.
    pub fn update_from_source_with(
        &mut self,
        source: &dyn StreamSource,
        progress: &dyn ProgressProvider,
        cancel: Option<&CancellationToken>,
    ) -> Result<u64> {
        self.accumulating_engine("update_from_source")?;

        let name = source.description();
        let mut reader = source.open().map_err(|err| {
            warn!("Failed to open {name}: {err}");
            IoError::open_failed(&name, err)
        })?;

        self.feed_reader(&mut reader, &name, source.len_hint(), progress, cancel)
    }

    fn feed_reader(
        &mut self,
        reader: &mut dyn Read,
        name: &str,
        total_bytes: Option<u64>,
        progress: &dyn ProgressProvider,
        cancel: Option<&CancellationToken>,
    ) -> Result<u64> {
        let mut buffer = vec![0u8; self.config.chunk_size];
        let engine = self.accumulating_engine("update_from_source")?;
        let mut consumed = 0u64;

        loop {
            if cancel.is_some_and(CancellationToken::is_cancelled) {
                debug!("Reading {name} cancelled after {consumed} bytes");
                progress.report(ProgressUpdate::Cancelled {
                    source: name.to_string(),
                    bytes_processed: consumed,
                });
                return Err(IoError::cancelled(name, consumed).into());
            }

            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!("Read from {name} failed after {consumed} bytes: {err}");
                    return Err(IoError::read_failed(name, consumed, err).into());
                }
            };

            engine.feed(&buffer[..read]);
            consumed += read as u64;
            progress.report(ProgressUpdate::HashProgress {
                source: name.to_string(),
                bytes_processed: consumed,
                total_bytes,
            });
        }

        progress.report(ProgressUpdate::Finished {
            source: name.to_string(),
            bytes_processed: consumed,
        });
        Ok(consumed)
    }

    /// Read an async reader to its end in configured chunks
    pub async fn update_from_async_reader<R>(
        &mut self,
        mut reader: R,
        cancel: Option<&CancellationToken>,
    ) -> Result<u64>
    where
        R: AsyncRead + Unpin,
    {
        let mut buffer = vec![0u8; self.config.chunk_size];
        let engine = self.accumulating_engine("update_from_async_reader")?;
        let mut consumed = 0u64;

        loop {
            if cancel.is_some_and(CancellationToken::is_cancelled) {
                debug!("Async read cancelled after {consumed} bytes");
                return Err(IoError::cancelled("<async stream>", consumed).into());
            }

            let read = match reader.read(&mut buffer).await {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!("Async read failed after {consumed} bytes: {err}");
                    return Err(IoError::read_failed("<async stream>", consumed, err).into());
                }
            };

            engine.feed(&buffer[..read]);
            consumed += read as u64;
        }

        Ok(consumed)
    }

    /// Finalize every selected algorithm
    pub fn finish(&mut self) -> Result<()> {
        let engine = self.accumulating_engine("finish")?;
        engine.finalize();
        let hashed = engine.msg_size();
        debug!(
            "Finished hash context for [{}] over {hashed} bytes",
            self.selection
        );
        self.state = ContextState::Finalized;
        Ok(())
    }

    /// Start a new session over the same selection
    pub fn reset(&mut self) -> Result<()> {
        if self.state == ContextState::Disposed {
            return Err(ContextError::use_after_dispose("reset").into());
        }
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| ContextError::use_after_dispose("reset"))?;

        if engine.params().torrent.file.is_some() {
            engine.reconfigure(self.config.hasher_params());
        } else {
            engine.reset();
        }
        debug!("Reset hash context for [{}]", self.selection);
        self.state = ContextState::Accumulating;
        Ok(())
    }

    /// Release the engine; every later operation fails with `UseAfterDispose`
    ///
    /// Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.engine.take().is_some() {
            debug!("Closed hash context for [{}]", self.selection);
        }
        self.state = ContextState::Disposed;
    }

    pub fn is_closed(&self) -> bool {
        self.state == ContextState::Disposed
    }

    /// View the finalized digest of `id`
    pub fn view(&self, id: AlgorithmId) -> Result<DigestView<'_>> {
        if self.state == ContextState::Disposed {
            return Err(ContextError::use_after_dispose("digest").into());
        }
        if !self.selection.contains(id) {
            return Err(ContextError::not_computed(id, self.selection).into());
        }

        let engine = self.finalized_engine("digest")?;
        let digest = engine.digest(id).ok_or_else(|| {
            InternalError::assertion(format!("{id} selected but missing after finish"))
        })?;
        Ok(DigestView {
            algorithm: id,
            digest,
        })
    }

    /// Render the digest of `id`
    pub fn digest(&self, id: AlgorithmId, format: OutputFormat) -> Result<Formatted> {
        Ok(self.view(id)?.format(format))
    }

    /// Digest of `id` in its canonical encoding
    pub fn hash(&self, id: AlgorithmId) -> Result<String> {
        Ok(self.view(id)?.to_default())
    }

    pub fn to_hex(&self, id: AlgorithmId) -> Result<String> {
        Ok(self.view(id)?.to_hex())
    }

    pub fn to_base32(&self, id: AlgorithmId) -> Result<String> {
        Ok(self.view(id)?.to_base32())
    }

    pub fn to_base64(&self, id: AlgorithmId) -> Result<String> {
        Ok(self.view(id)?.to_base64())
    }

    pub fn to_raw(&self, id: AlgorithmId) -> Result<Vec<u8>> {
        Ok(self.view(id)?.as_bytes().to_vec())
    }

    /// Every selected digest in bit order
    pub fn results(&self) -> Result<Vec<HashResult>> {
        let input_size = self.finalized_engine("results")?.msg_size();
        self.selection
            .iter()
            .map(|id| {
                Ok(HashResult {
                    algorithm: id,
                    digest: self.view(id)?.to_default(),
                    encoding: Encoding::Default.resolve(id),
                    input_size,
                })
            })
            .collect()
    }

    /// Build a magnet URI
    ///
    /// `mask` is intersected with the selection; `include_size` adds the
    /// number of bytes hashed.
    pub fn magnet(
        &self,
        display_name: Option<&str>,
        mask: AlgorithmMask,
        include_size: bool,
    ) -> Result<String> {
        self.magnet_with(&MagnetOptions::new(display_name, mask, include_size))
    }

    /// Build a magnet URI from explicit options
    pub fn magnet_with(&self, options: &MagnetOptions<'_>) -> Result<String> {
        let engine = self.finalized_engine("magnet")?;
        let expected = magnet::required_len(engine, options);
        let uri = magnet::build(engine, options)?;

        if uri.len() != expected {
            return Err(InternalError::assertion(format!(
                "computed magnet length was {expected} but {} bytes were written",
                uri.len()
            ))
            .into());
        }
        Ok(uri)
    }

    /// Exact length of the URI `magnet` would return
    pub fn magnet_len(
        &self,
        display_name: Option<&str>,
        mask: AlgorithmMask,
        include_size: bool,
    ) -> Result<usize> {
        self.magnet_len_with(&MagnetOptions::new(display_name, mask, include_size))
    }

    pub fn magnet_len_with(&self, options: &MagnetOptions<'_>) -> Result<usize> {
        let engine = self.finalized_engine("magnet")?;
        Ok(magnet::required_len(engine, options))
    }
}

impl Drop for HashContext {
    fn drop(&mut self) {
        if self.engine.is_some() {
            trace!("Releasing hash context for [{}]", self.selection);
        }
    }
}

impl std::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashContext")
            .field("selection", &self.selection)
            .field("state", &self.state)
            .field("bytes_processed", &self.bytes_processed())
            .finish()
    }
}

/// Canonical digest of `data`
pub fn digest_of_bytes(data: &[u8], id: AlgorithmId) -> Result<String> {
    let mut context = HashContext::new(id)?;
    context.update(data)?;
    context.finish()?;
    context.hash(id)
}

/// Canonical digest of everything `source` yields
pub fn digest_of_source(source: &dyn StreamSource, id: AlgorithmId) -> Result<String> {
    let mut context = HashContext::new(id)?;
    context.update_from_source(source)?;
    context.finish()?;
    context.hash(id)
}

/// Canonical digest of a file
pub fn digest_of_file(path: impl AsRef<Path>, id: AlgorithmId) -> Result<String> {
    digest_of_source(&FileSource::new(path), id)
}

/// Magnet URI of a file named after its final path component, with its size
pub fn magnet_for_file(path: impl AsRef<Path>, mask: AlgorithmMask) -> Result<String> {
    let source = FileSource::new(path);
    let name = source.file_name();
    let mut context = HashContext::new(mask)?;

    if mask.contains(AlgorithmId::BTIH)
        && let (Some(name), Some(size)) = (name.as_deref(), source.len_hint())
    {
        context.set_torrent_file(name, size)?;
    }

    context.update_from_source(&source)?;
    context.finish()?;
    context.magnet(name.as_deref(), mask, true)
}
