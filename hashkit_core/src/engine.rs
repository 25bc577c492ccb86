//! Multi-algorithm digest engine
//!
//! Owns one running hasher per selected algorithm and feeds every input slice
//! to all of them, so N algorithms cost a single pass over the data.

use crate::algorithm::{AlgorithmId, AlgorithmMask};
use crate::error::{InternalError, ValidationError};
use crate::hashing::{AlgorithmRegistry, HashAlgorithmImpl, HasherParams, StreamingHasher};
use crate::Result;
use std::sync::Arc;
use log::trace;

pub(crate) struct DigestEngine {
    selection: AlgorithmMask,
    params: HasherParams,
    algorithms: Vec<Arc<dyn HashAlgorithmImpl>>,
    hashers: Vec<(AlgorithmId, Box<dyn StreamingHasher>)>,
    digests: Vec<(AlgorithmId, Vec<u8>)>,
    msg_size: u64,
}

impl DigestEngine {
    /// Acquire running state for every algorithm in `selection`
    pub(crate) fn open(selection: AlgorithmMask, params: HasherParams) -> Result<Self> {
        if selection.is_empty() {
            return Err(ValidationError::invalid_selection(0, "no algorithm requested").into());
        }

        let registry = AlgorithmRegistry::global();
        let algorithms = selection
            .iter()
            .map(|id| {
                registry
                    .get(id)
                    .ok_or_else(|| InternalError::unsupported_algorithm(id.name()).into())
            })
            .collect::<Result<Vec<_>>>()?;

        trace!("Opening {} hashers for [{selection}]", algorithms.len());

        let mut engine = Self {
            selection,
            params,
            algorithms,
            hashers: Vec::new(),
            digests: Vec::new(),
            msg_size: 0,
        };
        engine.start();
        Ok(engine)
    }

    fn start(&mut self) {
        self.hashers = self
            .algorithms
            .iter()
            .map(|algorithm| (algorithm.id(), algorithm.create_hasher(&self.params)))
            .collect();
        self.digests.clear();
        self.msg_size = 0;
    }

    pub(crate) fn selection(&self) -> AlgorithmMask {
        self.selection
    }

    pub(crate) fn params(&self) -> &HasherParams {
        &self.params
    }

    /// Replace the hasher parameters and restart every hasher
    pub(crate) fn reconfigure(&mut self, params: HasherParams) {
        self.params = params;
        self.start();
    }

    pub(crate) fn feed(&mut self, data: &[u8]) {
        for (_, hasher) in &mut self.hashers {
            hasher.update(data);
        }
        self.msg_size += data.len() as u64;
    }

    /// Finalize every running hasher
    pub(crate) fn finalize(&mut self) {
        self.digests = std::mem::take(&mut self.hashers)
            .into_iter()
            .map(|(id, hasher)| (id, hasher.finalize()))
            .collect();
    }

    /// Discard running state and digests, keeping selection and parameters
    pub(crate) fn reset(&mut self) {
        self.start();
    }

    pub(crate) fn digest(&self, id: AlgorithmId) -> Option<&[u8]> {
        self.digests
            .iter()
            .find(|(digest_id, _)| *digest_id == id)
            .map(|(_, digest)| digest.as_slice())
    }

    /// Number of bytes fed since the engine was opened or last reset
    pub(crate) fn msg_size(&self) -> u64 {
        self.msg_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_computes_each_selected_digest() {
        let mask = AlgorithmId::CRC32 | AlgorithmId::MD5;
        let mut engine = DigestEngine::open(mask, HasherParams::default()).unwrap();
        engine.feed(b"12345");
        engine.feed(b"\n");
        engine.finalize();

        assert_eq!(engine.msg_size(), 6);
        assert_eq!(hex::encode(engine.digest(AlgorithmId::CRC32).unwrap()), "261dafe6");
        assert_eq!(
            hex::encode(engine.digest(AlgorithmId::MD5).unwrap()),
            "d577273ff885c3f84dadb8578bb41399"
        );
        assert!(engine.digest(AlgorithmId::SHA1).is_none());
    }

    #[test]
    fn test_engine_digest_unavailable_before_finalize() {
        let mut engine =
            DigestEngine::open(AlgorithmMask::from_single(AlgorithmId::MD5), HasherParams::default())
                .unwrap();
        engine.feed(b"abc");
        assert!(engine.digest(AlgorithmId::MD5).is_none());
    }

    #[test]
    fn test_engine_reset_restarts_hashers() {
        let mask = AlgorithmMask::from_single(AlgorithmId::MD5);
        let mut engine = DigestEngine::open(mask, HasherParams::default()).unwrap();
        engine.feed(b"garbage");
        engine.finalize();
        engine.reset();

        assert_eq!(engine.msg_size(), 0);
        assert!(engine.digest(AlgorithmId::MD5).is_none());

        engine.finalize();
        assert_eq!(
            hex::encode(engine.digest(AlgorithmId::MD5).unwrap()),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_engine_opens_every_algorithm() {
        let mut engine = DigestEngine::open(AlgorithmMask::ALL, HasherParams::default()).unwrap();
        engine.feed(b"a");
        engine.finalize();

        for id in AlgorithmId::ALL {
            assert_eq!(engine.digest(id).map(<[u8]>::len), Some(id.digest_size()));
        }
    }
}
