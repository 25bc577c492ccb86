//! Central registry for hash algorithm implementations

use super::traits::HashAlgorithmImpl;
use crate::algorithm::AlgorithmId;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use log::debug;

/// Central registry for all hash algorithms
pub struct AlgorithmRegistry {
    algorithms: HashMap<AlgorithmId, Arc<dyn HashAlgorithmImpl>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Get the global registry instance, building it on first use
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            super::algorithms::register_all(&mut registry);
            debug!(
                "Digest engine initialized with {} algorithms",
                registry.algorithms.len()
            );
            registry
        })
    }

    /// Register a new algorithm
    pub fn register(&mut self, algorithm: impl HashAlgorithmImpl + 'static) {
        self.algorithms.insert(algorithm.id(), Arc::new(algorithm));
    }

    /// Get algorithm by identifier
    pub fn get(&self, id: AlgorithmId) -> Option<Arc<dyn HashAlgorithmImpl>> {
        self.algorithms.get(&id).cloned()
    }

    /// List all registered algorithms in bit order
    pub fn list(&self) -> Vec<AlgorithmId> {
        let mut ids: Vec<_> = self.algorithms.keys().copied().collect();
        ids.sort_by_key(|id| id.bit_index());
        ids
    }
}
