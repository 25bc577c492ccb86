//! Hash context lifecycle errors

use crate::algorithm::{AlgorithmId, AlgorithmMask};
use thiserror::Error;

/// Errors raised when an operation does not fit the current context state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Digest or magnet requested before `finish`
    #[error("Cannot {operation}: the hash context has not been finished")]
    NotFinalized { operation: &'static str },

    /// Digest requested for an algorithm outside the selection
    #[error("Algorithm {algorithm} was not computed; context selection is [{selection}]")]
    NotComputed {
        algorithm: AlgorithmId,
        selection: AlgorithmMask,
    },

    /// Data fed or `finish` called again before `reset`
    #[error("Cannot {operation}: the hash context is already finished, call reset first")]
    AlreadyFinalized { operation: &'static str },

    /// Operation on a context whose engine handle was released
    #[error("Cannot {operation}: the hash context has been closed")]
    UseAfterDispose { operation: &'static str },
}

impl ContextError {
    /// Create a not finalized error
    pub fn not_finalized(operation: &'static str) -> Self {
        Self::NotFinalized { operation }
    }

    /// Create a not computed error
    pub fn not_computed(algorithm: AlgorithmId, selection: AlgorithmMask) -> Self {
        Self::NotComputed {
            algorithm,
            selection,
        }
    }

    /// Create an already finalized error
    pub fn already_finalized(operation: &'static str) -> Self {
        Self::AlreadyFinalized { operation }
    }

    /// Create a use after dispose error
    pub fn use_after_dispose(operation: &'static str) -> Self {
        Self::UseAfterDispose { operation }
    }
}
