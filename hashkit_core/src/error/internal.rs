//! Internal library error types

use thiserror::Error;

/// Internal library errors
#[derive(Error, Debug)]
pub enum InternalError {
    /// The digest engine has no implementation for a selected algorithm
    #[error("No digest implementation registered for algorithm '{algorithm}'")]
    UnsupportedAlgorithm { algorithm: String },

    /// Internal assertion failure
    #[error("Internal assertion failed: {message}")]
    Assertion { message: String },
}

impl InternalError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(algorithm: &str) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an internal assertion failure error
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_algorithm_error() {
        let error = InternalError::unsupported_algorithm("BLAKE3");
        assert!(error.to_string().contains("No digest implementation"));
        assert!(error.to_string().contains("BLAKE3"));
    }

    #[test]
    fn test_assertion_error() {
        let error = InternalError::assertion("magnet length mismatch");
        assert!(error.to_string().contains("Internal assertion failed"));
        assert!(error.to_string().contains("magnet length mismatch"));
    }
}
