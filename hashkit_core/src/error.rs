//! Error types for the hashkit core library
//!
//! This module contains all error types used throughout the library, organized
//! into logical categories for better maintainability and clarity.

use thiserror::Error;

pub mod context;
pub mod internal;
pub mod io;
pub mod validation;

pub use self::context::ContextError;
pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;
pub use internal::InternalError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hashkit core library
///
/// Errors are categorized into four main types:
/// - I/O errors: failures while opening or reading a byte source
/// - Validation errors: algorithm selection and configuration errors
/// - Context errors: operations issued in the wrong context state
/// - Internal errors: library internal errors (broken invariants)
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Context lifecycle errors
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

// Conversions from external error types

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Validation(ValidationError::invalid_configuration(&err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{AlgorithmId, AlgorithmMask};
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_invalid_selection_error_creation() {
        let error = Error::Validation(ValidationError::invalid_selection(0, "no algorithm requested"));

        match error {
            Error::Validation(ValidationError::InvalidSelection { mask, reason }) => {
                assert_eq!(mask, 0);
                assert_eq!(reason, "no algorithm requested");
            }
            _ => panic!("Expected Validation::InvalidSelection error"),
        }
    }

    #[test]
    fn test_not_computed_error_names_algorithm() {
        let selection = AlgorithmId::CRC32 | AlgorithmId::MD5;
        let error = Error::Context(ContextError::not_computed(AlgorithmId::AICH, selection));

        let message = error.to_string();
        assert!(message.contains("AICH"));
        assert!(message.contains("CRC32"));
        assert!(message.contains("MD5"));
    }

    #[test]
    fn test_not_finalized_error_names_operation() {
        let error = Error::Context(ContextError::not_finalized("magnet"));

        assert!(matches!(
            error,
            Error::Context(ContextError::NotFinalized { .. })
        ));
        assert!(error.to_string().contains("magnet"));
    }

    #[test]
    fn test_from_std_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::SourceNotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::other("disk on fire");
        let error = Error::Io(IoError::read_failed("input.bin", 4096, io_error));

        // Transparent wrapping forwards to the inner error's source
        let source = error.source().expect("should have a source");
        assert!(source.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_full_mask_display_in_selection_error() {
        let error = ValidationError::invalid_selection(AlgorithmMask::ALL.bits() | 1 << 13, "x");
        assert!(error.to_string().contains("0x"));
    }
}
