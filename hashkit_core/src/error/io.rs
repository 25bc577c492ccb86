//! I/O related error types

use thiserror::Error;

/// Error raised while opening or reading an external byte source
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Description of the source (usually a path)
    pub source_name: Option<String>,
    /// Bytes of the source consumed before the error happened
    pub offset: Option<u64>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    /// Source does not exist
    SourceNotFound,
    /// Permission denied
    PermissionDenied,
    /// A read from an open source failed
    ReadFailed,
    /// Reading was cancelled between two chunks
    Cancelled,
}

impl IoError {
    /// Create an error for a source that could not be opened
    pub fn open_failed(source_name: &str, source: std::io::Error) -> Self {
        let mut error = Self::from_std(source);
        error.source_name = Some(source_name.to_string());
        error
    }

    /// Create an error for a failed read after `offset` bytes were consumed
    pub fn read_failed(source_name: &str, offset: u64, source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::ReadFailed,
            source_name: Some(source_name.to_string()),
            offset: Some(offset),
            source: Some(source),
        }
    }

    /// Create an error for a read loop cancelled after `offset` bytes
    pub fn cancelled(source_name: &str, offset: u64) -> Self {
        Self {
            kind: IoErrorKind::Cancelled,
            source_name: Some(source_name.to_string()),
            offset: Some(offset),
            source: None,
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::SourceNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::ReadFailed,
        };

        Self {
            kind,
            source_name: None,
            offset: None,
            source: Some(source),
        }
    }

    /// Whether the failure was a cancellation rather than a real I/O fault
    pub fn is_cancelled(&self) -> bool {
        self.kind == IoErrorKind::Cancelled
    }
}

fn format_io_error(error: &IoError) -> String {
    let name = error.source_name.as_deref().unwrap_or("<stream>");
    match error.kind {
        IoErrorKind::SourceNotFound => format!("Source not found: {name}"),
        IoErrorKind::PermissionDenied => format!("Permission denied for source: {name}"),
        IoErrorKind::ReadFailed => match (&error.source, error.offset) {
            (Some(source), Some(offset)) => {
                format!("Read from {name} failed at byte {offset}: {source}")
            }
            (Some(source), None) => format!("Read from {name} failed: {source}"),
            (None, _) => format!("Read from {name} failed"),
        },
        IoErrorKind::Cancelled => format!(
            "Reading {name} was cancelled after {} bytes",
            error.offset.unwrap_or(0)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_failed_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "Not found");
        let error = IoError::open_failed("/test/file.bin", io_error);

        assert_eq!(error.kind, IoErrorKind::SourceNotFound);
        assert_eq!(error.source_name.as_deref(), Some("/test/file.bin"));
        assert!(error.to_string().contains("Source not found"));
        assert!(error.to_string().contains("/test/file.bin"));
    }

    #[test]
    fn test_open_failed_permission_denied() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error = IoError::open_failed("/root/protected.bin", io_error);

        assert_eq!(error.kind, IoErrorKind::PermissionDenied);
        assert!(error.source.is_some());
        assert!(error.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_read_failed_reports_offset() {
        let error = IoError::read_failed("pipe", 16384, io::Error::other("broken"));

        assert_eq!(error.kind, IoErrorKind::ReadFailed);
        assert_eq!(error.offset, Some(16384));
        assert!(error.to_string().contains("16384"));
        assert!(error.to_string().contains("broken"));
    }

    #[test]
    fn test_cancelled() {
        let error = IoError::cancelled("big.iso", 8192);

        assert!(error.is_cancelled());
        assert!(error.source.is_none());
        assert!(error.to_string().contains("cancelled after 8192 bytes"));
    }

    #[test]
    fn test_from_std_io_error() {
        let io_error = io::Error::other("Generic error");
        let error = IoError::from_std(io_error);

        assert_eq!(error.kind, IoErrorKind::ReadFailed);
        assert!(error.source_name.is_none());
        assert!(error.to_string().contains("<stream>"));
    }
}
