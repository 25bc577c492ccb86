//! Test data builders for creating hashing inputs

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Byte pattern of generated data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Zeros,
    Repeating(u8),
    /// `(i * 7) % 251`, never periodic on a power of two
    Mixed,
}

/// Builder for deterministic test inputs
#[derive(Debug, Clone)]
pub struct TestDataBuilder {
    size: usize,
    pattern: Pattern,
    file_name: Option<String>,
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDataBuilder {
    /// Create a new builder for an empty input
    pub fn new() -> Self {
        Self {
            size: 0,
            pattern: Pattern::Mixed,
            file_name: None,
        }
    }

    /// Set the input size in bytes
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fill with zero bytes
    pub fn zeros(mut self) -> Self {
        self.pattern = Pattern::Zeros;
        self
    }

    /// Fill with one repeated byte
    pub fn repeating(mut self, byte: u8) -> Self {
        self.pattern = Pattern::Repeating(byte);
        self
    }

    /// Name of the file written by [`Self::build_file`]
    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Build the bytes
    pub fn build(&self) -> Vec<u8> {
        match self.pattern {
            Pattern::Zeros => vec![0; self.size],
            Pattern::Repeating(byte) => vec![byte; self.size],
            Pattern::Mixed => (0..self.size).map(|i| (i * 7 % 251) as u8).collect(),
        }
    }

    /// Write the bytes to an anonymous temporary file
    pub fn build_temp_file(&self) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&self.build())?;
        file.flush()?;
        Ok(file)
    }

    /// Write the bytes to a named file inside a fresh temporary directory
    ///
    /// The file lives as long as the returned directory.
    pub fn build_file(&self) -> std::io::Result<(TempDir, std::path::PathBuf)> {
        let dir = TempDir::new()?;
        let name = self.file_name.as_deref().unwrap_or("data.bin");
        let path = dir.path().join(name);
        std::fs::write(&path, self.build())?;
        Ok((dir, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns() {
        assert_eq!(TestDataBuilder::new().with_size(3).zeros().build(), vec![0, 0, 0]);
        assert_eq!(
            TestDataBuilder::new().with_size(2).repeating(b'x').build(),
            b"xx".to_vec()
        );
        let mixed = TestDataBuilder::new().with_size(300).build();
        assert_eq!(mixed[1], 7);
        assert_eq!(mixed[251], 0);
    }

    #[test]
    fn test_build_file_uses_name() {
        let (_dir, path) = TestDataBuilder::new()
            .with_size(10)
            .with_file_name("episode 01.mkv")
            .build_file()
            .unwrap();
        assert!(path.ends_with("episode 01.mkv"));
        assert_eq!(std::fs::read(&path).unwrap().len(), 10);
    }
}
