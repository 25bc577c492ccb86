//! External byte sources
//!
//! A [`StreamSource`] hands out a fresh reader every time it is opened, which
//! lets one-shot helpers and contexts read files and buffers the same way.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Something that can be opened and read to its end
pub trait StreamSource {
    /// Open a reader positioned at the first byte
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;

    /// Human readable description used in errors and progress
    fn description(&self) -> String;

    /// Total length when known up front
    fn len_hint(&self) -> Option<u64> {
        None
    }
}

/// File on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, used as the magnet display name
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

impl StreamSource for FileSource {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }

    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn len_hint(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|meta| meta.len())
    }
}

/// In-memory buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    name: String,
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl StreamSource for MemorySource {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.data.as_slice()))
    }

    fn description(&self) -> String {
        self.name.clone()
    }

    fn len_hint(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }
}
