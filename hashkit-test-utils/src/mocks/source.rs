//! Byte sources with scripted behavior

use hashkit_core::StreamSource;
use std::io::{self, Read};

/// Source that yields `data`, then fails every further read
///
/// With `fail_on_open` set, opening fails instead.
#[derive(Debug, Clone)]
pub struct FailingSource {
    name: String,
    data: Vec<u8>,
    fail_on_open: bool,
    kind: io::ErrorKind,
}

impl FailingSource {
    /// Fail after `data` has been read
    pub fn after(name: &str, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            data: data.into(),
            fail_on_open: false,
            kind: io::ErrorKind::Other,
        }
    }

    /// Fail when opened
    pub fn on_open(name: &str, kind: io::ErrorKind) -> Self {
        Self {
            name: name.to_string(),
            data: Vec::new(),
            fail_on_open: true,
            kind,
        }
    }
}

struct FailingReader<'a> {
    remaining: &'a [u8],
    kind: io::ErrorKind,
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining.is_empty() {
            return Err(io::Error::new(self.kind, "simulated read failure"));
        }
        self.remaining.read(buf)
    }
}

impl StreamSource for FailingSource {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        if self.fail_on_open {
            return Err(io::Error::new(self.kind, "simulated open failure"));
        }
        Ok(Box::new(FailingReader {
            remaining: &self.data,
            kind: self.kind,
        }))
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

/// Source that returns at most `max_read` bytes per read and reports
/// `Interrupted` before every read
#[derive(Debug, Clone)]
pub struct TrickleSource {
    data: Vec<u8>,
    max_read: usize,
}

impl TrickleSource {
    pub fn new(data: impl Into<Vec<u8>>, max_read: usize) -> Self {
        Self {
            data: data.into(),
            max_read: max_read.max(1),
        }
    }
}

struct TrickleReader<'a> {
    remaining: &'a [u8],
    max_read: usize,
    interrupt: bool,
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let limit = buf.len().min(self.max_read);
        self.remaining.read(&mut buf[..limit])
    }
}

impl StreamSource for TrickleSource {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(TrickleReader {
            remaining: &self.data,
            max_read: self.max_read,
            interrupt: false,
        }))
    }

    fn description(&self) -> String {
        "trickle".to_string()
    }

    fn len_hint(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }
}
