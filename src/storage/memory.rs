//! In-memory storage with call accounting.

use super::Storage;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    exists_calls: usize,
    reads: usize,
    writes: usize,
    fail_reads: Option<io::ErrorKind>,
    fail_writes: Option<io::ErrorKind>,
}

/// [`Storage`] holding files in memory.
///
/// Every call is counted, including failed ones, so callers can check how
/// many reads and writes an operation issued. Reads and writes can be made
/// to fail with a chosen [`io::ErrorKind`].
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.inner.lock().files.insert(path.into(), contents.into());
        self
    }

    /// Current contents of a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.lock().files.get(path.as_ref()).cloned()
    }

    pub fn exists_calls(&self) -> usize {
        self.inner.lock().exists_calls
    }

    pub fn read_count(&self) -> usize {
        self.inner.lock().reads
    }

    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    /// Make every subsequent read fail with `kind` (`None` to stop).
    pub fn fail_reads(&self, kind: Option<io::ErrorKind>) {
        self.inner.lock().fail_reads = kind;
    }

    /// Make every subsequent write fail with `kind` (`None` to stop).
    pub fn fail_writes(&self, kind: Option<io::ErrorKind>) {
        self.inner.lock().fail_writes = kind;
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        let mut inner = self.inner.lock();
        inner.exists_calls += 1;
        inner.files.contains_key(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        let mut inner = self.inner.lock();
        inner.reads += 1;

        if let Some(kind) = inner.fail_reads {
            return Err(io::Error::new(kind, "injected read failure"));
        }

        inner.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.writes += 1;

        if let Some(kind) = inner.fail_writes {
            return Err(io::Error::new(kind, "injected write failure"));
        }

        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
