//! File system storage.

use super::Storage;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::trace;

/// [`Storage`] backed by `std::fs`.
#[derive(Clone, Debug)]
pub struct FsStorage {
    /// Write through a synced temporary file and rename it into place.
    durable: bool,
}

impl Default for FsStorage {
    fn default() -> Self {
        Self { durable: true }
    }
}

impl FsStorage {
    pub fn new(durable: bool) -> Self {
        Self { durable }
    }

    /// Whether writes go through a synced temporary file and a rename.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Write to a uniquely named sibling file, sync it, then rename it over
    /// the target.
    ///
    /// A crash before the rename leaves the previous contents in place, and
    /// overlapping writers never share a temporary file. The temporary file
    /// is removed on any failure.
    fn write_durable(path: &Path, contents: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;
        Ok(())
    }
}

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        let text = fs::read_to_string(path)?;
        trace!(path = %path.display(), bytes = text.len(), "read file");
        Ok(text)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.durable {
            Self::write_durable(path, contents)?;
        } else {
            fs::write(path, contents)?;
        }
        trace!(path = %path.display(), bytes = contents.len(), durable = self.durable, "wrote file");
        Ok(())
    }
}
