//! Storage collaborators.
//!
//! The store never touches the file system directly. It goes through a
//! [`Storage`] implementation exposing three primitives keyed by path:
//! existence check, whole-file read and whole-file write.
//!
//! - [`FsStorage`]: the real file system, optionally with durable
//!   write-then-rename replacement
//! - [`MemoryStorage`]: in-memory files with call counters and failure
//!   injection

mod fs;
mod memory;

pub use fs::FsStorage;
pub use memory::MemoryStorage;

use std::io;
use std::path::Path;
use std::sync::Arc;

/// File-system-like interface consumed by the store.
pub trait Storage: Send + Sync {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole file with `contents`.
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write_file(path, contents)
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write_file(path, contents)
    }
}
