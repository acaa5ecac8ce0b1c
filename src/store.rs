//! The record store: one JSON array file, read-modify-write per operation.

use crate::codec::{self, EMPTY_COLLECTION};
use crate::error::{Result, StoreError};
use crate::storage::{FsStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Path of the collection file.
    pub path: PathBuf,

    /// Pretty-print the persisted array instead of writing it compact.
    pub pretty: bool,

    /// Replace the file through a synced temporary file and a rename.
    pub durable_writes: bool,

    /// Whether to initialize the file if it doesn't exist.
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./store.json"),
            pretty: false,
            durable_writes: true,
            create_if_missing: true,
        }
    }
}

/// A collection of records persisted as a single JSON array.
///
/// The store holds no records between calls. Every operation reads the whole
/// file, works on the loaded collection and, if it mutates, writes the whole
/// collection back: at most one read and one write per call.
///
/// There is no locking. Two writers on the same file race and the last
/// write wins; callers that need more must serialize their calls.
pub struct JsonStore<R = Value, S = FsStorage> {
    path: PathBuf,
    storage: S,
    pretty: bool,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonStore<R, FsStorage>
where
    R: Serialize + DeserializeOwned,
{
    /// Open a file-system store from a config.
    ///
    /// A missing file is initialized when `create_if_missing` is set; an
    /// existing file is not read or touched.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = Self::new(config.path, FsStorage::new(config.durable_writes))
            .with_pretty(config.pretty);

        if !store.storage.exists(&store.path) {
            if !config.create_if_missing {
                return Err(StoreError::NotInitialized(store.path));
            }
            store.init()?;
        }

        Ok(store)
    }
}

impl<R, S> JsonStore<R, S>
where
    R: Serialize + DeserializeOwned,
    S: Storage,
{
    /// Wrap a storage collaborator. Performs no I/O.
    pub fn new(path: impl Into<PathBuf>, storage: S) -> Self {
        Self {
            path: path.into(),
            storage,
            pretty: false,
            _records: PhantomData,
        }
    }

    /// Pretty-print the persisted array on every write.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The storage collaborator behind this store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // --- Lifecycle ---

    /// Create the file holding an empty collection.
    ///
    /// Refuses to touch an existing file so a collection is never truncated.
    pub fn init(&self) -> Result<()> {
        if self.storage.exists(&self.path) {
            return Err(StoreError::AlreadyExists(self.path.clone()));
        }

        self.storage.write_file(&self.path, EMPTY_COLLECTION)?;
        debug!(path = %self.path.display(), "initialized collection");
        Ok(())
    }

    // --- Reads ---

    /// Load the whole collection.
    pub fn get_all(&self) -> Result<Vec<R>> {
        self.load()
    }

    /// Records accepted by `predicate`, in collection order.
    pub fn query<P>(&self, mut predicate: P) -> Result<Vec<R>>
    where
        P: FnMut(&R) -> bool,
    {
        let matched: Vec<R> = self.load()?.into_iter().filter(|r| predicate(r)).collect();
        debug!(path = %self.path.display(), matched = matched.len(), "queried collection");
        Ok(matched)
    }

    /// Whether the collection holds no records.
    pub fn check_if_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    // --- Mutations ---

    /// Append one record at the end of the collection.
    pub fn add(&self, record: R) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.persist(&records)?;
        debug!(path = %self.path.display(), len = records.len(), "added record");
        Ok(())
    }

    /// Append a batch of records, in order, with a single write.
    pub fn add_range(&self, batch: impl IntoIterator<Item = R>) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.extend(batch);
        self.persist(&records)?;
        debug!(
            path = %self.path.display(),
            added = records.len() - before,
            len = records.len(),
            "added records"
        );
        Ok(())
    }

    /// Apply `mutator` in place to every record accepted by `predicate`.
    ///
    /// Returns the number of updated records. When nothing matches the file
    /// is not written and the call fails with `no_match`, or with
    /// [`StoreError::NoItemsFound`] if none was given.
    pub fn update<P, M>(
        &self,
        mut predicate: P,
        mut mutator: M,
        no_match: Option<StoreError>,
    ) -> Result<usize>
    where
        P: FnMut(&R) -> bool,
        M: FnMut(&mut R),
    {
        let mut records = self.load()?;
        let matched: Vec<usize> = (0..records.len())
            .filter(|&i| predicate(&records[i]))
            .collect();

        if matched.is_empty() {
            debug!(path = %self.path.display(), "update matched no records");
            return Err(no_match.unwrap_or(StoreError::NoItemsFound));
        }

        for &i in &matched {
            mutator(&mut records[i]);
        }
        self.persist(&records)?;
        debug!(path = %self.path.display(), updated = matched.len(), "updated records");
        Ok(matched.len())
    }

    /// Drop every record accepted by `predicate`.
    ///
    /// Returns the number of removed records. Matching nothing is not an
    /// error; the unchanged collection is written back.
    pub fn remove<P>(&self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&R) -> bool,
    {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !predicate(r));
        self.persist(&records)?;

        let removed = before - records.len();
        debug!(path = %self.path.display(), removed, len = records.len(), "removed records");
        Ok(removed)
    }

    // --- Internal ---

    fn load(&self) -> Result<Vec<R>> {
        let text = self.storage.read_file(&self.path)?;
        codec::decode(&text)
    }

    fn persist(&self, records: &[R]) -> Result<()> {
        let text = codec::encode(records, self.pretty)?;
        self.storage.write_file(&self.path, &text)?;
        Ok(())
    }
}
