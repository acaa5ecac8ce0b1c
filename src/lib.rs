//! # JSON Persistence
//!
//! A minimal file-backed record store. One file holds one collection,
//! persisted as a single JSON array.
//!
//! ## Core Concepts
//!
//! - **Records**: opaque serde values, `serde_json::Value` by default
//! - **Collection**: the ordered records of one file, order kept by every operation
//! - **Read-modify-write**: each operation loads the whole array and mutations
//!   write the whole array back
//! - **Storage**: a pluggable collaborator providing `exists`, `read_file`
//!   and `write_file`
//!
//! ## Example
//!
//! ```ignore
//! use json_persistence::{JsonStore, StoreConfig};
//! use serde_json::json;
//!
//! let store: JsonStore = JsonStore::open(StoreConfig {
//!     path: "./users.json".into(),
//!     ..Default::default()
//! })?;
//!
//! store.add(json!({"name": "yolo", "id": 1}))?;
//! store.update(|u| u["id"] == 1, |u| u["name"] = json!("yolo2"), None)?;
//! let found = store.query(|u| u["name"] == "yolo2")?;
//! store.remove(|u| u["id"] == 1)?;
//! ```

pub mod codec;
pub mod error;
pub mod storage;
pub mod store;

// Re-exports
pub use error::{Result, StoreError};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use store::{JsonStore, StoreConfig};
