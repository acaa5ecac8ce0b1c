//! JSON array encoding of a collection.

use crate::error::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contents of a freshly initialized collection file.
pub const EMPTY_COLLECTION: &str = "[]";

/// Encode a collection as a JSON array.
///
/// Compact output carries no whitespace and keeps object keys in insertion
/// order, matching what `JSON.stringify` produces for the same data.
pub fn encode<R: Serialize>(records: &[R], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    text.map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode a JSON array into a collection.
pub fn decode<R: DeserializeOwned>(text: &str) -> Result<Vec<R>> {
    serde_json::from_str(text).map_err(|e| StoreError::Deserialization(e.to_string()))
}
