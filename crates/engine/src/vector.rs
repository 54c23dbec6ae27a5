//! Vector records: an id, a dense f32 vector, and string metadata.
//!
//! A vector record holds at most one vector payload; re-setting replaces
//! the previous buffer verbatim. There is no normalization and no
//! dimension validation against a table-wide schema; dimension
//! consistency across records in a table is a caller responsibility.

use engram_core::{EngramError, EngramResult};
use serde::{Deserialize, Serialize};

/// A vector record owned by a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    id: u64,
    vector: Vec<f32>,
    metadata: Vec<(String, String)>,
}

impl VectorRecord {
    /// Create a record with a zero-length vector and no metadata.
    pub fn new(id: u64) -> Self {
        VectorRecord {
            id,
            vector: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// The record identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The stored vector, verbatim as last set.
    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    /// Declared dimension of the stored vector.
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Number of metadata pairs, counting duplicates.
    pub fn metadata_len(&self) -> usize {
        self.metadata.len()
    }

    /// Replace the vector payload. The previous buffer is dropped; the
    /// new one is copied verbatim, with no normalization.
    pub fn set_vector(&mut self, vector: &[f32]) {
        self.vector = vector.to_vec();
    }

    /// Append a metadata pair. Duplicate keys are permitted and shadow
    /// earlier values on lookup only.
    pub fn set_metadata(&mut self, key: &str, value: &str) -> EngramResult<()> {
        if key.is_empty() {
            return Err(EngramError::invalid_argument(
                "metadata key must not be empty",
            ));
        }
        self.metadata.push((key.to_string(), value.to_string()));
        Ok(())
    }

    /// First metadata value for `key`, or `None` if no key matches.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate metadata pairs in insertion order.
    pub fn metadata_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
