//! Tables: independent collections of records and vector records.
//!
//! A table may hold either kind of record, or both, with no
//! cross-referencing. Both collections grow by amortized doubling and are
//! owned exclusively by the table; handles returned by the database
//! reference the table in place.
//!
//! Both search operations rank with documented placeholders. Replacing
//! them with a real relevance or similarity function must preserve the
//! result-count contracts asserted in the tests below.

use engram_core::{EngramError, EngramResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::Record;
use crate::result::SearchResult;
use crate::vector::VectorRecord;

/// Placeholder score attached to every whole-table scan hit.
const SCAN_SCORE: f32 = 1.0;

/// Starting score of the descending vector-query placeholder sequence.
const VECTOR_SCORE_BASE: f32 = 0.9;

/// Per-rank step of the descending vector-query placeholder sequence.
const VECTOR_SCORE_STEP: f32 = 0.1;

/// A table owned by a [`crate::Database`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    records: Vec<Record>,
    vector_records: Vec<VectorRecord>,
}

impl Table {
    pub(crate) fn new() -> Self {
        Table::default()
    }

    /// Number of plain records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table holds no plain records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of vector records.
    pub fn vector_len(&self) -> usize {
        self.vector_records.len()
    }

    /// Accept an undecoded payload and append one empty record.
    ///
    /// The bytes are not interpreted: payload decoding is an explicit
    /// seam for a collaborator that knows the wire format. Field
    /// population happens through [`Table::record_mut`] afterwards.
    pub fn insert_raw(&mut self, _data: &[u8]) {
        self.records.push(Record::new());
    }

    /// Append a populated record.
    pub fn insert_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Append a populated vector record.
    pub fn insert_vector_record(&mut self, record: VectorRecord) {
        self.vector_records.push(record);
    }

    /// Stored record at `index`, in insertion order.
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Mutable access for in-place field population after `insert_raw`.
    pub fn record_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    /// All stored records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All stored vector records in insertion order.
    pub fn vector_records(&self) -> &[VectorRecord] {
        &self.vector_records
    }

    /// Whole-table scan.
    ///
    /// Query content is ignored: every stored record comes back as one
    /// result wrapping an owned copy, with the constant placeholder score.
    /// An empty table yields an empty, successful result set.
    pub fn scan_search(&self, query: &str) -> EngramResult<Vec<SearchResult>> {
        let results: Vec<SearchResult> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| SearchResult {
                record: Some(record.clone()),
                score: SCAN_SCORE,
                id: i as u64,
            })
            .collect();
        debug!(query, hits = results.len(), "scan search");
        Ok(results)
    }

    /// Vector nearest-candidate lookup.
    ///
    /// Returns `min(limit, stored_vector_count)` results in storage
    /// order. Scores are the strictly decreasing placeholder sequence
    /// 0.9, 0.8, ... and are not a function of the query vector; the
    /// record reference is always `None`.
    pub fn vector_search(
        &self,
        query: &[f32],
        limit: usize,
    ) -> EngramResult<Vec<SearchResult>> {
        if query.is_empty() {
            return Err(EngramError::invalid_argument(
                "query vector must not be empty",
            ));
        }

        let count = self.vector_records.len().min(limit);
        let results: Vec<SearchResult> = self.vector_records[..count]
            .iter()
            .enumerate()
            .map(|(i, vr)| SearchResult {
                record: None,
                score: VECTOR_SCORE_BASE - i as f32 * VECTOR_SCORE_STEP,
                id: vr.id(),
            })
            .collect();
        debug!(dim = query.len(), limit, hits = results.len(), "vector search");
        Ok(results)
    }
}
