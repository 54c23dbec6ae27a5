//! Search results.
//!
//! A result set is a plain `Vec<SearchResult>` whose ownership transfers
//! to the caller; release is `Drop`. The optional record inside each
//! result is an independent copy owned by the result set, so dropping
//! results never touches the table that produced them.

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// One element of a search result set.
///
/// Whole-table scans populate `record` with an owned copy of the stored
/// record; vector queries leave it `None` and identify the hit by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Owned copy of the matched record, when the search produces one.
    pub record: Option<Record>,
    /// Ranking score. Currently an explicit placeholder: 1.0 for scans,
    /// a descending 0.9-step-0.1 sequence for vector queries.
    pub score: f32,
    /// Identifier of the hit: the record's position for scans, the
    /// vector record's id for vector queries.
    pub id: u64,
}
