//! Numeric status boundary.
//!
//! Embedding hosts distinguish only "ok", "no data", and "failed":
//! `0` success, `1` not-found, `-1` everything else. The finer taxonomy
//! (invalid-argument, already-exists, internal) exists inside the engine
//! but folds to `-1` at this boundary. Statuses are explicit per-call
//! values; there is no process-wide last-error state.

use engram_core::{EngramError, EngramResult};
use serde::{Deserialize, Serialize};

/// Outcome of an operation at the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    /// Operation succeeded.
    Ok = 0,
    /// Operation failed (invalid argument, duplicate, internal).
    Error = -1,
    /// The requested table, field, key, or agent was absent.
    NotFound = 1,
}

impl Status {
    /// The numeric code surfaced across the boundary.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Fold a result into a status, discarding the value.
    pub fn from_result<T>(result: &EngramResult<T>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => Status::from(e),
        }
    }
}

impl From<&EngramError> for Status {
    fn from(err: &EngramError) -> Status {
        if err.is_not_found() {
            Status::NotFound
        } else {
            Status::Error
        }
    }
}
