//! Error taxonomy for engramdb.
//!
//! Every operation returns an explicit [`EngramResult`]; there is no
//! process-wide last-error state. Each operation validates its own
//! arguments first and fails fast with `InvalidArgument` before touching
//! any container. Allocation or invariant failures abort only the current
//! operation and leave previously committed state intact.
//!
//! `Io` is reserved for a real backing store; the in-memory engine never
//! produces it.

use thiserror::Error;

/// Result alias used across all engramdb crates.
pub type EngramResult<T> = Result<T, EngramError>;

/// Error type shared by the engine and the facades above it.
#[derive(Debug, Error)]
pub enum EngramError {
    /// Malformed input: empty name, empty query vector, stale handle.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },

    /// Absent table, field, metadata key, or agent id.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked up and missed.
        what: String,
    },

    /// Duplicate table name at creation time.
    #[error("already exists: {what}")]
    AlreadyExists {
        /// The colliding name.
        what: String,
    },

    /// Invariant violation inside the engine.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the violated invariant.
        reason: String,
    },

    /// Reserved for a persistent backing store; unused in-memory.
    #[error("I/O error: {reason}")]
    Io {
        /// The underlying I/O failure.
        reason: String,
    },
}

impl EngramError {
    /// Construct an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        EngramError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Construct a `NotFound` error.
    pub fn not_found(what: impl Into<String>) -> Self {
        EngramError::NotFound { what: what.into() }
    }

    /// Construct an `AlreadyExists` error.
    pub fn already_exists(what: impl Into<String>) -> Self {
        EngramError::AlreadyExists { what: what.into() }
    }

    /// Construct an `Internal` error.
    pub fn internal(reason: impl Into<String>) -> Self {
        EngramError::Internal {
            reason: reason.into(),
        }
    }

    /// Construct an `Io` error.
    pub fn io(reason: impl Into<String>) -> Self {
        EngramError::Io {
            reason: reason.into(),
        }
    }

    /// True for `NotFound`; callers use this to map "no data" separately
    /// from operation failure at the numeric status boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngramError::NotFound { .. })
    }
}
