//! Core types for engramdb
//!
//! This crate holds what every layer above shares:
//! - The error taxonomy ([`EngramError`] / [`EngramResult`])
//! - The fixed-width field payload codec used by typed record accessors
//!
//! Nothing here touches storage; the engine crate owns all containers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod payload;

pub use error::{EngramError, EngramResult};
