//! In-memory storage engine for engramdb.
//!
//! Containment model: a [`Database`] owns named [`Table`]s; a table owns
//! two independent collections, plain [`Record`]s and [`VectorRecord`]s.
//! Records hold named, typed byte payloads; vector records hold an id, a
//! dense f32 vector, and string metadata pairs.
//!
//! # Design
//!
//! - All containers are owning `Vec`s with amortized-doubling growth, so
//!   destruction is structural (`Drop`), never manually walked.
//! - Field and metadata lookup is first-match-wins over an ordered
//!   multimap: duplicate names may be appended and shadow on lookup only,
//!   never update in place.
//! - Search results carry owned copies of records; releasing a result set
//!   never affects table data.
//! - The engine is single-threaded by contract. No internal locking;
//!   callers sharing a database serialize access externally.
//!
//! Both search operations rank with explicit placeholders (constant 1.0
//! for scans, a 0.9-step-0.1 descending sequence for vector queries). A
//! production ranking function replaces them behind the same contracts.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod record;
pub mod result;
pub mod table;
pub mod vector;

pub use database::{Database, TableId};
pub use record::{Field, Record};
pub use result::SearchResult;
pub use table::Table;
pub use vector::VectorRecord;
