//! engramdb — embedded record and vector store for agent memory.
//!
//! This crate re-exports the public surface of the internal crates with a
//! clean, unified interface:
//!
//! - the storage engine ([`Database`], [`Table`], [`Record`],
//!   [`VectorRecord`], [`SearchResult`]) for callers that manage their own
//!   schemas and locking;
//! - the agent-memory facades ([`Store`], [`StateStore`], [`VectorStore`],
//!   [`MemoryStore`]) for the common save/load/search paths;
//! - the error taxonomy ([`EngramError`]) and the numeric [`Status`]
//!   boundary for embedding hosts.
//!
//! ```
//! use engramdb::{Database, Record};
//!
//! let mut db = Database::open("session");
//! let table_id = db.create_table("memories")?;
//!
//! let mut record = Record::new();
//! record.set_field_u64("agent_id", 12345)?;
//! record.set_field_string("content", "prefers short answers")?;
//! db.table_mut(table_id)?.insert_record(record);
//!
//! let results = db.table(table_id)?.scan_search("any query")?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), engramdb::EngramError>(())
//! ```

#![warn(missing_docs)]

// Core error taxonomy
pub use engram_core::{EngramError, EngramResult};

// Field payload codec, for callers decoding raw payloads themselves
pub use engram_core::payload;

// Storage engine
pub use engram_engine::{Database, Field, Record, SearchResult, Table, TableId, VectorRecord};

// Agent-memory facades
pub use engram_api::{
    MemoryEntry, MemoryStore, StateSnapshot, StateStore, Status, Store, VectorHit, VectorStore,
};
