//! Agent-memory facades over the engram storage engine.
//!
//! The engine is single-threaded by contract; this crate supplies the
//! external serialization it requires. A [`Store`] owns the database
//! behind an `Arc<RwLock>` and hands out cheap, cloneable, stateless
//! facades:
//!
//! - [`StateStore`]: agent state save/load by numeric id + typed blob
//! - [`VectorStore`]: embedding save + nearest-candidate search
//! - [`MemoryStore`]: thin call-through persistence for memory records
//!
//! Clustering, archiving, importance scoring, RAG chunking, and embedding
//! generation remain external collaborators; they consume these facades
//! and the engine's record/search contracts, nothing more.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod state;
pub mod status;
pub mod store;
pub mod vector;

pub use memory::{MemoryEntry, MemoryStore};
pub use state::{StateSnapshot, StateStore};
pub use status::Status;
pub use store::Store;
pub use vector::{VectorHit, VectorStore};
