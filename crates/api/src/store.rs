//! Shared store handle.

use std::sync::Arc;

use engram_core::{EngramError, EngramResult};
use engram_engine::{Database, TableId};
use parking_lot::RwLock;

use crate::memory::MemoryStore;
use crate::state::StateStore;
use crate::vector::VectorStore;

/// Shared handle to one embedded database.
///
/// The engine has no internal locking; the store serializes access with a
/// `parking_lot::RwLock` so every facade cloned from it sees the same
/// data. Clone is cheap (Arc clone).
#[derive(Clone)]
pub struct Store {
    db: Arc<RwLock<Database>>,
}

impl Store {
    /// Open a store over a fresh in-memory database for `path`.
    pub fn open(path: impl Into<String>) -> Self {
        Store {
            db: Arc::new(RwLock::new(Database::open(path))),
        }
    }

    /// State persistence facade.
    pub fn state(&self) -> StateStore {
        StateStore::new(self.db.clone())
    }

    /// Vector similarity facade.
    pub fn vectors(&self) -> VectorStore {
        VectorStore::new(self.db.clone())
    }

    /// Memory record facade.
    pub fn memories(&self) -> MemoryStore {
        MemoryStore::new(self.db.clone())
    }

    /// Direct access to the underlying database lock, for callers
    /// layering their own record schemas on the engine.
    pub fn database(&self) -> &Arc<RwLock<Database>> {
        &self.db
    }
}

// Open the named table, creating it on first use. Facade tables are
// schema-by-convention; creation is idempotent per name.
pub(crate) fn ensure_table(db: &mut Database, name: &str) -> EngramResult<TableId> {
    match db.open_table(name) {
        Ok(id) => Ok(id),
        Err(EngramError::NotFound { .. }) => db.create_table(name),
        Err(e) => Err(e),
    }
}
