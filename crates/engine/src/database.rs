//! Databases: named table directories.
//!
//! A database owns its tables exclusively. Handles ([`TableId`]) are thin
//! copyable references into database-owned storage: mutation through one
//! handle is visible through every other handle to the same table, and a
//! handle dies with its database. Handles from one database are rejected
//! by another instead of silently aliasing.

use std::sync::atomic::{AtomicU64, Ordering};

use engram_core::{EngramError, EngramResult};
use tracing::debug;

use crate::table::Table;

// Distinguishes databases within a process so a stale or foreign TableId
// fails with InvalidArgument rather than resolving to the wrong table.
static NEXT_DATABASE_TAG: AtomicU64 = AtomicU64::new(1);

/// Thin handle referencing a table in place inside its database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId {
    database_tag: u64,
    index: usize,
}

struct TableEntry {
    name: String,
    table: Table,
}

/// An in-memory table directory identified by a path string.
///
/// The path is an identity label for the embedding application; the
/// in-memory engine never touches disk. Dropping the database releases
/// all tables and, transitively, every record, vector record, and field.
pub struct Database {
    tag: u64,
    path: String,
    entries: Vec<TableEntry>,
}

impl Database {
    /// Open an empty table directory for the given path string.
    pub fn open(path: impl Into<String>) -> Self {
        let path = path.into();
        let tag = NEXT_DATABASE_TAG.fetch_add(1, Ordering::Relaxed);
        debug!(%path, "database opened");
        Database {
            tag,
            path,
            entries: Vec::new(),
        }
    }

    /// The path string this database was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of tables.
    pub fn table_count(&self) -> usize {
        self.entries.len()
    }

    /// Table names in creation order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Create a new empty table.
    ///
    /// Fails with AlreadyExists if `name` collides with an existing table
    /// (case-sensitive exact match).
    pub fn create_table(&mut self, name: &str) -> EngramResult<TableId> {
        if name.is_empty() {
            return Err(EngramError::invalid_argument(
                "table name must not be empty",
            ));
        }
        if self.entries.iter().any(|e| e.name == name) {
            return Err(EngramError::already_exists(format!("table '{}'", name)));
        }

        self.entries.push(TableEntry {
            name: name.to_string(),
            table: Table::new(),
        });
        debug!(table = name, "table created");
        Ok(TableId {
            database_tag: self.tag,
            index: self.entries.len() - 1,
        })
    }

    /// Open an existing table by name. Linear scan; NotFound if absent.
    pub fn open_table(&self, name: &str) -> EngramResult<TableId> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|index| TableId {
                database_tag: self.tag,
                index,
            })
            .ok_or_else(|| EngramError::not_found(format!("table '{}'", name)))
    }

    /// Resolve a handle to its table.
    pub fn table(&self, id: TableId) -> EngramResult<&Table> {
        self.check_handle(id)?;
        Ok(&self.entries[id.index].table)
    }

    /// Resolve a handle to its table, mutably.
    pub fn table_mut(&mut self, id: TableId) -> EngramResult<&mut Table> {
        self.check_handle(id)?;
        Ok(&mut self.entries[id.index].table)
    }

    fn check_handle(&self, id: TableId) -> EngramResult<()> {
        if id.database_tag != self.tag {
            return Err(EngramError::invalid_argument(
                "table handle belongs to a different database",
            ));
        }
        if id.index >= self.entries.len() {
            return Err(EngramError::invalid_argument("stale table handle"));
        }
        Ok(())
    }
}
