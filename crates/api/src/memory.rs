//! Memory record persistence.
//!
//! Thin call-through storage for agent memories. Importance scoring,
//! clustering, and archiving are external algorithms; this facade only
//! honors the record and scan-search contracts they read and write
//! through.

use std::sync::Arc;

use chrono::Utc;
use engram_core::{payload, EngramResult};
use engram_engine::{Database, Record};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::store::ensure_table;

const MEMORY_TABLE: &str = "memories";

const FIELD_MEMORY_ID: &str = "memory_id";
const FIELD_AGENT_ID: &str = "agent_id";
const FIELD_CONTENT: &str = "content";
const FIELD_IMPORTANCE: &str = "importance";
const FIELD_CREATED_AT: &str = "created_at";

/// One memory record as read back by [`MemoryStore::list`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Generated identifier assigned at add time.
    pub memory_id: String,
    /// The agent this memory belongs to.
    pub agent_id: u64,
    /// The memory text.
    pub content: String,
    /// Caller-supplied importance score, stored verbatim.
    pub importance: f32,
    /// UTC seconds at add time.
    pub created_at: i64,
}

/// Memory record facade. Stateless; clone freely.
#[derive(Clone)]
pub struct MemoryStore {
    db: Arc<RwLock<Database>>,
}

impl MemoryStore {
    pub(crate) fn new(db: Arc<RwLock<Database>>) -> Self {
        MemoryStore { db }
    }

    /// Store a memory for `agent_id`; returns the generated memory id.
    pub fn add(&self, agent_id: u64, content: &str, importance: f32) -> EngramResult<String> {
        let memory_id = Uuid::new_v4().to_string();

        let mut record = Record::new();
        record.set_field_string(FIELD_MEMORY_ID, &memory_id)?;
        record.set_field_u64(FIELD_AGENT_ID, agent_id)?;
        record.set_field_string(FIELD_CONTENT, content)?;
        record.set_field_binary(FIELD_IMPORTANCE, &payload::encode_f32(importance))?;
        record.set_field_i64(FIELD_CREATED_AT, Utc::now().timestamp())?;

        let mut db = self.db.write();
        let table_id = ensure_table(&mut db, MEMORY_TABLE)?;
        db.table_mut(table_id)?.insert_record(record);
        debug!(agent_id, memory_id = %memory_id, "memory added");
        Ok(memory_id)
    }

    /// All memories for `agent_id`, in insertion order.
    ///
    /// Reads through the table's scan-search contract and filters by the
    /// designated `agent_id` field.
    pub fn list(&self, agent_id: u64) -> EngramResult<Vec<MemoryEntry>> {
        let db = self.db.read();
        let table_id = match db.open_table(MEMORY_TABLE) {
            Ok(id) => id,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let results = db.table(table_id)?.scan_search("")?;
        let entries = results
            .iter()
            .filter_map(|result| result.record.as_ref())
            .filter(|record| {
                record
                    .get_field_u64(FIELD_AGENT_ID)
                    .map(|id| id == agent_id)
                    .unwrap_or(false)
            })
            .filter_map(decode_entry)
            .collect();
        Ok(entries)
    }
}

fn decode_entry(record: &Record) -> Option<MemoryEntry> {
    Some(MemoryEntry {
        memory_id: record.get_field_string(FIELD_MEMORY_ID).ok()?.to_string(),
        agent_id: record.get_field_u64(FIELD_AGENT_ID).ok()?,
        content: record.get_field_string(FIELD_CONTENT).ok()?.to_string(),
        importance: payload::decode_f32(record.get_field_binary(FIELD_IMPORTANCE).ok()?)?,
        created_at: record.get_field_i64(FIELD_CREATED_AT).ok()?,
    })
}
