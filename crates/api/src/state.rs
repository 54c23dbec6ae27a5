//! Agent state persistence.
//!
//! Maps "save/load agent state by numeric id + typed byte blob" onto the
//! engine's record API. The numeric id lives in a designated `agent_id`
//! field, not a table key, so lookup is a scan comparing that field: no
//! secondary index exists in this design, and callers needing O(1) id
//! lookup must layer one externally.
//!
//! Storage is append-only. Re-saving an agent appends a newer record and
//! load returns the latest match.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use engram_core::EngramResult;
use engram_engine::{Database, Record};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::ensure_table;

const STATE_TABLE: &str = "agent_states";

const FIELD_AGENT_ID: &str = "agent_id";
const FIELD_STATE_TYPE: &str = "state_type";
const FIELD_DATA: &str = "data";
const FIELD_METADATA: &str = "metadata";
const FIELD_UPDATED_AT: &str = "updated_at";

/// One persisted agent state, as read back by [`StateStore::load`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The agent this state belongs to.
    pub agent_id: u64,
    /// Caller-defined state kind ("working", "episodic", ...).
    pub state_type: String,
    /// The opaque state blob, exactly as saved.
    pub data: Vec<u8>,
    /// Caller-defined metadata pairs.
    pub metadata: HashMap<String, String>,
    /// UTC seconds at save time.
    pub updated_at: i64,
}

/// State persistence facade. Stateless; clone freely.
#[derive(Clone)]
pub struct StateStore {
    db: Arc<RwLock<Database>>,
}

impl StateStore {
    pub(crate) fn new(db: Arc<RwLock<Database>>) -> Self {
        StateStore { db }
    }

    /// Save a state blob for `agent_id` with no metadata.
    pub fn save(&self, agent_id: u64, state_type: &str, data: &[u8]) -> EngramResult<()> {
        self.save_with_metadata(agent_id, state_type, data, &HashMap::new())
    }

    /// Save a state blob for `agent_id` with caller metadata.
    pub fn save_with_metadata(
        &self,
        agent_id: u64,
        state_type: &str,
        data: &[u8],
        metadata: &HashMap<String, String>,
    ) -> EngramResult<()> {
        let metadata_json = serde_json::to_string(metadata)
            .map_err(|e| engram_core::EngramError::internal(e.to_string()))?;

        let mut record = Record::new();
        record.set_field_u64(FIELD_AGENT_ID, agent_id)?;
        record.set_field_string(FIELD_STATE_TYPE, state_type)?;
        record.set_field_binary(FIELD_DATA, data)?;
        record.set_field_string(FIELD_METADATA, &metadata_json)?;
        record.set_field_i64(FIELD_UPDATED_AT, Utc::now().timestamp())?;

        let mut db = self.db.write();
        let table_id = ensure_table(&mut db, STATE_TABLE)?;
        db.table_mut(table_id)?.insert_record(record);
        debug!(agent_id, state_type, bytes = data.len(), "state saved");
        Ok(())
    }

    /// Load the latest state for `agent_id`, scanning the designated id
    /// field. `Ok(None)` if the agent has never been saved (or the state
    /// table does not exist yet).
    pub fn load(&self, agent_id: u64) -> EngramResult<Option<StateSnapshot>> {
        let db = self.db.read();
        let table_id = match db.open_table(STATE_TABLE) {
            Ok(id) => id,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        // Latest match wins: storage is append-only, so the last record
        // carrying this agent_id is the current state.
        let snapshot = db
            .table(table_id)?
            .records()
            .iter()
            .rev()
            .find_map(|record| {
                match record.get_field_u64(FIELD_AGENT_ID) {
                    Ok(id) if id == agent_id => decode_snapshot(record, agent_id),
                    _ => None,
                }
            });
        Ok(snapshot)
    }
}

// Records missing the schema-by-convention fields are skipped rather than
// failing the whole load.
fn decode_snapshot(record: &Record, agent_id: u64) -> Option<StateSnapshot> {
    let state_type = record.get_field_string(FIELD_STATE_TYPE).ok()?.to_string();
    let data = record.get_field_binary(FIELD_DATA).ok()?.to_vec();
    let metadata_json = record.get_field_string(FIELD_METADATA).ok()?;
    let metadata: HashMap<String, String> = serde_json::from_str(metadata_json).ok()?;
    let updated_at = record.get_field_i64(FIELD_UPDATED_AT).ok()?;

    Some(StateSnapshot {
        agent_id,
        state_type,
        data,
        metadata,
        updated_at,
    })
}
