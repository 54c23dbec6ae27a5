//! Vector similarity facade.
//!
//! Call-through from "save vector + search by query vector + limit" onto
//! the engine's vector records. Embedding generation is external; this
//! layer stores what it is given and passes the engine's placeholder
//! scores through untouched.

use std::sync::Arc;

use engram_core::EngramResult;
use engram_engine::{Database, VectorRecord};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::ensure_table;

const VECTOR_TABLE: &str = "embeddings";

/// One vector search hit: an id and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorHit {
    /// Identifier of the stored vector record.
    pub id: u64,
    /// Engine score for this rank (placeholder sequence until a real
    /// similarity metric replaces it).
    pub score: f32,
}

/// Vector similarity facade. Stateless; clone freely.
#[derive(Clone)]
pub struct VectorStore {
    db: Arc<RwLock<Database>>,
}

impl VectorStore {
    pub(crate) fn new(db: Arc<RwLock<Database>>) -> Self {
        VectorStore { db }
    }

    /// Store an embedding under `id` with optional metadata pairs.
    pub fn save(
        &self,
        id: u64,
        embedding: &[f32],
        metadata: &[(&str, &str)],
    ) -> EngramResult<()> {
        let mut record = VectorRecord::new(id);
        record.set_vector(embedding);
        for (key, value) in metadata {
            record.set_metadata(key, value)?;
        }

        let mut db = self.db.write();
        let table_id = ensure_table(&mut db, VECTOR_TABLE)?;
        db.table_mut(table_id)?.insert_vector_record(record);
        debug!(id, dim = embedding.len(), "embedding saved");
        Ok(())
    }

    /// Nearest-candidate search. Returns at most `limit` hits; an empty
    /// store yields an empty result set.
    pub fn search(&self, query: &[f32], limit: usize) -> EngramResult<Vec<VectorHit>> {
        let db = self.db.read();
        let table_id = match db.open_table(VECTOR_TABLE) {
            Ok(id) => id,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let results = db.table(table_id)?.vector_search(query, limit)?;
        Ok(results
            .into_iter()
            .map(|r| VectorHit {
                id: r.id,
                score: r.score,
            })
            .collect())
    }
}
