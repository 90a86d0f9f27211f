use chrono::Utc;

use super::db::{Database, DatabaseError};
use super::models::{AiQuery, NewAiQuery};
use super::tables::AI_QUERIES;

impl Database {
    /// Persist a query together with the response chosen for it
    pub fn create_ai_query(&self, new: NewAiQuery) -> Result<AiQuery, DatabaseError> {
        let ai_query = AiQuery {
            id: uuid::Uuid::new_v4().to_string(),
            query: new.query,
            response: new.response,
            created_at: Utc::now(),
        };

        let write_txn = self.begin_write()?;
        let seq = Self::next_sequence(&write_txn, "ai_queries")?;
        Self::insert_sequenced(&write_txn, AI_QUERIES, seq, &ai_query)?;
        write_txn.commit()?;

        Ok(ai_query)
    }

    pub fn get_all_ai_queries(&self) -> Result<Vec<AiQuery>, DatabaseError> {
        self.read_all(AI_QUERIES)
    }
}
