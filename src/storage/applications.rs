use chrono::{Datelike, Utc};
use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::{DeveloperApplication, NewDeveloperApplication};
use super::tables::{DEVELOPER_APPLICATIONS, QUEUE_NUMBERS};
use crate::queue_number;

impl Database {
    // ========================================================================
    // Developer application operations
    // ========================================================================

    /// Assign the next queue number and persist the application.
    ///
    /// Sequence allocation, the uniqueness check and the insert share one
    /// write transaction, so concurrent callers always observe distinct
    /// sequence values.
    pub fn create_developer_application(
        &self,
        new: NewDeveloperApplication,
    ) -> Result<DeveloperApplication, DatabaseError> {
        let now = Utc::now();
        let write_txn = self.begin_write()?;

        let seq = Self::next_sequence(&write_txn, "developer_applications")?;
        let application = DeveloperApplication {
            id: uuid::Uuid::new_v4().to_string(),
            queue_number: queue_number::format(now.year(), seq),
            full_name: new.full_name,
            email: new.email,
            experience: new.experience,
            tech_stack: new.tech_stack,
            github_profile: new.github_profile,
            portfolio_website: new.portfolio_website,
            motivation: new.motivation,
            created_at: now,
        };

        {
            let mut index = write_txn.open_table(QUEUE_NUMBERS)?;
            if index.get(application.queue_number.as_str())?.is_some() {
                // Dropping the transaction without commit rolls back the sequence bump
                return Err(DatabaseError::DuplicateQueueNumber(
                    application.queue_number,
                ));
            }
            index.insert(
                application.queue_number.as_str(),
                application.id.as_str(),
            )?;
        }
        Self::insert_sequenced(&write_txn, DEVELOPER_APPLICATIONS, seq, &application)?;
        write_txn.commit()?;

        Ok(application)
    }

    /// All developer applications in queue order
    pub fn get_all_developer_applications(
        &self,
    ) -> Result<Vec<DeveloperApplication>, DatabaseError> {
        self.read_all(DEVELOPER_APPLICATIONS)
    }
}
