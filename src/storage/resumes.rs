use chrono::Utc;

use super::db::{Database, DatabaseError};
use super::models::{NewResume, Resume};
use super::tables::RESUMES;

impl Database {
    // ========================================================================
    // Resume operations
    // ========================================================================

    /// Persist a validated resume submission and return the stored record
    pub fn create_resume(&self, new: NewResume) -> Result<Resume, DatabaseError> {
        let resume = Resume {
            id: uuid::Uuid::new_v4().to_string(),
            full_name: new.full_name,
            email: new.email,
            phone: new.phone,
            desired_position: new.desired_position,
            file_name: new.file_name,
            file_size: new.file_size,
            additional_info: new.additional_info,
            created_at: Utc::now(),
        };

        let write_txn = self.begin_write()?;
        let seq = Self::next_sequence(&write_txn, "resumes")?;
        Self::insert_sequenced(&write_txn, RESUMES, seq, &resume)?;
        write_txn.commit()?;

        Ok(resume)
    }

    /// All resumes in submission order
    pub fn get_all_resumes(&self) -> Result<Vec<Resume>, DatabaseError> {
        self.read_all(RESUMES)
    }
}
