use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::{NewUser, User};
use super::tables::{USERNAMES, USERS};
use crate::credentials;

impl Database {
    // ========================================================================
    // User operations
    // ========================================================================

    /// Create a user, storing only a salted hash of the password.
    /// Fails with `UsernameTaken` when the username is already registered.
    pub fn create_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            password_hash: credentials::hash_password(&new.password)?,
            username: new.username,
        };

        let write_txn = self.begin_write()?;
        {
            let mut usernames = write_txn.open_table(USERNAMES)?;
            if usernames.get(user.username.as_str())?.is_some() {
                return Err(DatabaseError::UsernameTaken(user.username));
            }
            usernames.insert(user.username.as_str(), user.id.as_str())?;

            let mut table = write_txn.open_table(USERS)?;
            let data = rmp_serde::to_vec_named(&user)?;
            table.insert(user.id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;

        Ok(user)
    }

    /// Get a user by UUID
    pub fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(USERS)?;

        match table.get(id)? {
            Some(data) => {
                let user: User = rmp_serde::from_slice(data.value())?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Get a user by username (resolves username -> uuid -> user)
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let usernames = read_txn.open_table(USERNAMES)?;

        let id = match usernames.get(username)? {
            Some(data) => data.value().to_string(),
            None => return Ok(None),
        };

        let users = read_txn.open_table(USERS)?;
        match users.get(id.as_str())? {
            Some(data) => {
                let user: User = rmp_serde::from_slice(data.value())?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Return the user when the password matches the stored hash
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DatabaseError> {
        Ok(self
            .get_user_by_username(username)?
            .filter(|user| credentials::verify_password(password, &user.password_hash)))
    }
}
