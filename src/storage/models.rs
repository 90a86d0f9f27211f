use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Stored records
// ============================================================================

/// A user account. Only the salted hash of the password is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// A resume submission. The uploaded bytes are measured, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub desired_position: Option<String>,
    pub file_name: String,
    pub file_size: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperApplication {
    pub id: String,
    pub queue_number: String,
    pub full_name: String,
    pub email: String,
    pub experience: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_profile: Option<String>,
    #[serde(default)]
    pub portfolio_website: Option<String>,
    pub motivation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiQuery {
    pub id: String,
    pub query: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Validated inputs (produced by the validation layer, consumed by the store)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub desired_position: Option<String>,
    pub file_name: String,
    pub file_size: String,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDeveloperApplication {
    pub full_name: String,
    pub email: String,
    pub experience: String,
    pub tech_stack: Vec<String>,
    pub github_profile: Option<String>,
    pub portfolio_website: Option<String>,
    pub motivation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAiQuery {
    pub query: String,
    pub response: String,
}
