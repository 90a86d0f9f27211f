//! Check-and-normalize rules for each kind of submission.
//!
//! Every function here is pure: it takes untrusted input and either returns a
//! record ready for the store or a `ValidationError` listing every field that
//! failed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::models::{NewDeveloperApplication, NewResume, NewUser};

pub const MIN_MOTIVATION_CHARS: usize = 10;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation failed for {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Names of the failing fields, in the order they were checked.
    #[cfg(test)]
    pub(crate) fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Accumulates field failures so a submission reports all of them at once.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// A required text field: present and not blank. Returns the trimmed value.
    fn required(&mut self, field: &str, value: Option<String>) -> String {
        match non_blank(value) {
            Some(v) => v,
            None => {
                self.fail(field, format!("{field} is required"));
                String::new()
            }
        }
    }

    fn email(&mut self, field: &str, value: Option<String>) -> String {
        let Some(email) = non_blank(value) else {
            self.fail(field, format!("{field} is required"));
            return String::new();
        };
        if !EMAIL.is_match(&email) {
            self.fail(field, "Invalid email address");
        }
        email
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Trim a value, mapping missing and blank input to `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Resumes
// ============================================================================

/// Facts about the uploaded file, computed by the caller from the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSummary {
    pub file_name: String,
    pub file_size: String,
}

#[derive(Debug, Clone, Default)]
pub struct ResumeSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub desired_position: Option<String>,
    pub additional_info: Option<String>,
    pub upload: Option<UploadSummary>,
}

pub fn validate_resume(input: ResumeSubmission) -> Result<NewResume, ValidationError> {
    let mut check = Checker::default();

    let full_name = check.required("fullName", input.full_name);
    let email = check.email("email", input.email);

    let (file_name, file_size) = match input.upload {
        Some(upload) => {
            let file_name = check.required("fileName", Some(upload.file_name));
            let file_size = check.required("fileSize", Some(upload.file_size));
            (file_name, file_size)
        }
        None => {
            check.fail("resume", "Resume file is required");
            (String::new(), String::new())
        }
    };

    check.finish(NewResume {
        full_name,
        email,
        phone: non_blank(input.phone),
        desired_position: non_blank(input.desired_position),
        file_name,
        file_size,
        additional_info: non_blank(input.additional_info),
    })
}

// ============================================================================
// Developer applications
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApplicationSubmission {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub github_profile: Option<String>,
    #[serde(default)]
    pub portfolio_website: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
}

/// Any non-blank `experience` label is accepted; the displayed bands
/// ("0-1", "2-4", "5-7", "8+") are not enforced.
pub fn validate_developer_application(
    input: DeveloperApplicationSubmission,
) -> Result<NewDeveloperApplication, ValidationError> {
    let mut check = Checker::default();

    let full_name = check.required("fullName", input.full_name);
    let email = check.email("email", input.email);
    let experience = check.required("experience", input.experience);

    let tech_stack: Vec<String> = input
        .tech_stack
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| non_blank(Some(t)))
        .collect();
    if tech_stack.is_empty() {
        check.fail("techStack", "Select at least one technology");
    }

    // Length is measured on the text as submitted
    let motivation = input.motivation.unwrap_or_default();
    if motivation.chars().count() < MIN_MOTIVATION_CHARS {
        check.fail(
            "motivation",
            format!("motivation must be at least {MIN_MOTIVATION_CHARS} characters"),
        );
    }

    check.finish(NewDeveloperApplication {
        full_name,
        email,
        experience,
        tech_stack,
        github_profile: non_blank(input.github_profile),
        portfolio_website: non_blank(input.portfolio_website),
        motivation,
    })
}

// ============================================================================
// AI queries
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiQuerySubmission {
    #[serde(default)]
    pub query: Option<String>,
}

/// Returns the query exactly as submitted; only a missing or empty string is rejected.
pub fn validate_ai_query(input: AiQuerySubmission) -> Result<String, ValidationError> {
    let mut check = Checker::default();
    let query = input.query.unwrap_or_default();
    if query.is_empty() {
        check.fail("query", "query is required");
    }
    check.finish(query)
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSubmission {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// The password is kept verbatim (not trimmed); only emptiness is rejected.
pub fn validate_user(input: UserSubmission) -> Result<NewUser, ValidationError> {
    let mut check = Checker::default();
    let username = check.required("username", input.username);
    let password = input.password.unwrap_or_default();
    if password.is_empty() {
        check.fail("password", "password is required");
    }
    check.finish(NewUser { username, password })
}
