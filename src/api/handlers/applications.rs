use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use super::store_error;
use crate::api::response::{ApiError, AppJson};
use crate::storage::models::DeveloperApplication;
use crate::validation::{validate_developer_application, DeveloperApplicationSubmission};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApplicationResponse {
    pub id: String,
    pub queue_number: String,
    pub full_name: String,
    pub email: String,
    pub experience: String,
    pub tech_stack: Vec<String>,
    pub github_profile: Option<String>,
    pub portfolio_website: Option<String>,
    pub motivation: String,
    pub created_at: String,
}

pub async fn create_developer_application(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<DeveloperApplicationSubmission>,
) -> Result<Json<DeveloperApplicationResponse>, ApiError> {
    let new = validate_developer_application(req)?;
    let application = state
        .db
        .create_developer_application(new)
        .map_err(store_error("Failed to submit application"))?;

    tracing::debug!(
        application_id = %application.id,
        queue_number = %application.queue_number,
        "Created developer application"
    );
    Ok(Json(application_to_response(&application)))
}

pub async fn list_developer_applications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DeveloperApplicationResponse>>, ApiError> {
    let applications = state
        .db
        .get_all_developer_applications()
        .map_err(store_error("Failed to fetch applications"))?;
    Ok(Json(
        applications.iter().map(application_to_response).collect(),
    ))
}

fn application_to_response(a: &DeveloperApplication) -> DeveloperApplicationResponse {
    DeveloperApplicationResponse {
        id: a.id.clone(),
        queue_number: a.queue_number.clone(),
        full_name: a.full_name.clone(),
        email: a.email.clone(),
        experience: a.experience.clone(),
        tech_stack: a.tech_stack.clone(),
        github_profile: a.github_profile.clone(),
        portfolio_website: a.portfolio_website.clone(),
        motivation: a.motivation.clone(),
        created_at: a.created_at.to_rfc3339(),
    }
}
