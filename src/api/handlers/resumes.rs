use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use super::store_error;
use crate::api::response::ApiError;
use crate::api::upload::{format_file_size, is_allowed_media_type, resolve_media_type};
use crate::storage::models::Resume;
use crate::validation::{validate_resume, ResumeSubmission, UploadSummary};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub desired_position: Option<String>,
    pub file_name: String,
    pub file_size: String,
    pub additional_info: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Route: POST /api/resumes (multipart, file field `resume`)
pub async fn create_resume(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut submission = ResumeSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "resume" => {
                if submission.upload.is_some() {
                    return Err(ApiError::bad_request("Only one resume file is allowed"));
                }

                let file_name = field.file_name().map(|s| s.to_string());
                let mime_type =
                    resolve_media_type(field.content_type(), file_name.as_deref());

                if !mime_type.as_deref().is_some_and(is_allowed_media_type) {
                    tracing::info!(?mime_type, "Rejected resume with unsupported media type");
                    return Err(ApiError::unsupported_media_type(
                        "Invalid file type. Only PDF, DOC, and DOCX files are allowed.",
                    ));
                }

                let data = field.bytes().await.map_err(multipart_error)?;
                let byte_size = data.len() as u64;

                if byte_size > state.config.max_upload_size {
                    tracing::info!(byte_size, "Rejected oversized resume");
                    return Err(too_large(state.config.max_upload_size));
                }

                submission.upload = Some(UploadSummary {
                    file_name: file_name.unwrap_or_default(),
                    file_size: format_file_size(byte_size),
                });
            }
            "fullName" => submission.full_name = Some(text(field).await?),
            "email" => submission.email = Some(text(field).await?),
            "phone" => submission.phone = Some(text(field).await?),
            "desiredPosition" => submission.desired_position = Some(text(field).await?),
            "additionalInfo" => submission.additional_info = Some(text(field).await?),
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let new = validate_resume(submission)?;
    let resume = state
        .db
        .create_resume(new)
        .map_err(store_error("Failed to upload resume"))?;

    tracing::debug!(resume_id = %resume.id, file_size = %resume.file_size, "Stored resume");
    Ok(Json(resume_to_response(&resume)))
}

/// Route: GET /api/resumes
pub async fn list_resumes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ResumeResponse>>, ApiError> {
    let resumes = state
        .db
        .get_all_resumes()
        .map_err(store_error("Failed to fetch resumes"))?;
    Ok(Json(resumes.iter().map(resume_to_response).collect()))
}

// ============================================================================
// Helpers
// ============================================================================

async fn text(field: Field<'_>) -> Result<String, ApiError> {
    let name = field.name().unwrap_or("").to_string();
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid {name}: {}", e.body_text())))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large("Request body is too large")
    } else {
        ApiError::bad_request(format!("Invalid multipart data: {}", e.body_text()))
    }
}

fn too_large(limit: u64) -> ApiError {
    ApiError::payload_too_large(format!(
        "File exceeds maximum upload size of {} bytes",
        limit
    ))
}

fn resume_to_response(resume: &Resume) -> ResumeResponse {
    ResumeResponse {
        id: resume.id.clone(),
        full_name: resume.full_name.clone(),
        email: resume.email.clone(),
        phone: resume.phone.clone(),
        desired_position: resume.desired_position.clone(),
        file_name: resume.file_name.clone(),
        file_size: resume.file_size.clone(),
        additional_info: resume.additional_info.clone(),
        created_at: resume.created_at.to_rfc3339(),
    }
}
