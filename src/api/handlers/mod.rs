mod ai_queries;
mod applications;
mod health;
mod resumes;

use crate::api::response::ApiError;
use crate::storage::DatabaseError;

pub use ai_queries::{create_ai_query, list_ai_queries};
pub use applications::{create_developer_application, list_developer_applications};
pub use health::health;
pub use resumes::{create_resume, list_resumes};

/// Log a store failure and hide its details from the client.
fn store_error(action: &'static str) -> impl Fn(DatabaseError) -> ApiError {
    move |e| {
        tracing::error!(error = %e, "{action}");
        ApiError::internal(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let err = store_error("Failed to submit application")(
            DatabaseError::DuplicateQueueNumber("DEV-2025-001".to_string()),
        );
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Failed to submit application");
        assert!(body.get("errors").is_none());
        assert!(!String::from_utf8_lossy(&bytes).contains("DEV-2025-001"));
    }
}
