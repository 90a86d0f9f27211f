use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use super::store_error;
use crate::advisor;
use crate::api::response::{ApiError, AppJson};
use crate::storage::models::{AiQuery, NewAiQuery};
use crate::validation::{validate_ai_query, AiQuerySubmission};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiQueryResponse {
    pub id: String,
    pub query: String,
    pub response: String,
    pub created_at: String,
}

pub async fn create_ai_query(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<AiQuerySubmission>,
) -> Result<Json<AiQueryResponse>, ApiError> {
    let query = validate_ai_query(req)?;
    let topic = advisor::Topic::classify(&query);

    let ai_query = state
        .db
        .create_ai_query(NewAiQuery {
            query,
            response: topic.template().to_string(),
        })
        .map_err(store_error("Failed to process AI query"))?;

    tracing::debug!(query_id = %ai_query.id, ?topic, "Answered AI query");
    Ok(Json(ai_query_to_response(&ai_query)))
}

pub async fn list_ai_queries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AiQueryResponse>>, ApiError> {
    let queries = state
        .db
        .get_all_ai_queries()
        .map_err(store_error("Failed to fetch AI queries"))?;
    Ok(Json(queries.iter().map(ai_query_to_response).collect()))
}

fn ai_query_to_response(q: &AiQuery) -> AiQueryResponse {
    AiQueryResponse {
        id: q.id.clone(),
        query: q.query.clone(),
        response: q.response.clone(),
        created_at: q.created_at.to_rfc3339(),
    }
}
