use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use curricula_common::CurriculaError;

use crate::AppState;

#[derive(Deserialize)]
pub struct CurriculumParams {
    pub search: String,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /curriculum?search=<topic>
pub async fn curriculum(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CurriculumParams>,
) -> impl IntoResponse {
    match state.pipeline.run(&params.search).await {
        Ok(items) => (
            StatusCode::OK,
            Json(json!({ "message": "Success", "data": items })),
        ),
        Err(e) => error_response(e),
    }
}

/// POST /topics/refresh — force a full reload of the topic cache.
pub async fn refresh_topics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.pipeline.refresh_topics().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({ "message": "Topics refreshed", "count": count })),
        ),
        Err(e) => error_response(e),
    }
}

fn error_response(e: CurriculaError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &e {
        CurriculaError::NotFound(_) => StatusCode::NOT_FOUND,
        CurriculaError::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %e, "Curriculum request failed");
    }
    (status, Json(json!({ "message": e.to_string() })))
}
