use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::prune::prune_duplicates;
use crate::matching::handlers::UserIdQuery;
use crate::state::AppState;

/// Listing projection: metadata only, content bodies stay in the store.
#[derive(Debug, Serialize)]
pub struct ResumeSummary {
    pub id: i64,
    pub filename: Option<String>,
    pub file_url: Option<String>,
    /// Whether matching would consider this record (non-blank extracted text).
    pub has_content: bool,
    pub created_at: DateTime<Utc>,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let resumes = state.store.list_resumes(params.user_id).await?;
    let summaries = resumes
        .into_iter()
        .map(|r| ResumeSummary {
            id: r.id,
            filename: r.filename,
            file_url: r.file_url,
            has_content: r.content.as_deref().is_some_and(|c| !c.trim().is_empty()),
            created_at: r.created_at,
        })
        .collect();
    Ok(Json(summaries))
}

#[derive(Deserialize)]
pub struct PruneRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct PruneResponse {
    pub deleted: Vec<i64>,
}

/// POST /api/v1/resumes/prune
pub async fn handle_prune(
    State(state): State<AppState>,
    Json(req): Json<PruneRequest>,
) -> Result<Json<PruneResponse>, AppError> {
    let deleted = prune_duplicates(state.store.as_ref(), req.user_id).await?;
    Ok(Json(PruneResponse { deleted }))
}
