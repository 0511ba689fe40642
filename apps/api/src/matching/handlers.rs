use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::{run_match, MatchOutcome, MatchRequest};
use crate::models::run::RankingRunRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// POST /api/v1/match
///
/// Diagnostics (missing job, empty resume set, no extractable text) come
/// back as 200 responses tagged by `status`; only store failures surface as
/// error responses.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchOutcome>, AppError> {
    if req.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id must not be empty".to_string()));
    }
    let outcome = run_match(state.store.as_ref(), state.scorer.as_ref(), &req).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/match/results/:job_id
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RankingRunRow>, AppError> {
    let run = state
        .store
        .find_run(params.user_id, &job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No ranking run for job {job_id}")))?;
    Ok(Json(run))
}
