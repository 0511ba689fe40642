//! One matching invocation: fetch → dedup → content filter → rank → persist.
//!
//! Expected control-flow outcomes (missing job, empty resume set, no
//! extractable text) are values of [`MatchOutcome`], not errors. Only store
//! I/O failures on the read path propagate as `AppError`; a failed persist
//! is reported inside a successful outcome so computed rankings are never
//! discarded because the write was lost.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::dedup::dedup_resumes;
use crate::matching::rank::rank_candidates;
use crate::matching::scoring::RelevanceScorer;
use crate::models::resume::ResumeRow;
use crate::models::run::RankedResume;
use crate::store::RecordStore;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub user_id: Uuid,
    pub job_id: String,
    /// When set, scoring runs over this single record: deduplication is
    /// bypassed and the run is not persisted.
    pub resume_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Ranked(RankingReport),
    JobNotFound { job_id: String },
    NoResumes,
    NoTextContent,
}

#[derive(Debug, Serialize)]
pub struct RankingReport {
    pub job_id: String,
    pub results: Vec<RankedResume>,
    pub persistence: PersistenceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PersistenceStatus {
    /// Full-set run, upsert committed.
    Stored,
    /// Pinned single-resume run; transient by design.
    Skipped,
    /// Upsert failed; the computed ranking is still returned.
    Failed { message: String },
}

pub async fn run_match(
    store: &dyn RecordStore,
    scorer: &dyn RelevanceScorer,
    request: &MatchRequest,
) -> Result<MatchOutcome, AppError> {
    let Some(job) = store.find_job(request.user_id, &request.job_id).await? else {
        warn!("Job {} not found for user {}", request.job_id, request.user_id);
        return Ok(MatchOutcome::JobNotFound {
            job_id: request.job_id.clone(),
        });
    };

    let pinned = request.resume_id.is_some();
    let fetched: Vec<ResumeRow> = match request.resume_id {
        Some(resume_id) => store
            .find_resume(request.user_id, resume_id)
            .await?
            .into_iter()
            .collect(),
        None => store.list_resumes(request.user_id).await?,
    };
    let fetched_count = fetched.len();

    let deduped = dedup_resumes(fetched, pinned);
    if deduped.is_empty() {
        warn!("No resumes found for user {}", request.user_id);
        return Ok(MatchOutcome::NoResumes);
    }
    debug!(
        "Deduplicated {fetched_count} resumes down to {} for job {}",
        deduped.len(),
        job.job_id
    );

    let candidates: Vec<ResumeRow> = deduped
        .into_iter()
        .filter(|r| r.content.as_deref().is_some_and(|c| !c.trim().is_empty()))
        .collect();
    if candidates.is_empty() {
        return Ok(MatchOutcome::NoTextContent);
    }

    let description = job.description.as_deref().unwrap_or_default();
    let keywords = job.keywords.as_deref().unwrap_or_default();
    let results = rank_candidates(scorer, description, keywords, &candidates);

    let persistence = if pinned {
        PersistenceStatus::Skipped
    } else {
        match store.upsert_run(request.user_id, &job.job_id, &results).await {
            Ok(()) => PersistenceStatus::Stored,
            Err(e) => {
                error!("Failed to persist ranking run for job {}: {e}", job.job_id);
                PersistenceStatus::Failed {
                    message: e.to_string(),
                }
            }
        }
    };

    Ok(MatchOutcome::Ranked(RankingReport {
        job_id: job.job_id,
        results,
        persistence,
    }))
}
