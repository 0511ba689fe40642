use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One ranked entry of a matching run.
///
/// `resume_index` is the candidate's position in the deduplicated,
/// content-filtered list that was scored — valid within that run only.
/// The metadata fields are copied from the same candidate record, so index
/// and metadata cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub resume_index: usize,
    /// Blended relevance on a 0–100 scale. Ordering key within one run.
    pub match_score: f64,
    /// Normalized job keywords found in the resume text, in job-keyword order.
    pub matched_keywords: Vec<String>,
    pub filename: Option<String>,
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub file_url: Option<String>,
}

/// A persisted matching run, unique on `(job_id, user_id)`. Re-running the
/// match for the same key replaces this row wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RankingRunRow {
    pub id: i64,
    pub job_id: String,
    pub user_id: Uuid,
    /// JSON array of [`RankedResume`] in rank order.
    pub results: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
