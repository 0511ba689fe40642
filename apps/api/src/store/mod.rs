//! Record store boundary.
//!
//! The matching engine never talks to a database directly: it receives an
//! `Arc<dyn RecordStore>` through `AppState`, so tests substitute the
//! in-memory fake with no engine changes. `PgRecordStore` is the production
//! backend.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::run::{RankedResume, RankingRunRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Constructed by test fakes to simulate transient outages.
    #[allow(dead_code)]
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Operations the engine needs from the record store. All reads are scoped
/// by `user_id`; a record owned by another user is indistinguishable from a
/// missing one.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_job(&self, user_id: Uuid, job_id: &str) -> Result<Option<JobRow>, StoreError>;

    async fn find_resume(
        &self,
        user_id: Uuid,
        resume_id: i64,
    ) -> Result<Option<ResumeRow>, StoreError>;

    /// All resumes for a user, ordered by ascending id so repeated calls see
    /// the same sequence.
    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, StoreError>;

    /// Returns whether a row was actually removed.
    async fn delete_resume(&self, user_id: Uuid, resume_id: i64) -> Result<bool, StoreError>;

    /// Insert-or-replace the ranking run for `(job_id, user_id)`. Idempotent:
    /// repeating the call with identical inputs leaves identical stored state.
    async fn upsert_run(
        &self,
        user_id: Uuid,
        job_id: &str,
        results: &[RankedResume],
    ) -> Result<(), StoreError>;

    async fn find_run(
        &self,
        user_id: Uuid,
        job_id: &str,
    ) -> Result<Option<RankingRunRow>, StoreError>;
}
