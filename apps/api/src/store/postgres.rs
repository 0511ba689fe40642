use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::run::{RankedResume, RankingRunRow};
use crate::store::{RecordStore, StoreError};

/// PostgreSQL-backed record store.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a fresh pool and wraps it.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_job(&self, user_id: Uuid, job_id: &str) -> Result<Option<JobRow>, StoreError> {
        Ok(sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE user_id = $1 AND job_id = $2",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_resume(
        &self,
        user_id: Uuid,
        resume_id: i64,
    ) -> Result<Option<ResumeRow>, StoreError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 AND id = $2",
        )
        .bind(user_id)
        .bind(resume_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, StoreError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn delete_resume(&self, user_id: Uuid, resume_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM resumes WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(resume_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn upsert_run(
        &self,
        user_id: Uuid,
        job_id: &str,
        results: &[RankedResume],
    ) -> Result<(), StoreError> {
        let results = serde_json::to_value(results)?;
        sqlx::query(
            r#"
            INSERT INTO match_runs (job_id, user_id, results, created_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (job_id, user_id)
            DO UPDATE SET results = EXCLUDED.results, created_at = now()
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .bind(&results)
        .execute(&self.pool)
        .await?;

        info!("Upserted ranking run for job {job_id} (user {user_id})");
        Ok(())
    }

    async fn find_run(
        &self,
        user_id: Uuid,
        job_id: &str,
    ) -> Result<Option<RankingRunRow>, StoreError> {
        Ok(sqlx::query_as::<_, RankingRunRow>(
            "SELECT * FROM match_runs WHERE user_id = $1 AND job_id = $2",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
