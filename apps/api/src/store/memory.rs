//! In-memory `RecordStore` used by the test suite. Behaviorally equivalent
//! to the Postgres backend for the operations the engine exercises, plus an
//! injectable upsert failure for the degraded-persistence path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::models::run::{RankedResume, RankingRunRow};
use crate::store::{RecordStore, StoreError};

#[derive(Default)]
struct Inner {
    jobs: Vec<JobRow>,
    resumes: Vec<ResumeRow>,
    runs: HashMap<(Uuid, String), RankingRunRow>,
    next_run_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail_upserts: AtomicBool,
}

impl MemoryStore {
    pub fn add_job(&self, job: JobRow) {
        self.inner.lock().unwrap().jobs.push(job);
    }

    pub fn add_resume(&self, resume: ResumeRow) {
        self.inner.lock().unwrap().resumes.push(resume);
    }

    /// Makes every subsequent `upsert_run` fail, simulating transient
    /// persistence outages.
    pub fn set_fail_upserts(&self, fail: bool) {
        self.fail_upserts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_job(&self, user_id: Uuid, job_id: &str) -> Result<Option<JobRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .jobs
            .iter()
            .find(|j| j.user_id == user_id && j.job_id == job_id)
            .cloned())
    }

    async fn find_resume(
        &self,
        user_id: Uuid,
        resume_id: i64,
    ) -> Result<Option<ResumeRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .resumes
            .iter()
            .find(|r| r.user_id == user_id && r.id == resume_id)
            .cloned())
    }

    async fn list_resumes(&self, user_id: Uuid) -> Result<Vec<ResumeRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut resumes: Vec<ResumeRow> = inner
            .resumes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        resumes.sort_by_key(|r| r.id);
        Ok(resumes)
    }

    async fn delete_resume(&self, user_id: Uuid, resume_id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.resumes.len();
        inner
            .resumes
            .retain(|r| !(r.user_id == user_id && r.id == resume_id));
        Ok(inner.resumes.len() < before)
    }

    async fn upsert_run(
        &self,
        user_id: Uuid,
        job_id: &str,
        results: &[RankedResume],
    ) -> Result<(), StoreError> {
        if self.fail_upserts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("upsert rejected".to_string()));
        }
        let results = serde_json::to_value(results)?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_run_id += 1;
        let row = RankingRunRow {
            id: inner.next_run_id,
            job_id: job_id.to_string(),
            user_id,
            results,
            created_at: Utc::now(),
        };
        inner.runs.insert((user_id, job_id.to_string()), row);
        Ok(())
    }

    async fn find_run(
        &self,
        user_id: Uuid,
        job_id: &str,
    ) -> Result<Option<RankingRunRow>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.runs.get(&(user_id, job_id.to_string())).cloned())
    }
}

/// Minimal row builders shared by the engine, prune, and router tests.
pub fn job_fixture(user_id: Uuid, job_id: &str, description: &str, keywords: &[&str]) -> JobRow {
    JobRow {
        id: 1,
        job_id: job_id.to_string(),
        user_id,
        description: Some(description.to_string()),
        keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
        created_at: Utc::now(),
    }
}

pub fn resume_fixture(
    id: i64,
    user_id: Uuid,
    filename: Option<&str>,
    content: Option<&str>,
) -> ResumeRow {
    ResumeRow {
        id,
        user_id,
        filename: filename.map(str::to_string),
        content: content.map(str::to_string),
        file_url: Some(format!("https://files.example/resumes/{id}.pdf")),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(id: i64, score: f64) -> RankedResume {
        RankedResume {
            resume_index: 0,
            match_score: score,
            matched_keywords: vec![],
            filename: Some("cv.pdf".to_string()),
            id,
            created_at: Utc::now(),
            file_url: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_prior_run() {
        let store = MemoryStore::default();
        let user = Uuid::new_v4();

        store.upsert_run(user, "job-1", &[ranked(1, 90.0)]).await.unwrap();
        store.upsert_run(user, "job-1", &[ranked(2, 40.0)]).await.unwrap();

        let run = store.find_run(user, "job-1").await.unwrap().unwrap();
        let stored: Vec<RankedResume> = serde_json::from_value(run.results).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, 2);
    }

    #[tokio::test]
    async fn test_runs_are_scoped_by_user_and_job() {
        let store = MemoryStore::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.upsert_run(alice, "job-1", &[ranked(1, 90.0)]).await.unwrap();

        assert!(store.find_run(bob, "job-1").await.unwrap().is_none());
        assert!(store.find_run(alice, "job-2").await.unwrap().is_none());
        assert!(store.find_run(alice, "job-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_resume_reports_removal() {
        let store = MemoryStore::default();
        let user = Uuid::new_v4();
        store.add_resume(resume_fixture(7, user, Some("cv.pdf"), None));

        assert!(store.delete_resume(user, 7).await.unwrap());
        assert!(!store.delete_resume(user, 7).await.unwrap());
    }
}
