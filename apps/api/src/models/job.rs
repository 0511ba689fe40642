use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored job posting. `job_id` is the caller-facing identifier, unique
/// per owner; `description` and `keywords` may be absent and are treated as
/// empty by the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub job_id: String,
    pub user_id: Uuid,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
