use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume. `id` is assigned monotonically and doubles as the
/// recency proxy during deduplication. `content` holds the extracted text;
/// records without usable content never reach the scorer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub user_id: Uuid,
    pub filename: Option<String>,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
