use std::sync::Arc;

use crate::matching::scoring::RelevanceScorer;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Record store boundary. Postgres in production, in-memory in tests.
    pub store: Arc<dyn RecordStore>,
    /// Pluggable relevance scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn RelevanceScorer>,
}
