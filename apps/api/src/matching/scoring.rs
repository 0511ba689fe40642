//! Relevance scoring — pluggable, trait-based scorer for one
//! (job, resume-text) pair.
//!
//! Default: `KeywordOverlapScorer` (pure-Rust, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn RelevanceScorer>`, so a semantic
//! backend can be swapped in at startup without touching the engine.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize;

/// Relevance of one resume to one job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Relevance {
    /// 0–100. Comparable within a run; higher is better.
    pub score: f64,
    /// Normalized job keywords found in the resume text, in job-keyword order.
    pub matched_keywords: Vec<String>,
}

/// The scorer seam. Implementations must be pure per call: identical inputs
/// produce identical output, no I/O, no panics for any string inputs.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, description: &str, keywords: &[String], resume_text: &str) -> Relevance;
}

/// Blend weights for the two scoring terms. Keywords are curated signal and
/// dominate; the description term is the fallback when keywords are sparse
/// or absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_coverage: f64,
    pub description_overlap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_coverage: 0.7,
            description_overlap: 0.3,
        }
    }
}

/// Keyword-coverage scorer with a description token-overlap fallback.
///
/// Algorithm:
/// 1. keyword coverage = fraction of distinct normalized job keywords found
///    (substring) in the normalized resume text
/// 2. description overlap = fraction of distinct description tokens present
///    in the resume token set
/// 3. score = 100 × (0.7 × coverage + 0.3 × overlap), or 100 × overlap when
///    the job has no usable keywords
///
/// Both terms are coverage ratios over denominators fixed by the job, so
/// adding relevant text to a resume can only raise the score.
pub struct KeywordOverlapScorer {
    weights: ScoringWeights,
}

impl KeywordOverlapScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Default for KeywordOverlapScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl RelevanceScorer for KeywordOverlapScorer {
    fn score(&self, description: &str, keywords: &[String], resume_text: &str) -> Relevance {
        let resume_norm = normalize(resume_text);
        let resume_tokens = token_set(&resume_norm);

        let mut seen = HashSet::new();
        let terms: Vec<String> = keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();

        let matched_keywords: Vec<String> = terms
            .iter()
            .filter(|t| resume_norm.contains(t.as_str()))
            .cloned()
            .collect();

        let overlap = description_overlap(description, &resume_tokens);
        let blended = if terms.is_empty() {
            overlap
        } else {
            let coverage = matched_keywords.len() as f64 / terms.len() as f64;
            self.weights.keyword_coverage * coverage + self.weights.description_overlap * overlap
        };

        Relevance {
            score: (blended * 100.0).clamp(0.0, 100.0),
            matched_keywords,
        }
    }
}

/// Fraction of the description's distinct tokens that also occur in the
/// resume. 0.0 when the description has no usable tokens.
fn description_overlap(description: &str, resume_tokens: &BTreeSet<String>) -> f64 {
    let jd_tokens = token_set(description);
    if jd_tokens.is_empty() {
        return 0.0;
    }
    let hits = jd_tokens.iter().filter(|t| resume_tokens.contains(*t)).count();
    hits as f64 / jd_tokens.len() as f64
}

// High-frequency English words carry no signal in either direction.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "in", "is", "it", "of",
    "on", "or", "our", "the", "to", "we", "will", "with", "you", "your",
];

fn token_set(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(&t.as_str()))
        .collect()
}
