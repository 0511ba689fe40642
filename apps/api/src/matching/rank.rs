//! Runs the scorer across a candidate list and produces the ordered,
//! metadata-enriched result set.
//!
//! Each score is carried together with a reference to the record it came
//! from; the index-based wire form is projected only at the end. Enrichment
//! can therefore never pair a score with the wrong resume, even though
//! `resume_index` is also exposed for callers.

use crate::matching::scoring::{Relevance, RelevanceScorer};
use crate::models::resume::ResumeRow;
use crate::models::run::RankedResume;

struct ScoredCandidate<'a> {
    resume: &'a ResumeRow,
    resume_index: usize,
    relevance: Relevance,
}

/// Scores every candidate in list order, sorts by score descending (stable,
/// so ties keep candidate-list order), and attaches resume metadata.
/// `resume_index` is the candidate's position in `candidates`.
pub fn rank_candidates(
    scorer: &dyn RelevanceScorer,
    description: &str,
    keywords: &[String],
    candidates: &[ResumeRow],
) -> Vec<RankedResume> {
    let mut scored: Vec<ScoredCandidate<'_>> = candidates
        .iter()
        .enumerate()
        .map(|(resume_index, resume)| ScoredCandidate {
            relevance: scorer.score(
                description,
                keywords,
                resume.content.as_deref().unwrap_or_default(),
            ),
            resume,
            resume_index,
        })
        .collect();

    scored.sort_by(|a, b| b.relevance.score.total_cmp(&a.relevance.score));

    scored
        .into_iter()
        .map(|candidate| RankedResume {
            resume_index: candidate.resume_index,
            match_score: candidate.relevance.score,
            matched_keywords: candidate.relevance.matched_keywords,
            filename: candidate.resume.filename.clone(),
            id: candidate.resume.id,
            created_at: candidate.resume.created_at,
            file_url: candidate.resume.file_url.clone(),
        })
        .collect()
}
