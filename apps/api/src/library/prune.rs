//! Deletes stored duplicates that deduplication would discard anyway, so
//! the library view and the matcher agree on which upload counts.

use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::dedup::dedup_resumes;
use crate::matching::normalize::normalize;
use crate::store::RecordStore;

/// Removes every resume that [`dedup_resumes`] would drop as an older
/// same-named duplicate, returning the ids actually deleted. Records without
/// a usable filename are invisible to matching but are not duplicates of
/// anything, so they are left untouched. Running prune twice is a no-op the
/// second time.
pub async fn prune_duplicates(
    store: &dyn RecordStore,
    user_id: Uuid,
) -> Result<Vec<i64>, AppError> {
    let resumes = store.list_resumes(user_id).await?;
    let survivors: HashSet<i64> = dedup_resumes(resumes.clone(), false)
        .iter()
        .map(|r| r.id)
        .collect();

    let mut deleted = Vec::new();
    for resume in resumes {
        let Some(filename) = resume.filename.as_deref() else {
            continue;
        };
        if normalize(filename).is_empty() || survivors.contains(&resume.id) {
            continue;
        }
        if store.delete_resume(user_id, resume.id).await? {
            info!("Pruned duplicate resume {} ({filename})", resume.id);
            deleted.push(resume.id);
        }
    }

    Ok(deleted)
}
