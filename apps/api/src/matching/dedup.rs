//! Collapses a user's resume collection to one record per normalized
//! filename. Re-uploads of the same file create newer rows; the greatest id
//! is the survivor (ids are assigned monotonically, so id order is the
//! recency proxy — `created_at` is display metadata only).

use std::collections::HashMap;

use crate::matching::normalize::normalize;
use crate::models::resume::ResumeRow;

/// One representative per normalized filename, greatest id wins.
///
/// When `pinned` is set the caller selected a specific resume explicitly and
/// the input is returned unchanged, even if a newer same-named record
/// exists. Records whose filename is absent or normalizes to empty are
/// silently dropped. Output preserves first-seen key order, which keeps
/// downstream tie-breaking deterministic for identical inputs.
pub fn dedup_resumes(resumes: Vec<ResumeRow>, pinned: bool) -> Vec<ResumeRow> {
    if pinned {
        return resumes;
    }

    let mut slot_by_key: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<ResumeRow> = Vec::new();

    for resume in resumes {
        let Some(filename) = resume.filename.as_deref() else {
            continue;
        };
        let key = normalize(filename);
        if key.is_empty() {
            continue;
        }
        match slot_by_key.get(&key) {
            Some(&slot) => {
                if resume.id > kept[slot].id {
                    kept[slot] = resume;
                }
            }
            None => {
                slot_by_key.insert(key, kept.len());
                kept.push(resume);
            }
        }
    }

    kept
}
