//! Dedupe scraped postings against the persisted seen set.

use crate::types::{JobRecord, SeenSet};
use sha2::{Digest, Sha256};

/// Stable identity hash for a posting.
///
/// Company and title are case-folded; the URL is hashed as-is, so
/// the same role under a different link counts as a new posting.
pub fn record_hash(record: &JobRecord) -> String {
    let key = format!(
        "{}|{}|{}",
        record.company.trim().to_lowercase(),
        record.title.trim().to_lowercase(),
        record.url.trim()
    );
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Split records into not-yet-seen ones and the updated seen set.
///
/// The returned set covers every record processed this run, new or
/// not, so stale upstream listings stop re-notifying. New records
/// keep their input order (source order, then parse order).
pub fn partition_new(records: Vec<JobRecord>, seen: &SeenSet) -> (Vec<JobRecord>, SeenSet) {
    let mut updated = seen.clone();
    let mut fresh = Vec::new();

    for record in records {
        let hash = record_hash(&record);
        if updated.insert(hash) {
            fresh.push(record);
        }
    }

    (fresh, updated)
}
