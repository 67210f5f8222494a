use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::warn;

use crate::error::WatchError;
use crate::types::{SeenFile, SeenSet};

/// Load the seen set. A missing file is first-run behavior and yields
/// an empty set; an unreadable or corrupt file degrades the same way.
/// The run after either case may notify postings a second time.
pub fn load_seen(path: &Path) -> SeenSet {
    if !path.exists() {
        return HashSet::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read seen set from {:?}: {}", path, e);
            return HashSet::new();
        }
    };

    parse_seen(&content).unwrap_or_else(|| {
        warn!("Seen set at {:?} is not valid JSON; starting empty", path);
        HashSet::new()
    })
}

/// Accept the current wrapper document or the legacy bare-array form.
fn parse_seen(content: &str) -> Option<SeenSet> {
    if let Ok(file) = serde_json::from_str::<SeenFile>(content) {
        return Some(file.seen.into_iter().collect());
    }
    serde_json::from_str::<Vec<String>>(content)
        .ok()
        .map(|hashes| hashes.into_iter().collect())
}

/// Persist the seen set, hashes sorted. A write failure risks repeat
/// notifications on the next run; the caller must surface it loudly.
pub fn save_seen(path: &Path, seen: &SeenSet) -> Result<(), WatchError> {
    let mut hashes: Vec<String> = seen.iter().cloned().collect();
    hashes.sort();

    let doc = SeenFile {
        last_updated: Some(Utc::now().to_rfc3339()),
        seen: hashes,
    };

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| WatchError::State(format!("failed to serialize seen set: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| WatchError::State(format!("failed to write seen set to {:?}: {}", path, e)))
}
