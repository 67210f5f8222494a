use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Set of identity hashes for postings that have already been notified.
pub type SeenSet = HashSet<String>;

/// Coarse job-function classification for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    Swe,
    DataAnalysis,
    MlAi,
    ProductManagement,
    Unknown,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Swe => "SWE",
            Category::DataAnalysis => "DataAnalysis",
            Category::MlAi => "MLAI",
            Category::ProductManagement => "ProductManagement",
            Category::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Upstream site a posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Source {
    InternList,
    PittCsc,
    Simplify,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::InternList => "InternList",
            Source::PittCsc => "PittCSC",
            Source::Simplify => "Simplify",
        };
        f.write_str(name)
    }
}

/// One normalized internship posting. Immutable once constructed;
/// only its identity hash outlives the run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobRecord {
    pub category: Category,
    pub source: Source,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub url: String,
}

impl JobRecord {
    /// Build a record with whitespace-trimmed fields. An empty or
    /// blank location collapses to `None`.
    pub fn new(
        category: Category,
        source: Source,
        company: &str,
        title: &str,
        location: Option<&str>,
        url: &str,
    ) -> JobRecord {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        JobRecord {
            category,
            source,
            company: company.trim().to_string(),
            title: title.trim().to_string(),
            location,
            url: url.trim().to_string(),
        }
    }
}

/// Persisted form of the seen set.
#[derive(Debug, Deserialize, Serialize)]
pub struct SeenFile {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub seen: Vec<String>,
}
