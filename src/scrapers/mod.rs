//! Source adapters. Each adapter maps one upstream page format onto
//! the shared `JobRecord` shape behind the same scrape contract, so a
//! markup change on one site stays contained to its adapter.

pub mod intern_list;
pub mod pitt_csc;
pub mod simplify;

use crate::error::WatchError;
use crate::rules::CategoryRule;
use crate::types::JobRecord;
use reqwest::blocking::Client;
use tracing::{error, info};

/// One registered upstream source.
pub struct SourceDef {
    pub name: &'static str,
    pub scrape: fn(&Client, &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError>,
}

/// Fixed registry of sources polled each run, in notification order.
pub fn sources() -> Vec<SourceDef> {
    vec![
        SourceDef {
            name: "Intern List - SWE",
            scrape: intern_list::scrape_swe,
        },
        SourceDef {
            name: "Intern List - Data Analysis",
            scrape: intern_list::scrape_da,
        },
        SourceDef {
            name: "Intern List - ML/AI",
            scrape: intern_list::scrape_ml,
        },
        SourceDef {
            name: "Intern List - Product Management",
            scrape: intern_list::scrape_pm,
        },
        SourceDef {
            name: "Simplify",
            scrape: simplify::scrape,
        },
        SourceDef {
            name: "Pitt CSC",
            scrape: pitt_csc::scrape,
        },
    ]
}

/// Run every source in `registry`, isolating failures so one broken
/// source never blocks the others. Returns the collected records and
/// how many sources succeeded.
pub fn collect_records(
    client: &Client,
    rules: &[CategoryRule],
    registry: &[SourceDef],
) -> (Vec<JobRecord>, usize) {
    let mut all = Vec::new();
    let mut succeeded = 0;

    for source in registry {
        match (source.scrape)(client, rules) {
            Ok(records) => {
                info!("Scraped {}: {} records", source.name, records.len());
                succeeded += 1;
                all.extend(records);
            }
            Err(e) => {
                error!("Source {} failed: {}", source.name, e);
            }
        }
    }

    (all, succeeded)
}

/// Collapse runs of whitespace the way rendered HTML would.
pub(crate) fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
