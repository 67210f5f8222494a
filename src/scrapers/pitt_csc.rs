//! Pitt CSC / SimplifyJobs internship README.
//!
//! The source is a raw Markdown file, fetched as plain text. Each
//! listing is one row of a pipe-delimited table, usually
//! `Company | Role | Location | Application/Link | ...`.

use crate::error::WatchError;
use crate::fetch;
use crate::rules::{self, CategoryRule};
use crate::types::{Category, JobRecord, Source};
use regex::Regex;
use reqwest::blocking::Client;

const README_URL: &str =
    "https://raw.githubusercontent.com/SimplifyJobs/Summer2026-Internships/main/README.md";

pub fn scrape(client: &Client, rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    let markdown = fetch::get_text(client, README_URL)?;
    Ok(parse_table(&markdown, rules))
}

/// Parse table rows into records. Header and separator rows are
/// skipped; markdown links are stripped down to their text; rows
/// without an application URL are dropped.
pub fn parse_table(markdown: &str, rules: &[CategoryRule]) -> Vec<JobRecord> {
    let link_text_re = match Regex::new(r"\[(.*?)\]\(.*?\)") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };
    let url_re = match Regex::new(r"\((https?://[^\)]+)\)") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut records = Vec::new();
    for line in markdown.lines() {
        let line = line.trim();
        if !line.starts_with('|') {
            continue;
        }
        let cols: Vec<&str> = line.trim_matches('|').split('|').map(str::trim).collect();
        if cols.len() < 4 {
            continue;
        }
        if is_header_or_separator(cols[0]) {
            continue;
        }

        let company = link_text_re.replace_all(cols[0], "$1").trim().to_string();
        let title = link_text_re.replace_all(cols[1], "$1").trim().to_string();
        let location = cols[2];

        // The link column can hold several markdown links; the first
        // http(s) URL is the application link.
        let url = match url_re.captures(cols[3]).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str().to_string(),
            None => continue,
        };

        let category = rules::infer_category(rules, &title, Category::Swe);
        records.push(JobRecord::new(
            category,
            Source::PittCsc,
            &company,
            &title,
            Some(location),
            &url,
        ));
    }

    records
}

fn is_header_or_separator(first_col: &str) -> bool {
    if first_col.eq_ignore_ascii_case("company") {
        return true;
    }
    !first_col.is_empty() && first_col.chars().all(|c| matches!(c, '-' | ':' | '—'))
}
