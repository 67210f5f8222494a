//! Simplify listings page.
//!
//! Entries are job links on a single aggregate page. The markup does
//! not carry a job function, so the category is inferred from the
//! title through the keyword rule table.

use crate::error::WatchError;
use crate::fetch;
use crate::rules::{self, CategoryRule};
use crate::scrapers::collapse_ws;
use crate::types::{Category, JobRecord, Source};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

const BASE: &str = "https://simplify.jobs";
const LISTINGS_URL: &str = "https://simplify.jobs/internships";

pub fn scrape(client: &Client, rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    let html = fetch::get_text(client, LISTINGS_URL)?;
    Ok(parse_listings(&html, rules))
}

/// Extract job links. The company, when present, leads the
/// surrounding text as "Company • Title" (or with a dash separator).
pub fn parse_listings(html: &str, rules: &[CategoryRule]) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    let selector = match Selector::parse("a[href*='/jobs/']") {
        Ok(s) => s,
        Err(_) => return records,
    };
    let company_re = Regex::new(r"^([A-Za-z0-9.&' -]{2,})\s+[•–-]\s+").ok();

    for anchor in document.select(&selector) {
        let title = collapse_ws(&anchor.text().collect::<Vec<_>>().join(" "));
        let href = anchor.value().attr("href").unwrap_or("");
        if title.is_empty() || href.is_empty() {
            continue;
        }
        let url = if href.starts_with('/') {
            format!("{}{}", BASE, href)
        } else {
            href.to_string()
        };

        let company = extract_leading_company(&anchor, company_re.as_ref());
        let category = rules::infer_category(rules, &title, Category::Swe);

        records.push(JobRecord::new(
            category,
            Source::Simplify,
            &company,
            &title,
            None,
            &url,
        ));
    }

    records
}

fn extract_leading_company(anchor: &ElementRef, company_re: Option<&Regex>) -> String {
    let parent = match anchor.parent().and_then(ElementRef::wrap) {
        Some(parent) => parent,
        None => return String::new(),
    };
    let text = collapse_ws(&parent.text().collect::<Vec<_>>().join(" "));
    company_re
        .and_then(|re| re.captures(&text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    const FIXTURE: &str = r#"
        <html><body>
          <div class="listing">Acme • <a href="/jobs/123">Machine Learning Intern</a></div>
          <div class="listing">Globex – <a href="/jobs/456">Backend Intern</a></div>
          <div class="listing"><a href="https://simplify.jobs/jobs/789">Marketing Intern</a></div>
          <div><a href="/companies/acme">Acme profile</a></div>
        </body></html>
    "#;

    #[test]
    fn test_parse_extracts_job_links_only() {
        let records = parse_listings(FIXTURE, &default_rules());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].url, "https://simplify.jobs/jobs/123");
        assert_eq!(records[2].url, "https://simplify.jobs/jobs/789");
    }

    #[test]
    fn test_parse_infers_category_from_title() {
        let records = parse_listings(FIXTURE, &default_rules());
        assert_eq!(records[0].category, Category::MlAi);
        assert_eq!(records[1].category, Category::Swe);
        // No keyword hit falls back to the SWE default for this source.
        assert_eq!(records[2].category, Category::Swe);
    }

    #[test]
    fn test_parse_extracts_leading_company() {
        let records = parse_listings(FIXTURE, &default_rules());
        assert_eq!(records[0].company, "Acme");
        assert_eq!(records[1].company, "Globex");
        assert_eq!(records[2].company, "");
    }
}
