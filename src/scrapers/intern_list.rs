//! Intern List category pages.
//!
//! Structural selectors are tied to the site's current markup and are
//! expected to need adjusting when it changes: listing anchors live
//! under the category path, and the employing company usually appears
//! in the anchor's surrounding text as "... at <Company>".

use crate::error::WatchError;
use crate::fetch;
use crate::rules::CategoryRule;
use crate::scrapers::collapse_ws;
use crate::types::{Category, JobRecord, Source};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

const BASE: &str = "https://www.intern-list.com";

/// Fallback ML/AI slugs, tried in order when nav discovery fails.
/// The site has renamed this category more than once.
const ML_SLUG_FALLBACKS: &[&str] = &[
    "data-science-internships",
    "ml-intern-list",
    "ai-intern-list",
    "machine-learning-internships",
    "data-science-intern-list",
];

const ML_NAV_KEYWORDS: &[&str] = &["machine learning", "ml", "ai"];

pub fn scrape_swe(client: &Client, _rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    scrape_category(client, "swe-intern-list", Category::Swe)
}

pub fn scrape_da(client: &Client, _rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    scrape_category(client, "da-intern-list", Category::DataAnalysis)
}

pub fn scrape_pm(client: &Client, _rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    scrape_category(client, "pm-intern-list", Category::ProductManagement)
}

/// The ML/AI category has no stable slug. Try the one discovered from
/// the homepage nav first, then the known historical slugs.
pub fn scrape_ml(client: &Client, _rules: &[CategoryRule]) -> Result<Vec<JobRecord>, WatchError> {
    let mut candidates: Vec<String> = Vec::new();
    if let Some(slug) = discover_ml_slug(client) {
        candidates.push(slug);
    }
    candidates.extend(ML_SLUG_FALLBACKS.iter().map(|s| s.to_string()));

    let mut tried: Vec<String> = Vec::new();
    for slug in candidates {
        if slug.is_empty() || tried.contains(&slug) {
            continue;
        }
        tried.push(slug.clone());
        match scrape_category(client, &slug, Category::MlAi) {
            Ok(records) => return Ok(records),
            Err(e) => warn!("ML/AI slug {} failed: {}", slug, e),
        }
    }

    Err(WatchError::Fetch("no working ML/AI category slug".to_string()))
}

fn scrape_category(
    client: &Client,
    slug: &str,
    category: Category,
) -> Result<Vec<JobRecord>, WatchError> {
    let html = fetch::get_text(client, &format!("{}/{}", BASE, slug))?;
    Ok(parse_category_page(&html, slug, category))
}

/// Extract listing anchors that live under the category path. Anchors
/// elsewhere on the page (nav, footer) are ignored.
pub fn parse_category_page(html: &str, slug: &str, category: Category) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    let selector = match Selector::parse(&format!("a[href^='/{}/']", slug)) {
        Ok(s) => s,
        Err(_) => return records,
    };
    let company_re = Regex::new(r"\b(?:at|@)\s+([A-Za-z0-9.&' -]{2,})").ok();

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

        let company = extract_nearby_company(&anchor, company_re.as_ref());

        records.push(JobRecord::new(
            category,
            Source::InternList,
            &company,
            &title,
            None,
            &url,
        ));
    }

    records
}

/// Best-effort company extraction from the anchor's parent text.
fn extract_nearby_company(anchor: &ElementRef, company_re: Option<&Regex>) -> String {
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

/// Discover the ML/AI category path from the homepage nav.
fn discover_ml_slug(client: &Client) -> Option<String> {
    let html = match fetch::get_text(client, &format!("{}/", BASE)) {
        Ok(html) => html,
        Err(e) => {
            warn!("ML/AI slug discovery failed: {}", e);
            return None;
        }
    };

    let document = Html::parse_document(&html);
    let selector = Selector::parse("a[href]").ok()?;
    for anchor in document.select(&selector) {
        let text = collapse_ws(&anchor.text().collect::<Vec<_>>().join(" ")).to_lowercase();
        let href = anchor.value().attr("href").unwrap_or("");
        if href.starts_with('/') && ML_NAV_KEYWORDS.iter().any(|k| text.contains(k)) {
            let slug = href.trim_matches('/').to_string();
            if !slug.is_empty() {
                return Some(slug);
            }
        }
    }
    None
}
