//! Internship watcher library.
//!
//! Polls a fixed set of internship listing pages, dedupes postings
//! against a persisted seen set, and sends SMS alerts for new ones.

pub mod config;
pub mod dedupe;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod rules;
pub mod scrapers;
pub mod storage;
pub mod types;

pub use types::*;
