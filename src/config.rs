use std::env;
use std::path::PathBuf;

const DEFAULT_SEEN_PATH: &str = "seen.json";

/// How a failed SMS send affects the persisted seen set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Mark every processed record seen regardless of send outcome.
    /// A failed send loses those alerts silently.
    AtMostOnce,
    /// Keep this run's new records out of the seen set when a send
    /// fails, so the next run retries them. Duplicates are possible.
    AtLeastOnce,
}

impl DeliveryMode {
    /// Parse the `DELIVERY_MODE` value; anything unrecognized falls
    /// back to at-most-once.
    pub fn parse(value: &str) -> DeliveryMode {
        match value.trim().to_lowercase().as_str() {
            "at-least-once" | "at_least_once" => DeliveryMode::AtLeastOnce,
            _ => DeliveryMode::AtMostOnce,
        }
    }
}

/// Runtime configuration, read once from the process environment.
/// Missing SMS credentials leave notification unconfigured rather
/// than failing the run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub sms_from: Option<String>,
    pub sms_to: Vec<String>,
    pub seen_path: PathBuf,
    pub rules_path: Option<PathBuf>,
    pub delivery: DeliveryMode,
}

impl RunConfig {
    pub fn from_env() -> RunConfig {
        RunConfig {
            account_sid: env_nonempty("TWILIO_SID"),
            auth_token: env_nonempty("TWILIO_TOKEN"),
            sms_from: env_nonempty("TWILIO_FROM"),
            sms_to: parse_recipients(&env::var("SMS_TO_LIST").unwrap_or_default()),
            seen_path: PathBuf::from(
                env::var("SEEN_PATH").unwrap_or_else(|_| DEFAULT_SEEN_PATH.to_string()),
            ),
            rules_path: env_nonempty("CATEGORY_RULES").map(PathBuf::from),
            delivery: DeliveryMode::parse(&env::var("DELIVERY_MODE").unwrap_or_default()),
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split the comma-separated recipient list, dropping empty entries.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
