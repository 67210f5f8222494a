//! SMS formatting and delivery via the Twilio REST API.

use crate::config::RunConfig;
use crate::error::WatchError;
use crate::fetch::REQUEST_TIMEOUT;
use crate::types::JobRecord;
use tracing::{error, info};

/// Twilio rejects oversized bodies; lines are packed under this cap.
const MAX_BODY_CHARS: usize = 1500;
const MAX_COMPANY_CHARS: usize = 40;
const MAX_TITLE_CHARS: usize = 70;

const HEADER: &str = "New internships:";

/// Render one posting as its notification block:
/// `• [Category] [Source] Company — Title — Location` with the URL on
/// the following line. The location segment is omitted when absent.
pub fn render_line(record: &JobRecord) -> String {
    let company = if record.company.is_empty() {
        "Unknown Company"
    } else {
        truncate(&record.company, MAX_COMPANY_CHARS)
    };
    let title = if record.title.is_empty() {
        "Role"
    } else {
        truncate(&record.title, MAX_TITLE_CHARS)
    };

    let mut line = format!(
        "• [{}] [{}] {} — {}",
        record.category, record.source, company, title
    );
    if let Some(location) = &record.location {
        line.push_str(" — ");
        line.push_str(location);
    }
    line.push('\n');
    line.push_str(&record.url);
    line
}

/// Pack rendered lines into as few message bodies as fit under the
/// provider cap. The first message carries the header; no posting is
/// dropped, overflow just starts another message.
pub fn compose_messages(records: &[JobRecord]) -> Vec<String> {
    let mut messages = Vec::new();
    let mut body = String::from(HEADER);
    let mut entries_in_body = 0;

    for record in records {
        let line = render_line(record);
        if entries_in_body > 0 && body.len() + 1 + line.len() > MAX_BODY_CHARS {
            messages.push(std::mem::take(&mut body));
            entries_in_body = 0;
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&line);
        entries_in_body += 1;
    }

    if entries_in_body > 0 {
        messages.push(body);
    }
    messages
}

/// Send each composed body to every recipient. Failed sends are
/// logged per recipient and do not stop the remaining sends; the
/// error is reported once at the end so the caller can apply its
/// delivery policy.
pub fn send_sms(config: &RunConfig, messages: &[String]) -> Result<(), WatchError> {
    let (sid, token, from) = match (&config.account_sid, &config.auth_token, &config.sms_from) {
        (Some(sid), Some(token), Some(from)) => (sid, token, from),
        _ => {
            info!("SMS provider not configured; skipping notification");
            return Ok(());
        }
    };
    if config.sms_to.is_empty() {
        info!("No SMS recipients configured; skipping notification");
        return Ok(());
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| WatchError::Notify(format!("failed to build SMS client: {}", e)))?;

    let endpoint = format!(
        "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
        sid
    );

    let mut failures = 0;
    for to in &config.sms_to {
        for body in messages {
            let result = client
                .post(&endpoint)
                .basic_auth(sid, Some(token))
                .form(&[
                    ("From", from.as_str()),
                    ("To", to.as_str()),
                    ("Body", body.as_str()),
                ])
                .send();

            match result {
                Ok(response) if response.status().is_success() => {
                    info!("Sent SMS to {} ({} chars)", to, body.len());
                }
                Ok(response) => {
                    error!(
                        "SMS provider rejected send to {}: HTTP {}",
                        to,
                        response.status().as_u16()
                    );
                    failures += 1;
                }
                Err(e) => {
                    error!("SMS send to {} failed: {}", to, e);
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        return Err(WatchError::Notify(format!("{} send(s) failed", failures)));
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, JobRecord, Source};

    fn record(location: Option<&str>) -> JobRecord {
        JobRecord::new(
            Category::Swe,
            Source::InternList,
            "Acme",
            "SWE Intern",
            location,
            "https://x/1",
        )
    }

    #[test]
    fn test_render_line_with_location() {
        assert_eq!(
            render_line(&record(Some("NYC"))),
            "• [SWE] [InternList] Acme — SWE Intern — NYC\nhttps://x/1"
        );
    }

    #[test]
    fn test_render_line_without_location() {
        assert_eq!(
            render_line(&record(None)),
            "• [SWE] [InternList] Acme — SWE Intern\nhttps://x/1"
        );
    }

    #[test]
    fn test_render_line_empty_company_placeholder() {
        let r = JobRecord::new(
            Category::Unknown,
            Source::Simplify,
            "",
            "Some Role",
            None,
            "https://x/2",
        );
        assert_eq!(
            render_line(&r),
            "• [Unknown] [Simplify] Unknown Company — Some Role\nhttps://x/2"
        );
    }

    #[test]
    fn test_render_line_truncates_long_fields() {
        let long_company = "C".repeat(80);
        let long_title = "T".repeat(120);
        let r = JobRecord::new(
            Category::Swe,
            Source::PittCsc,
            &long_company,
            &long_title,
            None,
            "https://x/3",
        );
        let line = render_line(&r);
        assert!(line.contains(&"C".repeat(40)));
        assert!(!line.contains(&"C".repeat(41)));
        assert!(line.contains(&"T".repeat(70)));
        assert!(!line.contains(&"T".repeat(71)));
    }

    #[test]
    fn test_compose_single_message_has_header() {
        let messages = compose_messages(&[record(Some("NYC"))]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("New internships:\n• [SWE]"));
    }

    #[test]
    fn test_compose_empty_records_yields_no_messages() {
        assert!(compose_messages(&[]).is_empty());
    }

    #[test]
    fn test_compose_splits_under_body_cap_without_dropping() {
        let records: Vec<JobRecord> = (0..60)
            .map(|i| {
                JobRecord::new(
                    Category::Swe,
                    Source::PittCsc,
                    &format!("Company {}", i),
                    "Software Engineering Intern",
                    Some("Remote"),
                    &format!("https://example.com/jobs/{}", i),
                )
            })
            .collect();

        let messages = compose_messages(&records);
        assert!(messages.len() > 1);
        for body in &messages {
            assert!(body.len() <= MAX_BODY_CHARS, "body over cap: {}", body.len());
        }
        let total_bullets: usize = messages.iter().map(|m| m.matches("• ").count()).sum();
        assert_eq!(total_bullets, records.len());
        assert!(messages[0].starts_with("New internships:"));
        assert!(!messages[1].starts_with("New internships:"));
    }
}
