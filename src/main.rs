use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use watch_internships::config::{DeliveryMode, RunConfig};
use watch_internships::{dedupe, fetch, notify, rules, scrapers, storage};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!("Run failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = RunConfig::from_env();

    let rules = match &config.rules_path {
        Some(path) => rules::load_rules(path)?,
        None => rules::default_rules(),
    };

    let seen = storage::load_seen(&config.seen_path);
    info!("Loaded {} seen hashes from {:?}", seen.len(), config.seen_path);

    let client = fetch::build_client()?;
    let registry = scrapers::sources();
    let (records, succeeded) = scrapers::collect_records(&client, &rules, &registry);
    if succeeded == 0 {
        anyhow::bail!("every source failed this run");
    }
    info!(
        "Collected {} records from {}/{} sources",
        records.len(),
        succeeded,
        registry.len()
    );

    let (fresh, updated) = dedupe::partition_new(records, &seen);
    if fresh.is_empty() {
        storage::save_seen(&config.seen_path, &updated)?;
        info!("No new postings");
        return Ok(());
    }

    let messages = notify::compose_messages(&fresh);
    match notify::send_sms(&config, &messages) {
        Ok(()) => {
            storage::save_seen(&config.seen_path, &updated)?;
            info!(
                "Notified {} new postings in {} message(s)",
                fresh.len(),
                messages.len()
            );
        }
        Err(e) => {
            error!("Notification failed: {}", e);
            // At-least-once keeps this run's new hashes out of the
            // file so the next run retries them.
            let to_persist = match config.delivery {
                DeliveryMode::AtMostOnce => &updated,
                DeliveryMode::AtLeastOnce => &seen,
            };
            storage::save_seen(&config.seen_path, to_persist)?;
        }
    }

    Ok(())
}
