use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::types::{AppEvent, Record};

/// Fetch the record list for a selected mode.
///
/// One plain GET, no headers or auth; expected body is a JSON array of
/// records.
pub async fn fetch_records(url: &str, timeout_ms: u64) -> Result<Vec<Record>> {
    log::info!("[fetch] GET {url}");

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .timeout(Duration::from_millis(timeout_ms))
        .send()
        .await
        .map_err(|e| anyhow!("Request to {url} failed: {e}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("Server returned {} for {url}", response.status()));
    }

    let records: Vec<Record> = response
        .json()
        .await
        .context("Response body is not a JSON record array")?;

    log::info!("[fetch] loaded {} records", records.len());
    Ok(records)
}

/// Spawn the single fetch a mode selection triggers.
///
/// A failure is logged and produces no event, so the view keeps showing the
/// preloader. No retry.
pub fn spawn_fetch(url: String, timeout_ms: u64, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        match fetch_records(&url, timeout_ms).await {
            Ok(records) => {
                let _ = tx.send(AppEvent::RecordsLoaded(records));
            }
            Err(e) => log::error!("[fetch] {e:#}"),
        }
    });
}
