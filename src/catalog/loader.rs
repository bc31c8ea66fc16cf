use std::time::Duration;

use tracing::{debug, info};

use crate::catalog::csv::{parse_csv, CsvRow};
use crate::error::AppError;

/// Build the HTTP client used for the spreadsheet feed.
///
/// No timeout unless one is configured.
pub fn build_feed_client(timeout: Option<Duration>) -> Result<reqwest::Client, AppError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

/// Download the CSV export of the materials sheet
pub async fn download_csv(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    info!("Downloading materials sheet from: {}", url);

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::UpstreamError {
            status: response.status(),
            message: "Failed to download materials".to_string(),
        });
    }

    let content = response
        .text()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read response: {}", e)))?;

    debug!("Downloaded {} bytes of CSV", content.len());
    Ok(content)
}

/// Fetch and parse the sheet; an empty URL means "no feed configured"
pub async fn fetch_rows(client: &reqwest::Client, url: &str) -> Result<Vec<CsvRow>, AppError> {
    if url.trim().is_empty() {
        return Ok(Vec::new());
    }
    let content = download_csv(client, url).await?;
    Ok(parse_csv(&content))
}
