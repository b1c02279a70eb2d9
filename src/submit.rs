use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use tracing::warn;

use crate::{config::Config, error::Error, types::Report};

/// Submits a report to the configured endpoint. Pass a client to reuse a
/// connection pool; otherwise a one-shot client with the configured timeout
/// is built. Anything but 202 Accepted is a rejection, surfaced with the
/// response body.
pub async fn submit(
    report: &Report,
    config: &Config,
    client: Option<&reqwest::Client>,
) -> Result<(), Error> {
    let payload = serde_json::to_vec(report)?;

    let owned;
    let client = match client {
        Some(client) => client,
        None => {
            owned = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()?;
            &owned
        }
    };

    let url = format!("{}/entries", config.endpoint);
    let response = client
        .post(&url)
        .header("X-ApiKey", &config.api_key)
        .header(CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::ACCEPTED {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "no body".to_string());
        warn!(%status, "crash report rejected");
        return Err(Error::Rejected { status, body });
    }

    Ok(())
}
