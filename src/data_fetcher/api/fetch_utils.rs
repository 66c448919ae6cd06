//! Generic JSON fetching with HTTP status and payload error mapping

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use super::urls::redact_api_key;
use crate::error::AppError;

/// Fetches `url` and parses the body as JSON.
///
/// Single attempt, no caching. Network failures, non-2xx statuses and bodies
/// that do not parse into `T` are all returned as errors. The API key never
/// appears in logs or errors.
#[instrument(skip_all, fields(url = %redact_api_key(url)))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &Url,
    headers: HeaderMap,
) -> Result<T, AppError> {
    let shown_url = redact_api_key(url);
    info!("Fetching data from URL: {shown_url}");

    let response = match client.get(url.clone()).headers(headers).send().await {
        Ok(response) => response,
        Err(e) => {
            let e = e.without_url();
            error!("Request failed for URL {}: {}", shown_url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(shown_url)
            } else if e.is_connect() {
                AppError::network_connection(shown_url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, shown_url);

        return Err(match status_code {
            404 => AppError::api_not_found(shown_url),
            429 => AppError::api_rate_limit(reason, shown_url),
            400..=499 => AppError::api_client_error(status_code, reason, shown_url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, shown_url),
            _ => AppError::api_server_error(status_code, reason, shown_url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", shown_url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, shown_url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", shown_url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    shown_url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), shown_url))
            }
        }
    }
}
