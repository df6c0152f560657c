//! Catalog retrieval with an ordered fallback chain
//!
//! The published sheet sits behind CORS-unfriendly hosting, so the
//! original deployment reads it through public proxies. The chain is
//! explicit: each proxy is tried in order, then the direct URL; the
//! first successful non-empty body wins. Every failure is logged and
//! the chain moves on; only total failure is an error.

use crate::utils::percent_encode;
use shared::error::{AppError, AppResult, ErrorCode};
use std::time::Duration;

/// Sequential catalog supplier chain
pub struct CatalogFetcher {
    /// Fully-formed URLs in priority order
    endpoints: Vec<String>,
    client: reqwest::Client,
}

impl CatalogFetcher {
    /// Build the chain for a direct catalog URL and proxy prefixes
    ///
    /// Proxies receive the percent-encoded direct URL appended to
    /// their prefix; the direct URL itself is the last resort. A
    /// cache-busting timestamp is appended so intermediaries do not
    /// serve a stale sheet.
    pub fn new(catalog_url: &str, proxies: &[String], timeout_ms: u64) -> Self {
        let busted = format!(
            "{}{}_={}",
            catalog_url,
            if catalog_url.contains('?') { "&" } else { "?" },
            chrono::Utc::now().timestamp_millis()
        );

        let mut endpoints: Vec<String> = proxies
            .iter()
            .map(|proxy| format!("{}{}", proxy, percent_encode(&busted)))
            .collect();
        endpoints.push(busted);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Self { endpoints, client }
    }

    /// Fetch the catalog body through the chain
    ///
    /// Returns the first non-empty response body. All-source failure
    /// is terminal: the caller keeps an empty catalog (no partial
    /// catalog is ever used).
    pub async fn fetch(&self) -> AppResult<String> {
        for endpoint in &self.endpoints {
            match self.try_endpoint(endpoint).await {
                Ok(body) => {
                    tracing::info!(endpoint, "Fetched menu catalog");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(endpoint, error = %e, "Catalog source failed, trying next");
                }
            }
        }
        Err(AppError::with_message(
            ErrorCode::CatalogUnavailable,
            "All catalog sources failed",
        ))
    }

    async fn try_endpoint(&self, endpoint: &str) -> AppResult<String> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| AppError::with_message(ErrorCode::HttpClientError, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::with_message(
                ErrorCode::HttpClientError,
                format!("HTTP status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::with_message(ErrorCode::HttpClientError, e.to_string()))?;
        if body.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::HttpClientError,
                "Empty response body",
            ));
        }
        Ok(body)
    }

    /// The resolved endpoint order (proxies first, direct last)
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }
}
