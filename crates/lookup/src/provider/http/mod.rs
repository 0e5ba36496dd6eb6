//! HTTP implementation of the lookup provider.
//!
//! Talks to the dashboard's own REST backend:
//! - Company-name lookup via /api/v1/lookup/name
//! - Mutual fund catalog search via /api/v1/funds/search
//!
//! The backend does the ranking; this client only decodes and maps errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::LookupError;
use crate::models::{Exchange, FundMatch, LookupResult, PlanFilter, TypeFilter};
use crate::provider::LookupProvider;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /api/v1/lookup/name
#[derive(Debug, Deserialize)]
struct NameLookupResponse {
    /// Company name, absent when the symbol is unknown
    name: Option<String>,
}

/// Response from /api/v1/funds/search
#[derive(Debug, Deserialize)]
struct FundSearchResponse {
    results: Vec<FundSearchItem>,
}

/// Individual fund search result item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FundSearchItem {
    display_name: String,
    code: String,
    plan: String,
    scheme_type: String,
    reference_price: Decimal,
}

/// Error response body from the backend
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

// ============================================================================
// HttpLookupProvider
// ============================================================================

/// Lookup provider backed by the dashboard REST API.
pub struct HttpLookupProvider {
    client: Client,
    base_url: String,
}

impl HttpLookupProvider {
    /// Create a provider against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Make a GET request against the backend.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, LookupError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url);
        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("lookup request: {} with {} params", endpoint, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Network(e)
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Prefer the backend's own error message when the body carries one.
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(message) = error_resp.error {
                    return Err(LookupError::Endpoint {
                        status: status.as_u16(),
                        message,
                    });
                }
            }

            return Err(LookupError::Endpoint {
                status: status.as_u16(),
                message: body,
            });
        }

        response.text().await.map_err(LookupError::Network)
    }
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
    async fn lookup_name(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<LookupResult, LookupError> {
        let params = [("symbol", symbol), ("exchange", exchange.as_str())];
        let text = self.fetch("/api/v1/lookup/name", &params).await?;

        let response: NameLookupResponse = serde_json::from_str(&text)
            .map_err(|e| LookupError::Decode(format!("name lookup response: {}", e)))?;

        Ok(LookupResult {
            name: response.name,
        })
    }

    async fn search_catalog(
        &self,
        query: &str,
        plan: PlanFilter,
        scheme_type: TypeFilter,
    ) -> Result<Vec<FundMatch>, LookupError> {
        let params = [
            ("q", query),
            ("plan", plan.as_str()),
            ("type", scheme_type.as_str()),
        ];
        let text = self.fetch("/api/v1/funds/search", &params).await?;

        let response: FundSearchResponse = serde_json::from_str(&text)
            .map_err(|e| LookupError::Decode(format!("fund search response: {}", e)))?;

        Ok(response
            .results
            .into_iter()
            .map(|item| FundMatch {
                display_name: item.display_name,
                code: item.code,
                plan: item.plan,
                scheme_type: item.scheme_type,
                reference_price: item.reference_price,
            })
            .collect())
    }
}
