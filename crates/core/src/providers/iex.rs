use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::quote::Quote;
use crate::models::settings::DEFAULT_TIMEOUT_SECS;
use super::build_client;
use super::traits::QuoteService;

const BASE_URL: &str = "https://api.iextrading.com/1.0";

/// IEX-style quote endpoint: `GET {base}/stock/{symbol}/quote`.
///
/// - **Requires**: nothing on the legacy endpoint; hosted mirrors take a
///   `token` query parameter.
/// - **Data**: latest/open/close price, company name, sector, exchange.
///
/// The response body maps directly onto `Quote`.
pub struct IexQuoteService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl IexQuoteService {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            base_url: BASE_URL.to_string(),
            token,
        }
    }

    /// Point at a different host (trailing slashes are ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteService for IexQuoteService {
    fn name(&self) -> &str {
        "IEX"
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        let url = format!("{}/stock/{}/quote", self.base_url, symbol);
        debug!(symbol = %symbol, "requesting IEX quote");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }

        let resp = request.send().await.map_err(|e| {
            warn!(symbol = %symbol, "IEX request failed");
            CoreError::quote_unavailable(&symbol, e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(symbol = %symbol, status = status.as_u16(), "IEX returned an error status");
            return Err(CoreError::quote_unavailable(
                &symbol,
                format!("API call failed with status code {}: {}", status.as_u16(), body.trim()),
            ));
        }

        let mut quote: Quote = resp.json().await.map_err(|e| {
            CoreError::quote_unavailable(&symbol, format!("malformed quote payload: {e}"))
        })?;
        quote.symbol = if quote.symbol.is_empty() {
            symbol
        } else {
            quote.symbol.to_uppercase()
        };
        Ok(quote)
    }
}
