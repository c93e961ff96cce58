use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::quote::Quote;
use crate::models::settings::DEFAULT_TIMEOUT_SECS;
use super::traits::QuoteService;

/// Yahoo Finance as a quote service.
///
/// - **Free**: No API key required.
/// - **Coverage**: Global equities, ETFs, indices, mutual funds.
///
/// Uses the `yahoo_finance_api` crate. The quote is the most recent daily
/// bar: its close is the latest price and its open is the day's open.
///
/// **Note**: Not WASM-compatible (uses native reqwest/tokio).
pub struct YahooQuoteService {
    connector: yahoo_finance_api::YahooConnector,
    timeout: Duration,
}

impl YahooQuoteService {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Connector whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to create connector: {e}"),
            })?;
        Ok(Self { connector, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl QuoteService for YahooQuoteService {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        debug!(symbol = %symbol, "requesting Yahoo Finance daily bar");

        let resp = self
            .connector
            .get_latest_quotes(&symbol, "1d")
            .await
            .map_err(|e| {
                warn!(symbol = %symbol, "Yahoo Finance request failed");
                CoreError::quote_unavailable(&symbol, format!("failed to fetch latest quote: {e}"))
            })?;

        let bar = resp
            .last_quote()
            .map_err(|e| CoreError::quote_unavailable(&symbol, format!("no quote data: {e}")))?;

        Ok(Quote {
            symbol,
            company_name: None,
            sector: None,
            primary_exchange: None,
            latest_price: bar.close,
            open_price: Some(bar.open),
            close_price: None,
            latest_volume: Some(bar.volume),
        })
    }
}
