use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::{CompanyInfo, Quote};

/// Source of market quotes used by the valuation model.
///
/// Each upstream (IEX, Alpha Vantage, Yahoo Finance) implements this
/// trait; lots, holdings and portfolios only ever see `&dyn QuoteService`.
/// Implementations must not cache: every call reflects the upstream at
/// the time of the call.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteService: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one quote snapshot for `symbol`.
    ///
    /// Fails with `CoreError::QuoteUnavailable` on a non-success status,
    /// a transport failure or timeout, or a payload that does not decode.
    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError>;

    /// Latest traded price for `symbol`.
    async fn current_price(&self, symbol: &str) -> Result<f64, CoreError> {
        Ok(self.quote(symbol).await?.latest_price)
    }

    /// Quotes for several symbols, one request each, in input order.
    async fn quotes(&self, symbols: &[&str]) -> Result<Vec<(String, Quote)>, CoreError> {
        let mut out = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let quote = self.quote(symbol).await?;
            out.push((symbol.to_uppercase(), quote));
        }
        Ok(out)
    }

    /// Company name, sector, price and exchange from a single quote.
    async fn info(&self, symbol: &str) -> Result<CompanyInfo, CoreError> {
        Ok(self.quote(symbol).await?.into())
    }
}
