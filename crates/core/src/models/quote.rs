use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A snapshot of market data for one symbol at a point in time.
///
/// Field names follow the IEX quote payload (`latestPrice`, `open`, ...),
/// so the IEX response deserializes straight into this type. Other
/// providers fill in whatever subset they have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol, uppercased
    #[serde(default)]
    pub symbol: String,

    #[serde(default)]
    pub company_name: Option<String>,

    #[serde(default)]
    pub sector: Option<String>,

    #[serde(default)]
    pub primary_exchange: Option<String>,

    /// Last traded price
    pub latest_price: f64,

    /// Price at the start of the current trading day
    #[serde(rename = "open", default)]
    pub open_price: Option<f64>,

    /// Previous official close
    #[serde(rename = "close", default)]
    pub close_price: Option<f64>,

    #[serde(default)]
    pub latest_volume: Option<u64>,
}

impl Quote {
    /// A quote with only the two prices the valuation model needs.
    pub fn new(symbol: impl Into<String>, latest_price: f64, open_price: f64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            company_name: None,
            sector: None,
            primary_exchange: None,
            latest_price,
            open_price: Some(open_price),
            close_price: None,
            latest_volume: None,
        }
    }

    /// The day's opening price, or `QuoteUnavailable` when the upstream
    /// snapshot did not carry one (pre-market, halted symbols).
    pub fn opening_price(&self) -> Result<f64, CoreError> {
        self.open_price
            .ok_or_else(|| CoreError::quote_unavailable(&self.symbol, "quote has no opening price"))
    }
}

/// Basic descriptive information about a listed company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub latest_price: f64,
    pub primary_exchange: Option<String>,
}

impl From<Quote> for CompanyInfo {
    fn from(quote: Quote) -> Self {
        Self {
            company_name: quote.company_name,
            sector: quote.sector,
            latest_price: quote.latest_price,
            primary_exchange: quote.primary_exchange,
        }
    }
}
