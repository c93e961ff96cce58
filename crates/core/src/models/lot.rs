use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::errors::CoreError;
use crate::providers::traits::QuoteService;

use super::gains::Gains;
use super::round2;

/// Date format accepted for lot purchase dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single purchase of shares. Immutable once created.
///
/// Lots order by `purchase_date` only: two different lots bought on the
/// same day are unordered (`partial_cmp` returns `None`), which keeps
/// `PartialOrd` consistent with the field-wise `PartialEq`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lot {
    symbol: String,
    purchase_date: NaiveDate,
    cost_basis: f64,
    shares: f64,
}

impl Lot {
    /// Create a lot from a `YYYY-MM-DD` date string.
    pub fn new(
        symbol: &str,
        date: &str,
        cost_basis: f64,
        shares: f64,
    ) -> Result<Self, CoreError> {
        let purchase_date = parse_date(date)?;
        Self::with_date(symbol, purchase_date, cost_basis, shares)
    }

    /// Create a lot from an already-parsed date.
    pub fn with_date(
        symbol: &str,
        purchase_date: NaiveDate,
        cost_basis: f64,
        shares: f64,
    ) -> Result<Self, CoreError> {
        if symbol.trim().is_empty() {
            return Err(CoreError::InvalidSymbol(symbol.to_string()));
        }
        if !shares.is_finite() || shares <= 0.0 {
            return Err(CoreError::InvalidQuantity(format!(
                "shares must be positive, got {shares}"
            )));
        }
        if !cost_basis.is_finite() || cost_basis < 0.0 {
            return Err(CoreError::InvalidQuantity(format!(
                "cost basis must be non-negative, got {cost_basis}"
            )));
        }
        Ok(Self {
            symbol: symbol.trim().to_uppercase(),
            purchase_date,
            cost_basis,
            shares,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Price paid per share.
    pub fn cost_basis(&self) -> f64 {
        self.cost_basis
    }

    pub fn shares(&self) -> f64 {
        self.shares
    }

    /// What the lot cost when it was bought.
    pub fn initial_value(&self) -> f64 {
        self.cost_basis * self.shares
    }

    /// Current value of the lot: one price lookup, not cached.
    pub async fn market_value(&self, quotes: &dyn QuoteService) -> Result<f64, CoreError> {
        debug!(symbol = %self.symbol, provider = quotes.name(), "fetching price for lot");
        let price = quotes.current_price(&self.symbol).await?;
        Ok(round2(self.shares * price))
    }

    /// Change in value since today's open.
    pub async fn day_gains(&self, quotes: &dyn QuoteService) -> Result<f64, CoreError> {
        // Both prices come from the same snapshot.
        let quote = quotes.quote(&self.symbol).await?;
        let open = quote.opening_price()?;
        Ok(round2((quote.latest_price - open) * self.shares))
    }

    /// Change in value since purchase.
    pub async fn total_gains(&self, quotes: &dyn QuoteService) -> Result<f64, CoreError> {
        let value = self.market_value(quotes).await?;
        Ok(round2(value - self.initial_value()))
    }

    /// Day and total gains derived from a single quote.
    pub async fn gains(&self, quotes: &dyn QuoteService) -> Result<Gains, CoreError> {
        let quote = quotes.quote(&self.symbol).await?;
        let open = quote.opening_price()?;
        Ok(Gains::new(
            (quote.latest_price - open) * self.shares,
            round2(quote.latest_price * self.shares) - self.initial_value(),
        ))
    }
}

impl PartialOrd for Lot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.purchase_date.cmp(&other.purchase_date) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

/// Parse a `YYYY-MM-DD` lot date.
pub fn parse_date(date: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDateFormat(date.to_string()))
}
