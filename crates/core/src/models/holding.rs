use serde::Serialize;
use std::ops::Index;
use tracing::debug;

use crate::errors::CoreError;
use crate::providers::traits::QuoteService;

use super::gains::Gains;
use super::lot::Lot;
use super::round2;

/// All lots owned in one ticker symbol.
///
/// Lots are kept sorted by purchase date (oldest first; lots bought on the
/// same day keep their insertion order). `total_shares` and
/// `avg_cost_basis` are recomputed from the full lot list after every
/// insertion or removal, so they always match the lots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    symbol: String,
    lots: Vec<Lot>,
    total_shares: f64,
    avg_cost_basis: f64,
}

impl Holding {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            lots: Vec::new(),
            total_shares: 0.0,
            avg_cost_basis: 0.0,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn get(&self, index: usize) -> Option<&Lot> {
        self.lots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lot> {
        self.lots.iter()
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn total_shares(&self) -> f64 {
        self.total_shares
    }

    /// Share-weighted average price paid, 0 when there are no shares.
    pub fn avg_cost_basis(&self) -> f64 {
        self.avg_cost_basis
    }

    /// Total amount paid for all current lots.
    pub fn cost_total(&self) -> f64 {
        self.total_shares * self.avg_cost_basis
    }

    /// Record a purchase. Fails if the date is not `YYYY-MM-DD` or the
    /// quantities are invalid; the holding is unchanged on failure.
    pub fn add_lot(&mut self, date: &str, cost_basis: f64, shares: f64) -> Result<(), CoreError> {
        let lot = Lot::new(&self.symbol, date, cost_basis, shares)?;
        self.insert_sorted(lot);
        self.recompute();
        Ok(())
    }

    /// Record several purchases in order.
    ///
    /// Not transactional: if an entry fails, the entries before it stay
    /// applied and the error is returned.
    pub fn add_lots<'a, I>(&mut self, entries: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = (&'a str, f64, f64)>,
    {
        for (date, cost_basis, shares) in entries {
            self.add_lot(date, cost_basis, shares)?;
        }
        Ok(())
    }

    /// Remove the lot at `index` and return it.
    pub fn remove(&mut self, index: usize) -> Result<Lot, CoreError> {
        if index >= self.lots.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.lots.len(),
            });
        }
        let lot = self.lots.remove(index);
        self.recompute();
        Ok(lot)
    }

    /// Current value of the whole position. An empty holding is worth 0
    /// and makes no quote request.
    pub async fn get_value(&self, quotes: &dyn QuoteService) -> Result<f64, CoreError> {
        if self.lots.is_empty() {
            return Ok(0.0);
        }
        let price = self.get_price(quotes).await?;
        Ok(round2(self.total_shares * price))
    }

    /// Latest price for this holding's symbol.
    pub async fn get_price(&self, quotes: &dyn QuoteService) -> Result<f64, CoreError> {
        debug!(symbol = %self.symbol, provider = quotes.name(), "fetching holding price");
        quotes.current_price(&self.symbol).await
    }

    /// Day and total gains across all lots, from one quote snapshot.
    /// An empty holding has zero gains and makes no quote request.
    pub async fn get_gains(&self, quotes: &dyn QuoteService) -> Result<Gains, CoreError> {
        if self.lots.is_empty() {
            return Ok(Gains::default());
        }
        debug!(symbol = %self.symbol, provider = quotes.name(), "fetching holding quote");
        let quote = quotes.quote(&self.symbol).await?;
        let open = quote.opening_price()?;

        let value = round2(self.total_shares * quote.latest_price);
        Ok(Gains::new(
            (quote.latest_price - open) * self.total_shares,
            value - self.cost_total(),
        ))
    }

    /// Insert after every lot dated on or before `lot`, so equal dates
    /// keep insertion order.
    fn insert_sorted(&mut self, lot: Lot) {
        let pos = self
            .lots
            .partition_point(|l| l.purchase_date() <= lot.purchase_date());
        self.lots.insert(pos, lot);
    }

    fn recompute(&mut self) {
        let total_shares: f64 = self.lots.iter().map(Lot::shares).sum();
        let total_cost: f64 = self.lots.iter().map(Lot::initial_value).sum();

        self.total_shares = total_shares;
        self.avg_cost_basis = if total_shares > 0.0 {
            total_cost / total_shares
        } else {
            0.0
        };
        debug!(
            symbol = %self.symbol,
            lots = self.lots.len(),
            total_shares = self.total_shares,
            avg_cost_basis = self.avg_cost_basis,
            "recomputed holding aggregates"
        );
    }
}

impl Index<usize> for Holding {
    type Output = Lot;

    fn index(&self, index: usize) -> &Lot {
        &self.lots[index]
    }
}

impl<'a> IntoIterator for &'a Holding {
    type Item = &'a Lot;
    type IntoIter = std::slice::Iter<'a, Lot>;

    fn into_iter(self) -> Self::IntoIter {
        self.lots.iter()
    }
}
