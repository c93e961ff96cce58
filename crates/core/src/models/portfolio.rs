use serde::Serialize;
use std::ops::{Index, IndexMut};
use tracing::debug;

use crate::errors::CoreError;
use crate::providers::traits::QuoteService;

use super::gains::{Gains, PortfolioGains};
use super::holding::Holding;
use super::round2;

/// A set of holdings, one per symbol.
///
/// Symbols are matched case-insensitively everywhere (add, lookup,
/// remove). Holdings keep the order they were first added in, which is
/// the order used for iteration, price listings and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// A portfolio with one empty holding per symbol.
    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut portfolio = Self::new();
        portfolio.add_holdings(symbols);
        portfolio
    }

    /// Add an empty holding for `symbol` and return it.
    ///
    /// Re-adding a symbol that is already held replaces its holding with a
    /// fresh empty one: the old lots are dropped.
    pub fn add_holding(&mut self, symbol: &str) -> &mut Holding {
        let holding = Holding::new(symbol);
        let idx = match self.position(holding.symbol()) {
            Some(idx) => {
                debug!(symbol = %holding.symbol(), "replacing existing holding");
                self.holdings[idx] = holding;
                idx
            }
            None => {
                self.holdings.push(holding);
                self.holdings.len() - 1
            }
        };
        &mut self.holdings[idx]
    }

    pub fn add_holdings<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for symbol in symbols {
            self.add_holding(symbol.as_ref());
        }
    }

    /// Remove and return the holding for `symbol`.
    pub fn remove(&mut self, symbol: &str) -> Result<Holding, CoreError> {
        let idx = self
            .position(symbol)
            .ok_or_else(|| CoreError::UnknownSymbol(normalize(symbol)))?;
        Ok(self.holdings.remove(idx))
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.position(symbol).map(|idx| &self.holdings[idx])
    }

    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Holding> {
        self.position(symbol).map(move |idx| &mut self.holdings[idx])
    }

    /// Like `get`, but a missing symbol is an `UnknownSymbol` error.
    pub fn holding(&self, symbol: &str) -> Result<&Holding, CoreError> {
        self.get(symbol)
            .ok_or_else(|| CoreError::UnknownSymbol(normalize(symbol)))
    }

    /// Like `get_mut`, but a missing symbol is an `UnknownSymbol` error.
    pub fn holding_mut(&mut self, symbol: &str) -> Result<&mut Holding, CoreError> {
        let idx = self
            .position(symbol)
            .ok_or_else(|| CoreError::UnknownSymbol(normalize(symbol)))?;
        Ok(&mut self.holdings[idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.holdings.iter().map(Holding::symbol).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holding> {
        self.holdings.iter()
    }

    /// Number of distinct holdings.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Value of one holding, or of the whole portfolio when `symbol` is
    /// `None`. Each holding fetches its own price.
    pub async fn get_value(
        &self,
        quotes: &dyn QuoteService,
        symbol: Option<&str>,
    ) -> Result<f64, CoreError> {
        if let Some(symbol) = symbol {
            return self.holding(symbol)?.get_value(quotes).await;
        }

        let mut total = 0.0;
        for holding in &self.holdings {
            total += holding.get_value(quotes).await?;
        }
        Ok(round2(total))
    }

    /// Gains for one holding, or per-holding gains plus their sum when
    /// `symbol` is `None`. For a single symbol the report holds that one
    /// entry and `total` equals it.
    pub async fn get_gains(
        &self,
        quotes: &dyn QuoteService,
        symbol: Option<&str>,
    ) -> Result<PortfolioGains, CoreError> {
        if let Some(symbol) = symbol {
            let holding = self.holding(symbol)?;
            let gains = holding.get_gains(quotes).await?;
            return Ok(PortfolioGains {
                holdings: vec![(holding.symbol().to_string(), gains)],
                total: gains,
            });
        }

        let mut holdings = Vec::with_capacity(self.holdings.len());
        for holding in &self.holdings {
            let gains = holding.get_gains(quotes).await?;
            holdings.push((holding.symbol().to_string(), gains));
        }
        let total: Gains = holdings.iter().map(|(_, g)| *g).sum();
        Ok(PortfolioGains { holdings, total })
    }

    /// Latest price of every held symbol, one request per holding, in
    /// portfolio order. Empty holdings are priced too.
    pub async fn get_prices(
        &self,
        quotes: &dyn QuoteService,
    ) -> Result<Vec<(String, f64)>, CoreError> {
        let mut prices = Vec::with_capacity(self.holdings.len());
        for holding in &self.holdings {
            let price = holding.get_price(quotes).await?;
            prices.push((holding.symbol().to_string(), price));
        }
        Ok(prices)
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        let upper = normalize(symbol);
        self.holdings.iter().position(|h| h.symbol() == upper)
    }
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Panics if `symbol` is not held, like `HashMap`'s `Index`.
impl Index<&str> for Portfolio {
    type Output = Holding;

    fn index(&self, symbol: &str) -> &Holding {
        match self.get(symbol) {
            Some(holding) => holding,
            None => panic!("symbol {} not in holdings", normalize(symbol)),
        }
    }
}

impl IndexMut<&str> for Portfolio {
    fn index_mut(&mut self, symbol: &str) -> &mut Holding {
        match self.position(symbol) {
            Some(idx) => &mut self.holdings[idx],
            None => panic!("symbol {} not in holdings", normalize(symbol)),
        }
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Holding;
    type IntoIter = std::slice::Iter<'a, Holding>;

    fn into_iter(self) -> Self::IntoIter {
        self.holdings.iter()
    }
}
