pub mod errors;
pub mod models;
pub mod providers;
pub mod storage;

use models::{gains::PortfolioGains, holding::Holding, portfolio::Portfolio, settings::Settings};
use providers::{registry::QuoteServiceRegistry, traits::QuoteService};
use storage::{
    format::FileFormat,
    manager::{ImportSummary, StorageManager},
};

use errors::CoreError;

/// Main entry point for the Stockify core library.
/// Holds the portfolio and the quote service used to value it.
#[must_use]
pub struct Stockify {
    portfolio: Portfolio,
    quotes: Box<dyn QuoteService>,
    /// Tracks whether any mutation has occurred since the last export.
    dirty: bool,
}

impl std::fmt::Debug for Stockify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stockify")
            .field("holdings", &self.portfolio.len())
            .field("quote_provider", &self.quotes.name())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Stockify {
    /// Empty portfolio valued through `quotes`.
    pub fn new(quotes: Box<dyn QuoteService>) -> Self {
        Self::with_portfolio(Portfolio::new(), quotes)
    }

    pub fn with_portfolio(portfolio: Portfolio, quotes: Box<dyn QuoteService>) -> Self {
        Self {
            portfolio,
            quotes,
            dirty: false,
        }
    }

    /// Empty portfolio valued through the providers `settings` enables.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Box::new(QuoteServiceRegistry::from_settings(settings)))
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Mutable access to the portfolio; marks it as changed.
    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        self.dirty = true;
        &mut self.portfolio
    }

    #[must_use]
    pub fn quote_service(&self) -> &dyn QuoteService {
        self.quotes.as_ref()
    }

    /// True if the portfolio changed since it was created or last exported.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Holdings & Lots ─────────────────────────────────────────────

    /// Add (or reset) the holding for `symbol`.
    pub fn add_holding(&mut self, symbol: &str) -> &mut Holding {
        self.dirty = true;
        self.portfolio.add_holding(symbol)
    }

    pub fn add_holdings<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dirty = true;
        self.portfolio.add_holdings(symbols);
    }

    /// Add a lot to an existing holding.
    pub fn add_lot(
        &mut self,
        symbol: &str,
        date: &str,
        cost_basis: f64,
        shares: f64,
    ) -> Result<(), CoreError> {
        self.portfolio
            .holding_mut(symbol)?
            .add_lot(date, cost_basis, shares)?;
        self.dirty = true;
        Ok(())
    }

    pub fn remove_holding(&mut self, symbol: &str) -> Result<Holding, CoreError> {
        let holding = self.portfolio.remove(symbol)?;
        self.dirty = true;
        Ok(holding)
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Value of one holding, or of the whole portfolio.
    pub async fn get_value(&self, symbol: Option<&str>) -> Result<f64, CoreError> {
        self.portfolio.get_value(self.quotes.as_ref(), symbol).await
    }

    /// Gains of one holding, or of every holding plus the total.
    pub async fn get_gains(&self, symbol: Option<&str>) -> Result<PortfolioGains, CoreError> {
        self.portfolio.get_gains(self.quotes.as_ref(), symbol).await
    }

    /// Latest price of every holding.
    pub async fn get_prices(&self) -> Result<Vec<(String, f64)>, CoreError> {
        self.portfolio.get_prices(self.quotes.as_ref()).await
    }

    // ── Import / Export ─────────────────────────────────────────────

    /// Serialize the portfolio; clears the unsaved-changes flag.
    pub fn export(&mut self, format: FileFormat) -> Result<String, CoreError> {
        let data = StorageManager::export(&self.portfolio, format)?;
        self.dirty = false;
        Ok(data)
    }

    /// Merge serialized holdings into the portfolio (see
    /// `StorageManager::import` for the additive semantics).
    pub fn import(&mut self, data: &str, format: FileFormat) -> Result<ImportSummary, CoreError> {
        let result = StorageManager::import(&mut self.portfolio, data, format);
        self.mark_import(&result);
        result
    }

    /// Export to a file (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_to_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        StorageManager::export_to_file(&self.portfolio, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Import from a file (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn import_from_file(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<ImportSummary, CoreError> {
        let result = StorageManager::import_from_file(&mut self.portfolio, path);
        self.mark_import(&result);
        result
    }

    fn mark_import(&mut self, result: &Result<ImportSummary, CoreError>) {
        match result {
            Ok(summary) if *summary == ImportSummary::default() => {}
            // A failed import may still have applied earlier entries.
            _ => self.dirty = true,
        }
    }
}
