#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use tracing::info;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

use super::csv_codec;
use super::format::FileFormat;
use super::json_codec;

/// Counts reported by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Holdings that did not exist before the import
    pub holdings_added: usize,
    pub lots_added: usize,
}

/// High-level import/export: portfolio ⇄ JSON/CSV strings or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a portfolio in the given format.
    pub fn export(portfolio: &Portfolio, format: FileFormat) -> Result<String, CoreError> {
        let out = match format {
            FileFormat::Json => json_codec::write(portfolio)?,
            FileFormat::Csv => csv_codec::write(portfolio)?,
        };
        info!(format = %format, holdings = portfolio.len(), "exported portfolio");
        Ok(out)
    }

    /// Load holdings and lots into `portfolio`.
    ///
    /// Additive: nothing already in the portfolio is cleared, so importing
    /// the same data twice duplicates its lots. Lots go through
    /// `Holding::add_lot`; on the first invalid entry the import stops with
    /// that error and everything before it stays applied.
    pub fn import(
        portfolio: &mut Portfolio,
        data: &str,
        format: FileFormat,
    ) -> Result<ImportSummary, CoreError> {
        let mut summary = ImportSummary::default();

        match format {
            FileFormat::Json => {
                for record in json_codec::read(data)? {
                    let holding = Self::holding_for(portfolio, &record.symbol, &mut summary)?;
                    for lot in &record.lots {
                        holding.add_lot(&lot.date, lot.cost_basis, lot.shares)?;
                        summary.lots_added += 1;
                    }
                }
            }
            FileFormat::Csv => {
                for row in csv_codec::read(data)? {
                    let holding = Self::holding_for(portfolio, &row.holding_symbol, &mut summary)?;
                    holding.add_lot(&row.lot_date, row.lot_cost_basis, row.lot_shares)?;
                    summary.lots_added += 1;
                }
            }
        }

        info!(
            format = %format,
            holdings_added = summary.holdings_added,
            lots_added = summary.lots_added,
            "imported portfolio"
        );
        Ok(summary)
    }

    /// Export to `path`; the format comes from the file extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_to_file(portfolio: &Portfolio, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let data = Self::export(portfolio, format)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Import from `path`; the format comes from the file extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn import_from_file(
        portfolio: &mut Portfolio,
        path: impl AsRef<Path>,
    ) -> Result<ImportSummary, CoreError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let data = std::fs::read_to_string(path)?;
        Self::import(portfolio, &data, format)
    }

    /// The holding an imported entry belongs to, created on first use.
    /// A blank symbol is rejected before anything is added.
    fn holding_for<'a>(
        portfolio: &'a mut Portfolio,
        symbol: &str,
        summary: &mut ImportSummary,
    ) -> Result<&'a mut Holding, CoreError> {
        if symbol.trim().is_empty() {
            return Err(CoreError::InvalidSymbol(symbol.to_string()));
        }
        if !portfolio.contains(symbol) {
            summary.holdings_added += 1;
            return Ok(portfolio.add_holding(symbol));
        }
        portfolio.holding_mut(symbol)
    }
}
