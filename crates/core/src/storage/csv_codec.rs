use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::lot::DATE_FORMAT;
use crate::models::portfolio::Portfolio;

/// Header row of an exported portfolio.
pub const HEADER: [&str; 4] = ["holding_symbol", "lot_date", "lot_cost_basis", "lot_shares"];

/// One lot per CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRow {
    pub holding_symbol: String,
    pub lot_date: String,
    pub lot_cost_basis: f64,
    pub lot_shares: f64,
}

/// Rows for every lot, holdings in portfolio order. Holdings without lots
/// produce no rows.
pub fn to_rows(portfolio: &Portfolio) -> Vec<LotRow> {
    portfolio
        .iter()
        .flat_map(|holding| {
            holding.iter().map(move |lot| LotRow {
                holding_symbol: holding.symbol().to_string(),
                lot_date: lot.purchase_date().format(DATE_FORMAT).to_string(),
                lot_cost_basis: lot.cost_basis(),
                lot_shares: lot.shares(),
            })
        })
        .collect()
}

/// CSV text with a header row, even for an empty portfolio.
pub fn write(portfolio: &Portfolio) -> Result<String, CoreError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in to_rows(portfolio) {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Serialization(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Parse rows. Whitespace around headers and fields is ignored.
pub fn read(data: &str) -> Result<Vec<LotRow>, CoreError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(data.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize::<LotRow>() {
        rows.push(row?);
    }
    Ok(rows)
}
