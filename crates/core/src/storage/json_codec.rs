use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::lot::{Lot, DATE_FORMAT};
use crate::models::portfolio::Portfolio;

/// One holding as written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    pub symbol: String,
    #[serde(default)]
    pub lots: Vec<LotRecord>,
}

/// One lot as written to JSON. The date stays a string so that imports go
/// through the same `YYYY-MM-DD` validation as `Holding::add_lot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRecord {
    pub date: String,
    pub cost_basis: f64,
    pub shares: f64,
}

impl From<&Lot> for LotRecord {
    fn from(lot: &Lot) -> Self {
        Self {
            date: lot.purchase_date().format(DATE_FORMAT).to_string(),
            cost_basis: lot.cost_basis(),
            shares: lot.shares(),
        }
    }
}

/// Records for every holding, in portfolio order.
pub fn to_records(portfolio: &Portfolio) -> Vec<HoldingRecord> {
    portfolio
        .iter()
        .map(|holding| HoldingRecord {
            symbol: holding.symbol().to_string(),
            lots: holding.iter().map(LotRecord::from).collect(),
        })
        .collect()
}

/// Pretty-printed JSON array of holdings.
pub fn write(portfolio: &Portfolio) -> Result<String, CoreError> {
    serde_json::to_string_pretty(&to_records(portfolio))
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
}

pub fn read(data: &str) -> Result<Vec<HoldingRecord>, CoreError> {
    serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse portfolio JSON: {e}")))
}
