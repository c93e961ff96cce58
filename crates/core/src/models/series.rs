use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Time series resolution for equity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSeries {
    Intraday,
    Day,
    Week,
    Month,
}

impl StockSeries {
    /// Alpha Vantage `function` for this series. Intraday data has no
    /// adjusted variant, so `adjusted` only affects day/week/month.
    pub fn function(self, adjusted: bool) -> &'static str {
        match (self, adjusted) {
            (StockSeries::Intraday, _) => "TIME_SERIES_INTRADAY",
            (StockSeries::Day, false) => "TIME_SERIES_DAILY",
            (StockSeries::Day, true) => "TIME_SERIES_DAILY_ADJUSTED",
            (StockSeries::Week, false) => "TIME_SERIES_WEEKLY",
            (StockSeries::Week, true) => "TIME_SERIES_WEEKLY_ADJUSTED",
            (StockSeries::Month, false) => "TIME_SERIES_MONTHLY",
            (StockSeries::Month, true) => "TIME_SERIES_MONTHLY_ADJUSTED",
        }
    }
}

impl FromStr for StockSeries {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intraday" => Ok(StockSeries::Intraday),
            "day" | "daily" => Ok(StockSeries::Day),
            "week" | "weekly" => Ok(StockSeries::Week),
            "month" | "monthly" => Ok(StockSeries::Month),
            _ => Err(CoreError::UnsupportedParameter {
                kind: "Time series",
                value: s.to_string(),
            }),
        }
    }
}

/// Foreign exchange series. `Rate` is the realtime exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FxSeries {
    Rate,
    Intraday,
    Day,
    Week,
    Month,
}

impl FxSeries {
    pub fn function(self) -> &'static str {
        match self {
            FxSeries::Rate => "CURRENCY_EXCHANGE_RATE",
            FxSeries::Intraday => "FX_INTRADAY",
            FxSeries::Day => "FX_DAILY",
            FxSeries::Week => "FX_WEEKLY",
            FxSeries::Month => "FX_MONTHLY",
        }
    }
}

impl FromStr for FxSeries {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rate" => Ok(FxSeries::Rate),
            "intraday" => Ok(FxSeries::Intraday),
            "day" | "daily" => Ok(FxSeries::Day),
            "week" | "weekly" => Ok(FxSeries::Week),
            "month" | "monthly" => Ok(FxSeries::Month),
            _ => Err(CoreError::UnsupportedParameter {
                kind: "FX time series",
                value: s.to_string(),
            }),
        }
    }
}

/// Digital currency series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoSeries {
    Intraday,
    Day,
    Week,
    Month,
}

impl CryptoSeries {
    pub fn function(self) -> &'static str {
        match self {
            CryptoSeries::Intraday => "DIGITAL_CURRENCY_INTRADAY",
            CryptoSeries::Day => "DIGITAL_CURRENCY_DAILY",
            CryptoSeries::Week => "DIGITAL_CURRENCY_WEEKLY",
            CryptoSeries::Month => "DIGITAL_CURRENCY_MONTHLY",
        }
    }
}

impl FromStr for CryptoSeries {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intraday" => Ok(CryptoSeries::Intraday),
            "day" | "daily" => Ok(CryptoSeries::Day),
            "week" | "weekly" => Ok(CryptoSeries::Week),
            "month" | "monthly" => Ok(CryptoSeries::Month),
            _ => Err(CoreError::UnsupportedParameter {
                kind: "Crypto time series",
                value: s.to_string(),
            }),
        }
    }
}

/// Bar width for intraday series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::OneMinute => "1min",
            Interval::FiveMinutes => "5min",
            Interval::FifteenMinutes => "15min",
            Interval::ThirtyMinutes => "30min",
            Interval::SixtyMinutes => "60min",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1min" => Ok(Interval::OneMinute),
            "5min" => Ok(Interval::FiveMinutes),
            "15min" => Ok(Interval::FifteenMinutes),
            "30min" => Ok(Interval::ThirtyMinutes),
            "60min" => Ok(Interval::SixtyMinutes),
            _ => Err(CoreError::UnsupportedParameter {
                kind: "Interval",
                value: s.to_string(),
            }),
        }
    }
}

/// Response encoding requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Json,
    Csv,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Json => "json",
            DataType::Csv => "csv",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DataType::Json),
            "csv" => Ok(DataType::Csv),
            _ => Err(CoreError::UnsupportedParameter {
                kind: "Data",
                value: s.to_string(),
            }),
        }
    }
}
