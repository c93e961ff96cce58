use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::quote::Quote;
use crate::models::series::{CryptoSeries, DataType, FxSeries, Interval, StockSeries};
use crate::models::settings::DEFAULT_TIMEOUT_SECS;
use super::build_client;
use super::traits::QuoteService;

const BASE_URL: &str = "https://www.alphavantage.co";
const PROVIDER: &str = "Alpha Vantage";

/// Query parameters for one Alpha Vantage call, in request order.
type Params = Vec<(&'static str, String)>;

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "02. open")]
    open: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
}

/// Alpha Vantage `GLOBAL_QUOTE` as a quote service.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key (settings key "alphavantage").
///
/// An empty "Global Quote" block usually means the daily limit was hit.
pub struct AlphaVantageQuoteService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageQuoteService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }
}

fn parse_price(symbol: &str, field: &str, raw: Option<String>) -> Result<Option<f64>, CoreError> {
    raw.map(|s| {
        s.trim().parse::<f64>().map_err(|e| {
            CoreError::quote_unavailable(symbol, format!("invalid {field} {s:?}: {e}"))
        })
    })
    .transpose()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteService for AlphaVantageQuoteService {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        debug!(symbol = %symbol, "requesting Alpha Vantage global quote");

        let resp = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CoreError::quote_unavailable(&symbol, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(symbol = %symbol, status = status.as_u16(), "Alpha Vantage returned an error status");
            return Err(CoreError::quote_unavailable(
                &symbol,
                format!("API call failed with status code {}: {}", status.as_u16(), body.trim()),
            ));
        }

        let parsed: GlobalQuoteResponse = resp.json().await.map_err(|e| {
            CoreError::quote_unavailable(&symbol, format!("malformed quote payload: {e}"))
        })?;

        let quote = parsed.global_quote.ok_or_else(|| {
            CoreError::quote_unavailable(&symbol, "no quote data, API limit may be exceeded")
        })?;

        let latest_price = parse_price(&symbol, "price", quote.price)?.ok_or_else(|| {
            CoreError::quote_unavailable(&symbol, "no quote data, API limit may be exceeded")
        })?;

        Ok(Quote {
            symbol: quote.symbol.map(|s| s.to_uppercase()).unwrap_or_else(|| symbol.clone()),
            company_name: None,
            sector: None,
            primary_exchange: None,
            latest_price,
            open_price: parse_price(&symbol, "open", quote.open)?,
            close_price: parse_price(&symbol, "previous close", quote.previous_close)?,
            latest_volume: quote.volume.and_then(|v| v.trim().parse().ok()),
        })
    }
}

// ── Historical data ─────────────────────────────────────────────────

/// Options for `HistoricalData::stock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockOptions {
    /// Adjusted closes (day/week/month only).
    pub adjusted: bool,
    pub datatype: DataType,
    /// Intraday only.
    pub interval: Interval,
    /// Intraday only: latest 100 points instead of the full series.
    pub compact: bool,
}

/// Options for `HistoricalData::fx_rate` (ignored for `FxSeries::Rate`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxOptions {
    pub datatype: DataType,
    /// Intraday only.
    pub interval: Interval,
    pub compact: bool,
}

fn output_size(compact: bool) -> String {
    let size = if compact { "compact" } else { "full" };
    size.to_string()
}

/// Client for Alpha Vantage time series: stocks, FX, crypto, technical
/// indicators and sector performance.
///
/// Responses are returned as decoded JSON (or, for `DataType::Csv`, the
/// raw CSV text inside `Value::String`); interpreting them is up to the
/// caller.
pub struct HistoricalData {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HistoricalData {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    /// `{base}/query?k=v&...&apikey=...` for the given parameters.
    pub fn request_url(&self, params: &[(&str, String)]) -> Result<Url, CoreError> {
        let mut pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        pairs.push(("apikey", self.api_key.as_str()));
        Url::parse_with_params(&format!("{}/query", self.base_url), &pairs)
            .map_err(|e| CoreError::Config(format!("invalid Alpha Vantage base URL: {e}")))
    }

    /// Time series for one stock.
    pub async fn stock(
        &self,
        symbol: &str,
        series: StockSeries,
        options: StockOptions,
    ) -> Result<Value, CoreError> {
        let mut params: Params = vec![
            ("function", series.function(options.adjusted).to_string()),
            ("symbol", symbol.to_uppercase()),
        ];
        if series == StockSeries::Intraday {
            params.push(("outputsize", output_size(options.compact)));
            params.push(("interval", options.interval.to_string()));
        }
        params.push(("datatype", options.datatype.to_string()));
        self.call_api(params, options.datatype).await
    }

    /// Exchange rate (`FxSeries::Rate`) or FX time series between two
    /// currencies.
    pub async fn fx_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        series: FxSeries,
        options: FxOptions,
    ) -> Result<Value, CoreError> {
        let mut params: Params = vec![("function", series.function().to_string())];
        if series == FxSeries::Rate {
            params.push(("from_currency", from_currency.to_uppercase()));
            params.push(("to_currency", to_currency.to_uppercase()));
            return self.call_api(params, DataType::Json).await;
        }

        params.push(("from_symbol", from_currency.to_uppercase()));
        params.push(("to_symbol", to_currency.to_uppercase()));
        params.push(("outputsize", output_size(options.compact)));
        params.push(("datatype", options.datatype.to_string()));
        if series == FxSeries::Intraday {
            params.push(("interval", options.interval.to_string()));
        }
        self.call_api(params, options.datatype).await
    }

    /// Digital currency time series priced in `market` (e.g. "USD").
    pub async fn crypto_rate(
        &self,
        symbol: &str,
        series: CryptoSeries,
        market: &str,
    ) -> Result<Value, CoreError> {
        let params: Params = vec![
            ("function", series.function().to_string()),
            ("symbol", symbol.to_uppercase()),
            ("market", market.to_uppercase()),
        ];
        self.call_api(params, DataType::Json).await
    }

    /// A technical indicator (`SMA`, `EMA`, `RSI`, ...). See
    /// <https://www.alphavantage.co/documentation/#technical-indicators>.
    /// `interval` here is the indicator interval ("daily", "weekly", "15min").
    pub async fn indicators(
        &self,
        symbol: &str,
        indicator: &str,
        series_type: &str,
        time_period: u32,
        interval: &str,
        datatype: DataType,
    ) -> Result<Value, CoreError> {
        let params: Params = vec![
            ("function", indicator.to_uppercase()),
            ("symbol", symbol.to_uppercase()),
            ("series_type", series_type.to_string()),
            ("time_period", time_period.to_string()),
            ("interval", interval.to_string()),
            ("datatype", datatype.to_string()),
        ];
        self.call_api(params, datatype).await
    }

    /// Realtime and historical sector performance.
    pub async fn sector(&self) -> Result<Value, CoreError> {
        self.call_api(vec![("function", "SECTOR".to_string())], DataType::Json)
            .await
    }

    /// Latest quotes for several stocks in one request.
    pub async fn batch_quotes(
        &self,
        symbols: &[&str],
        datatype: DataType,
    ) -> Result<Value, CoreError> {
        let joined = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        let params: Params = vec![
            ("function", "BATCH_STOCK_QUOTES".to_string()),
            ("datatype", datatype.to_string()),
            ("symbols", joined),
        ];
        self.call_api(params, datatype).await
    }

    async fn call_api(&self, params: Params, datatype: DataType) -> Result<Value, CoreError> {
        let function = params
            .first()
            .map(|(_, f)| f.clone())
            .unwrap_or_default();
        let url = self.request_url(&params)?;
        debug!(function = %function, "calling Alpha Vantage");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!(function = %function, status = status.as_u16(), "Alpha Vantage call failed");
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("API call failed with status code {}: {}", status.as_u16(), body.trim()),
            });
        }

        if datatype == DataType::Csv {
            return Ok(Value::String(body));
        }

        let decoded: Value = serde_json::from_str(&body).map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse {function} response: {e}"),
        })?;

        if let Some(message) = decoded.get("Error Message") {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: message.as_str().unwrap_or_default().to_string(),
            });
        }

        Ok(decoded)
    }
}
