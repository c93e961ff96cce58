// ═══════════════════════════════════════════════════════════════════
// Provider Tests — IEX, Alpha Vantage, HistoricalData, registry
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockify_core::errors::CoreError;
use stockify_core::models::quote::Quote;
use stockify_core::models::series::{CryptoSeries, DataType, FxSeries, Interval, StockSeries};
use stockify_core::models::settings::{ProviderKind, Settings};
use stockify_core::providers::alphavantage::{
    AlphaVantageQuoteService, FxOptions, HistoricalData, StockOptions,
};
use stockify_core::providers::iex::IexQuoteService;
use stockify_core::providers::registry::QuoteServiceRegistry;
use stockify_core::providers::traits::QuoteService;
use stockify_core::providers::yahoo_finance::YahooQuoteService;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════

/// Always answers with the same quote, tagged with its own name.
struct FixedQuotes {
    name: &'static str,
    price: f64,
}

#[async_trait]
impl QuoteService for FixedQuotes {
    fn name(&self) -> &str {
        self.name
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        Ok(Quote::new(symbol, self.price, self.price))
    }
}

fn iex_payload() -> serde_json::Value {
    json!({
        "symbol": "AAPL",
        "companyName": "Apple Inc.",
        "primaryExchange": "Nasdaq Global Select",
        "sector": "Technology",
        "open": 148.0,
        "close": 149.1,
        "latestPrice": 150.0,
        "latestVolume": 21_000_000
    })
}

// ═══════════════════════════════════════════════════════════════════
// IEX
// ═══════════════════════════════════════════════════════════════════

mod iex {
    use super::*;

    #[tokio::test]
    async fn quote_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/AAPL/quote"))
            .and(query_param_is_missing("token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(iex_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let iex = IexQuoteService::new(None).with_base_url(server.uri());
        let quote = iex.quote("aapl").await.unwrap();

        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.latest_price, 150.0);
        assert_eq!(quote.open_price, Some(148.0));
        assert_eq!(quote.company_name.as_deref(), Some("Apple Inc."));
        assert_eq!(quote.latest_volume, Some(21_000_000));
    }

    #[tokio::test]
    async fn sends_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/MS/quote"))
            .and(query_param("token", "pk_test"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"latestPrice": 50.0, "open": 49.0})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let iex = IexQuoteService::new(Some("pk_test".into())).with_base_url(format!("{}/", server.uri()));
        let quote = iex.quote("ms").await.unwrap();

        // Payload had no symbol; the requested one is used
        assert_eq!(quote.symbol, "MS");
        assert_eq!(quote.latest_price, 50.0);
    }

    #[tokio::test]
    async fn non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/ZZZZ/quote"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Unknown symbol"))
            .mount(&server)
            .await;

        let iex = IexQuoteService::new(None).with_base_url(server.uri());
        let err = iex.quote("zzzz").await.unwrap_err();

        match err {
            CoreError::QuoteUnavailable { symbol, reason } => {
                assert_eq!(symbol, "ZZZZ");
                assert_eq!(reason, "API call failed with status code 404: Unknown symbol");
            }
            other => panic!("expected QuoteUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/AAPL/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let iex = IexQuoteService::new(None).with_base_url(server.uri());
        assert!(matches!(
            iex.quote("AAPL").await,
            Err(CoreError::QuoteUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_host() {
        let iex = IexQuoteService::new(Some("secret".into())).with_base_url("http://127.0.0.1:1");
        let err = iex.quote("AAPL").await.unwrap_err();

        assert!(matches!(err, CoreError::QuoteUnavailable { .. }));
        assert!(!err.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn current_price_via_default_method() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/AAPL/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_json(iex_payload()))
            .mount(&server)
            .await;

        let iex = IexQuoteService::new(None).with_base_url(server.uri());
        assert_eq!(iex.current_price("AAPL").await.unwrap(), 150.0);

        let info = iex.info("AAPL").await.unwrap();
        assert_eq!(info.sector.as_deref(), Some("Technology"));
        assert_eq!(info.primary_exchange.as_deref(), Some("Nasdaq Global Select"));
    }

    #[test]
    fn name() {
        assert_eq!(IexQuoteService::new(None).name(), "IEX");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Alpha Vantage GLOBAL_QUOTE
// ═══════════════════════════════════════════════════════════════════

mod alpha_vantage_quote {
    use super::*;

    #[tokio::test]
    async fn quote_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "GLOBAL_QUOTE"))
            .and(query_param("symbol", "IBM"))
            .and(query_param("apikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Global Quote": {
                    "01. symbol": "IBM",
                    "02. open": "140.0000",
                    "03. high": "143.0000",
                    "04. low": "139.5000",
                    "05. price": "142.5000",
                    "06. volume": "3512345",
                    "07. latest trading day": "2024-05-03",
                    "08. previous close": "139.0000"
                }
            })))
            .mount(&server)
            .await;

        let av = AlphaVantageQuoteService::new("demo".into()).with_base_url(server.uri());
        let quote = av.quote("ibm").await.unwrap();

        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.latest_price, 142.5);
        assert_eq!(quote.open_price, Some(140.0));
        assert_eq!(quote.close_price, Some(139.0));
        assert_eq!(quote.latest_volume, Some(3_512_345));
    }

    #[tokio::test]
    async fn empty_quote_block_means_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Global Quote": {}})))
            .mount(&server)
            .await;

        let av = AlphaVantageQuoteService::new("demo".into()).with_base_url(server.uri());
        let err = av.quote("IBM").await.unwrap_err();
        assert!(err.to_string().contains("API limit"));
    }

    #[tokio::test]
    async fn rate_limit_note() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
            })))
            .mount(&server)
            .await;

        let av = AlphaVantageQuoteService::new("demo".into()).with_base_url(server.uri());
        assert!(matches!(
            av.quote("IBM").await,
            Err(CoreError::QuoteUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let av = AlphaVantageQuoteService::new("demo".into()).with_base_url(server.uri());
        let err = av.quote("IBM").await.unwrap_err();
        assert!(err.to_string().contains("status code 503"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Alpha Vantage HistoricalData
// ═══════════════════════════════════════════════════════════════════

mod historical_data {
    use super::*;

    async fn ok_for(server: &MockServer, function: &str) {
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", function))
            .and(query_param("apikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Meta Data": {}})))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn request_url() {
        let data = HistoricalData::new("key123");
        let url = data
            .request_url(&[("function", "SECTOR".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.alphavantage.co/query?function=SECTOR&apikey=key123"
        );
    }

    #[test]
    fn request_url_bad_base() {
        let data = HistoricalData::new("k").with_base_url("not a url");
        assert!(matches!(
            data.request_url(&[]),
            Err(CoreError::Config(_))
        ));
    }

    #[tokio::test]
    async fn daily_adjusted_stock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "TIME_SERIES_DAILY_ADJUSTED"))
            .and(query_param("symbol", "MSFT"))
            .and(query_param("datatype", "json"))
            .and(query_param_is_missing("interval"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Meta Data": {"2. Symbol": "MSFT"},
                "Time Series (Daily)": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let options = StockOptions {
            adjusted: true,
            ..StockOptions::default()
        };
        let value = data.stock("msft", StockSeries::Day, options).await.unwrap();
        assert_eq!(value["Meta Data"]["2. Symbol"], "MSFT");
    }

    #[tokio::test]
    async fn intraday_stock_ignores_adjusted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "TIME_SERIES_INTRADAY"))
            .and(query_param("interval", "5min"))
            .and(query_param("outputsize", "compact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let options = StockOptions {
            adjusted: true,
            interval: Interval::FiveMinutes,
            compact: true,
            ..StockOptions::default()
        };
        data.stock("MSFT", StockSeries::Intraday, options).await.unwrap();
    }

    #[tokio::test]
    async fn csv_datatype_returns_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("datatype", "csv"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("timestamp,open\n2024-05-03,140.0\n"),
            )
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let options = StockOptions {
            datatype: DataType::Csv,
            ..StockOptions::default()
        };
        let value = data.stock("IBM", StockSeries::Week, options).await.unwrap();
        assert_eq!(value.as_str(), Some("timestamp,open\n2024-05-03,140.0\n"));
    }

    #[tokio::test]
    async fn fx_exchange_rate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "CURRENCY_EXCHANGE_RATE"))
            .and(query_param("from_currency", "USD"))
            .and(query_param("to_currency", "JPY"))
            .and(query_param_is_missing("datatype"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Realtime Currency Exchange Rate": {"5. Exchange Rate": "151.20"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let value = data
            .fx_rate("usd", "jpy", FxSeries::Rate, FxOptions::default())
            .await
            .unwrap();
        assert_eq!(
            value["Realtime Currency Exchange Rate"]["5. Exchange Rate"],
            "151.20"
        );
    }

    #[tokio::test]
    async fn fx_intraday_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "FX_INTRADAY"))
            .and(query_param("from_symbol", "EUR"))
            .and(query_param("to_symbol", "USD"))
            .and(query_param("interval", "1min"))
            .and(query_param("outputsize", "full"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        data.fx_rate("eur", "usd", FxSeries::Intraday, FxOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn crypto_daily() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "DIGITAL_CURRENCY_DAILY"))
            .and(query_param("symbol", "BTC"))
            .and(query_param("market", "USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        data.crypto_rate("btc", CryptoSeries::Day, "usd").await.unwrap();
    }

    #[tokio::test]
    async fn technical_indicator() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "SMA"))
            .and(query_param("symbol", "IBM"))
            .and(query_param("series_type", "close"))
            .and(query_param("time_period", "60"))
            .and(query_param("interval", "weekly"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        data.indicators("ibm", "sma", "close", 60, "weekly", DataType::Json)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sector_performance() {
        let server = MockServer::start().await;
        ok_for(&server, "SECTOR").await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        data.sector().await.unwrap();
    }

    #[tokio::test]
    async fn batch_quotes_join_symbols() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "BATCH_STOCK_QUOTES"))
            .and(query_param("symbols", "MSFT,FB,AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Stock Quotes": []})))
            .expect(1)
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let value = data
            .batch_quotes(&["msft", "fb", "aapl"], DataType::Json)
            .await
            .unwrap();
        assert!(value["Stock Quotes"].is_array());
    }

    #[tokio::test]
    async fn error_message_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Error Message": "Invalid API call. Please retry or visit the documentation."
            })))
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let err = data
            .stock("NOPE", StockSeries::Month, StockOptions::default())
            .await
            .unwrap_err();

        match err {
            CoreError::Api { provider, message } => {
                assert_eq!(provider, "Alpha Vantage");
                assert!(message.starts_with("Invalid API call"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let data = HistoricalData::new("demo").with_base_url(server.uri());
        let err = data.sector().await.unwrap_err();
        assert!(matches!(err, CoreError::Api { ref message, .. } if message.contains("500")));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let data = HistoricalData::new("topsecret").with_base_url("http://127.0.0.1:1");
        let err = data.sector().await.unwrap_err();

        assert!(matches!(err, CoreError::Network(_)));
        assert!(!err.to_string().contains("topsecret"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// QuoteServiceRegistry
// ═══════════════════════════════════════════════════════════════════

mod registry {
    use super::*;

    #[test]
    fn default_settings_skip_keyed_providers() {
        let registry = QuoteServiceRegistry::from_settings(&Settings::default());
        assert!(registry.kinds().contains(&ProviderKind::Iex));
        assert!(registry.get(ProviderKind::AlphaVantage).is_none());
        assert_eq!(registry.primary_kind(), ProviderKind::Iex);
        assert_eq!(registry.name(), "IEX");
    }

    #[test]
    fn api_key_enables_alpha_vantage() {
        let mut settings = Settings::default();
        settings
            .api_keys
            .insert(ProviderKind::AlphaVantage.key().into(), "demo".into());
        settings.quote_provider = ProviderKind::AlphaVantage;

        let registry = QuoteServiceRegistry::from_settings(&settings);
        assert!(registry.get(ProviderKind::AlphaVantage).is_some());
        assert_eq!(registry.primary().unwrap().name(), "Alpha Vantage");
    }

    #[tokio::test]
    async fn missing_primary_is_config_error() {
        let mut settings = Settings::default();
        settings.quote_provider = ProviderKind::AlphaVantage;
        let registry = QuoteServiceRegistry::from_settings(&settings);

        assert!(matches!(registry.primary(), Err(CoreError::Config(_))));
        assert_eq!(registry.name(), "unconfigured");
        assert!(matches!(
            registry.quote("AAPL").await,
            Err(CoreError::Config(_))
        ));
    }

    #[tokio::test]
    async fn routes_to_primary_only() {
        let mut registry = QuoteServiceRegistry::new(ProviderKind::Iex);
        registry.register(ProviderKind::Iex, Box::new(FixedQuotes { name: "one", price: 1.0 }));
        registry.register(ProviderKind::Yahoo, Box::new(FixedQuotes { name: "two", price: 2.0 }));

        assert_eq!(registry.current_price("AAPL").await.unwrap(), 1.0);

        registry.set_primary(ProviderKind::Yahoo);
        assert_eq!(registry.current_price("AAPL").await.unwrap(), 2.0);
        assert_eq!(registry.name(), "two");
    }

    #[test]
    fn register_replaces_same_kind() {
        let mut registry = QuoteServiceRegistry::new(ProviderKind::Iex);
        registry.register(ProviderKind::Iex, Box::new(FixedQuotes { name: "old", price: 1.0 }));
        registry.register(ProviderKind::Iex, Box::new(FixedQuotes { name: "new", price: 1.0 }));

        assert_eq!(registry.kinds(), vec![ProviderKind::Iex]);
        assert_eq!(registry.name(), "new");
    }

    #[tokio::test]
    async fn settings_base_url_reaches_iex() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/AAPL/quote"))
            .and(query_param("token", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(iex_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let mut settings = Settings::default();
        settings.api_keys.insert(ProviderKind::Iex.key().into(), "tok".into());
        settings.iex_base_url = Some(server.uri());

        let registry = QuoteServiceRegistry::from_settings(&settings);
        assert_eq!(registry.current_price("aapl").await.unwrap(), 150.0);
    }

    #[tokio::test]
    async fn upstream_failure_is_not_retried_elsewhere() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut registry = QuoteServiceRegistry::new(ProviderKind::Iex);
        registry.register(
            ProviderKind::Iex,
            Box::new(IexQuoteService::new(None).with_base_url(server.uri())),
        );
        registry.register(ProviderKind::Yahoo, Box::new(FixedQuotes { name: "backup", price: 9.0 }));

        assert!(matches!(
            registry.quote("AAPL").await,
            Err(CoreError::QuoteUnavailable { .. })
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Request timeouts
// ═══════════════════════════════════════════════════════════════════

mod timeouts {
    use super::*;

    const SHORT: Duration = Duration::from_millis(200);

    async fn slow_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(iex_payload())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn iex_timeout_is_quote_unavailable() {
        let server = slow_server().await;
        let iex = IexQuoteService::new(Some("secret".into()))
            .with_base_url(server.uri())
            .with_timeout(SHORT);

        let err = iex.quote("aapl").await.unwrap_err();
        assert!(matches!(err, CoreError::QuoteUnavailable { ref symbol, .. } if symbol == "AAPL"));
        assert!(!err.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn alpha_vantage_timeout_is_quote_unavailable() {
        let server = slow_server().await;
        let av = AlphaVantageQuoteService::new("demo".into())
            .with_base_url(server.uri())
            .with_timeout(SHORT);

        assert!(matches!(
            av.quote("IBM").await,
            Err(CoreError::QuoteUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn historical_data_timeout_is_network_error() {
        let server = slow_server().await;
        let data = HistoricalData::new("topsecret")
            .with_base_url(server.uri())
            .with_timeout(SHORT);

        let err = data.sector().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert!(!err.to_string().contains("topsecret"));
    }

    #[tokio::test]
    async fn settings_timeout_reaches_registry_providers() {
        let server = slow_server().await;
        let mut settings = Settings::default();
        settings.request_timeout_secs = 1;
        settings.iex_base_url = Some(server.uri());

        let registry = QuoteServiceRegistry::from_settings(&settings);
        let started = std::time::Instant::now();
        assert!(matches!(
            registry.quote("AAPL").await,
            Err(CoreError::QuoteUnavailable { .. })
        ));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn yahoo_connector_takes_timeout() {
        let yahoo = YahooQuoteService::with_timeout(SHORT).unwrap();
        assert_eq!(yahoo.timeout(), SHORT);
        assert_eq!(yahoo.name(), "Yahoo Finance");
    }

    #[test]
    fn yahoo_default_timeout() {
        let yahoo = YahooQuoteService::new().unwrap();
        assert_eq!(yahoo.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn yahoo_registered_from_settings() {
        let mut settings = Settings::default();
        settings.quote_provider = ProviderKind::Yahoo;
        settings.request_timeout_secs = 5;

        let registry = QuoteServiceRegistry::from_settings(&settings);
        assert!(registry.kinds().contains(&ProviderKind::Yahoo));
        assert_eq!(registry.name(), "Yahoo Finance");
    }
}
