use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::Quote;
use crate::models::settings::{ProviderKind, Settings};

use super::alphavantage::AlphaVantageQuoteService;
use super::iex::IexQuoteService;
#[cfg(not(target_arch = "wasm32"))]
use super::yahoo_finance::YahooQuoteService;
use super::traits::QuoteService;

/// Registry of configured quote services, one per `ProviderKind`.
///
/// The registry is itself a `QuoteService`: every request goes to the
/// primary provider. There is no fallback between providers, so an
/// upstream failure reaches the caller unchanged.
pub struct QuoteServiceRegistry {
    providers: Vec<(ProviderKind, Box<dyn QuoteService>)>,
    primary: ProviderKind,
}

impl QuoteServiceRegistry {
    /// Create an empty registry that will route to `primary` once it is
    /// registered.
    pub fn new(primary: ProviderKind) -> Self {
        Self {
            providers: Vec::new(),
            primary,
        }
    }

    /// Create a registry with every provider the settings allow.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new(settings.quote_provider);
        let timeout = settings.request_timeout();

        // IEX: token optional
        let mut iex = IexQuoteService::new(settings.api_key(ProviderKind::Iex).map(str::to_string))
            .with_timeout(timeout);
        if let Some(url) = &settings.iex_base_url {
            iex = iex.with_base_url(url.clone());
        }
        registry.register(ProviderKind::Iex, Box::new(iex));

        // Alpha Vantage: requires API key
        if let Some(key) = settings.api_key(ProviderKind::AlphaVantage) {
            registry.register(
                ProviderKind::AlphaVantage,
                Box::new(AlphaVantageQuoteService::new(key.to_string()).with_timeout(timeout)),
            );
        }

        // Yahoo Finance: no API key, native only
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(yahoo) = YahooQuoteService::with_timeout(timeout) {
                registry.register(ProviderKind::Yahoo, Box::new(yahoo));
            }
        }

        registry
    }

    /// Register a provider, replacing any earlier one of the same kind.
    pub fn register(&mut self, kind: ProviderKind, provider: Box<dyn QuoteService>) {
        self.providers.retain(|(k, _)| *k != kind);
        self.providers.push((kind, provider));
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&dyn QuoteService> {
        self.providers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_ref())
    }

    /// Kinds registered so far, in registration order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|(k, _)| *k).collect()
    }

    pub fn primary_kind(&self) -> ProviderKind {
        self.primary
    }

    pub fn set_primary(&mut self, kind: ProviderKind) {
        self.primary = kind;
    }

    /// The provider valuation requests go to.
    pub fn primary(&self) -> Result<&dyn QuoteService, CoreError> {
        self.get(self.primary).ok_or_else(|| {
            CoreError::Config(format!(
                "quote provider {} is not configured (missing API key?)",
                self.primary
            ))
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteService for QuoteServiceRegistry {
    fn name(&self) -> &str {
        self.get(self.primary)
            .map(|p| p.name())
            .unwrap_or("unconfigured")
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        self.primary()?.quote(symbol).await
    }
}
