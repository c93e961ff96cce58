pub mod registry;
pub mod traits;

// API provider implementations
pub mod alphavantage;
pub mod iex;
#[cfg(not(target_arch = "wasm32"))]
pub mod yahoo_finance;

use reqwest::Client;
use std::time::Duration;

/// HTTP client shared by the reqwest-based providers. Timeouts are not
/// available on wasm, where the browser enforces its own.
pub(crate) fn build_client(timeout: Duration) -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(timeout);
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;
    builder.build().unwrap_or_else(|_| Client::new())
}
