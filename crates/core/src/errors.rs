use thiserror::Error;

/// Unified error type for the entire stockify-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lots / Holdings ─────────────────────────────────────────────
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Symbol {0} not in holdings")]
    UnknownSymbol(String),

    #[error("Lot index {index} out of range (holding has {len} lots)")]
    IndexOutOfRange { index: usize, len: usize },

    // ── Quotes / Market data ────────────────────────────────────────
    #[error("Quote unavailable for {symbol}: {reason}")]
    QuoteUnavailable { symbol: String, reason: String },

    /// A request option (series, interval, datatype) outside its table.
    #[error("{kind} type {value} is not a supported value")]
    UnsupportedParameter { kind: &'static str, value: String },

    #[error("API error ({provider}): {message}")]
    Api { provider: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    // ── Import / Export ─────────────────────────────────────────────
    #[error("Unsupported file format: {0} (expected json or csv)")]
    UnsupportedFileFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Build a `QuoteUnavailable` error for `symbol`.
    pub fn quote_unavailable(symbol: &str, reason: impl std::fmt::Display) -> Self {
        CoreError::QuoteUnavailable {
            symbol: symbol.to_uppercase(),
            reason: redact_query(&reason.to_string()),
        }
    }
}

/// Strip query parameters from anything that looks like a URL so API keys
/// and tokens never end up in error messages.
pub(crate) fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => {
            // Keep whatever follows the URL (reqwest appends ": reason" or ")")
            let tail = msg[idx..]
                .find(|c: char| c.is_whitespace() || c == ')')
                .map(|end| &msg[idx + end..])
                .unwrap_or("");
            format!("{}?<query redacted>{}", &msg[..idx], tail)
        }
        None => msg.to_string(),
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors often carry the full URL, secrets included.
        CoreError::Network(redact_query(&e.to_string()))
    }
}
