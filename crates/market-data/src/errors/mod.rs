//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned an empty series.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred (network, HTTP status, decoding).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },
}

impl MarketDataError {
    /// Whether the failure means the provider has nothing for this symbol,
    /// as opposed to the provider itself misbehaving.
    ///
    /// ```
    /// use portfolio_sim_market_data::MarketDataError;
    ///
    /// assert!(MarketDataError::SymbolNotFound("NOPE".to_string()).is_missing_data());
    /// assert!(MarketDataError::NoDataForRange.is_missing_data());
    /// let bad = MarketDataError::ValidationFailed { message: "bad".to_string() };
    /// assert!(!bad.is_missing_data());
    /// ```
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoDataForRange)
    }
}
