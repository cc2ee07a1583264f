//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Callers hand over a provider-ready symbol (e.g. `AAPL`, `BTC-USD`);
/// mapping holdings to symbols is the caller's concern.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use portfolio_sim_market_data::{MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_recent_quotes(&self, symbol: &str) -> Result<Vec<Quote>, MarketDataError> {
///         // ... call the vendor
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the most recent daily price series for a symbol.
    ///
    /// The quotes should be ordered by timestamp ascending.
    async fn get_recent_quotes(&self, symbol: &str) -> Result<Vec<Quote>, MarketDataError>;

    /// Fetch the latest quote for a symbol.
    ///
    /// Default implementation takes the last element of
    /// [`get_recent_quotes`](Self::get_recent_quotes) and reports
    /// `NoDataForRange` for an empty series.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.get_recent_quotes(symbol)
            .await?
            .pop()
            .ok_or(MarketDataError::NoDataForRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    struct SeriesProvider {
        quotes: Vec<Quote>,
    }

    #[async_trait]
    impl MarketDataProvider for SeriesProvider {
        fn id(&self) -> &'static str {
            "SERIES"
        }

        async fn get_recent_quotes(&self, _symbol: &str) -> Result<Vec<Quote>, MarketDataError> {
            Ok(self.quotes.clone())
        }
    }

    fn quote(days_ago: i64, close: rust_decimal::Decimal) -> Quote {
        Quote::new(
            Utc::now() - Duration::days(days_ago),
            close,
            "USD".to_string(),
            "SERIES".to_string(),
        )
    }

    #[tokio::test]
    async fn test_latest_quote_is_last_in_series() {
        let provider = SeriesProvider {
            quotes: vec![quote(2, dec!(10)), quote(1, dec!(11)), quote(0, dec!(12.5))],
        };
        let latest = provider.get_latest_quote("ANY").await.unwrap();
        assert_eq!(latest.close, dec!(12.5));
    }

    #[tokio::test]
    async fn test_latest_quote_empty_series() {
        let provider = SeriesProvider { quotes: vec![] };
        let err = provider.get_latest_quote("ANY").await.unwrap_err();
        assert!(matches!(err, MarketDataError::NoDataForRange));
    }
}
