//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance chart API to fetch daily prices for:
//! - Equities/ETFs (e.g., AAPL, GOOG)
//! - Cryptocurrencies quoted in USD (e.g., BTC-USD)

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Currency reported on every quote; multi-currency pricing is not supported.
const QUOTE_CURRENCY: &str = "USD";

/// Bar size and lookback window for the recent series (last trading day).
const INTERVAL: &str = "1d";
const RANGE: &str = "1d";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub async fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
            MarketDataError::SymbolNotFound(symbol.to_string())
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        }
    }
}

/// Convert a raw Yahoo bar to our Quote model.
///
/// Yahoo reports missing values as NaN. A non-finite close or an
/// unrepresentable timestamp rejects the bar.
fn bar_to_quote(timestamp: i64, close: f64) -> Result<Quote, MarketDataError> {
    let timestamp: DateTime<Utc> = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Invalid timestamp: {}", timestamp),
        })?;

    let close = Decimal::from_f64(close).ok_or_else(|| MarketDataError::ValidationFailed {
        message: format!("Failed to convert close price {} to Decimal", close),
    })?;

    Ok(Quote::new(
        timestamp,
        close,
        QUOTE_CURRENCY.to_string(),
        PROVIDER_ID.to_string(),
    ))
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_recent_quotes(&self, symbol: &str) -> Result<Vec<Quote>, MarketDataError> {
        debug!("Fetching recent quotes for {} from Yahoo", symbol);

        let response = self
            .connector
            .get_quote_range(symbol, INTERVAL, RANGE)
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        let yahoo_quotes = response.quotes().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            Self::map_yahoo_error(symbol, e)
        })?;

        let mut quotes: Vec<Quote> = yahoo_quotes
            .into_iter()
            .filter_map(|q| match bar_to_quote(q.timestamp as i64, q.close) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!("Skipping quote for {} due to conversion error: {}", symbol, e);
                    None
                }
            })
            .collect();

        if quotes.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        quotes.sort_by_key(|q| q.timestamp);
        Ok(quotes)
    }
}
