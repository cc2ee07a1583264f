//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use portfolio_sim_market_data::MarketDataProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CRYPTO_NETWORK_FEE_RATE, CRYPTO_PRICE_PRECISION, CRYPTO_QUOTE_CURRENCY, STOCK_PRICE_PRECISION,
};
use crate::errors::{Result, ValidationError};
use crate::storage::AssetRecord;
use crate::utils::decimal_utils::ratio_percent;

/// Asset variant.
///
/// The kind decides how the holding is priced: which provider symbol is
/// requested and how many decimals the fetched price keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Stock,
    Crypto,
}

impl AssetKind {
    /// Returns the persisted `type` tag ("Stock" / "Crypto").
    pub const fn as_type_tag(&self) -> &'static str {
        match self {
            AssetKind::Stock => "Stock",
            AssetKind::Crypto => "Crypto",
        }
    }

    /// Parses a persisted `type` tag. Matching is exact.
    pub fn from_type_tag(s: &str) -> Option<Self> {
        match s {
            "Stock" => Some(AssetKind::Stock),
            "Crypto" => Some(AssetKind::Crypto),
            _ => None,
        }
    }

    /// Symbol to request from the market data provider for a ticker.
    pub fn provider_symbol(&self, ticker: &str) -> String {
        match self {
            AssetKind::Stock => ticker.to_string(),
            AssetKind::Crypto => format!("{}-{}", ticker, CRYPTO_QUOTE_CURRENCY),
        }
    }

    /// Number of decimals kept on a fetched price.
    pub const fn price_precision(&self) -> u32 {
        match self {
            AssetKind::Stock => STOCK_PRICE_PRECISION,
            AssetKind::Crypto => CRYPTO_PRICE_PRECISION,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_type_tag())
    }
}

/// Case-insensitive parsing, for user input.
impl FromStr for AssetKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Ok(AssetKind::Stock),
            "crypto" => Ok(AssetKind::Crypto),
            _ => Err(ValidationError::UnknownAssetType(s.to_string())),
        }
    }
}

/// Network fee for moving `amount` of a crypto asset.
pub fn crypto_network_fee(amount: Decimal) -> Decimal {
    amount * CRYPTO_NETWORK_FEE_RATE
}

/// A single holding (lot).
///
/// Ticker, quantity and purchase price are fixed at construction. The
/// current price starts at zero and is only ever replaced by a
/// non-negative value.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    kind: AssetKind,
    ticker: String,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
}

impl Asset {
    pub fn new(
        kind: AssetKind,
        ticker: &str,
        quantity: Decimal,
        purchase_price: Decimal,
    ) -> Result<Self> {
        if quantity < Decimal::ZERO {
            return Err(ValidationError::NegativeQuantity(quantity).into());
        }
        if purchase_price < Decimal::ZERO {
            return Err(ValidationError::NegativePurchasePrice(purchase_price).into());
        }
        check_position_size(quantity, purchase_price)?;
        Ok(Self {
            kind,
            ticker: ticker.to_uppercase(),
            quantity,
            purchase_price,
            current_price: Decimal::ZERO,
        })
    }

    pub fn stock(ticker: &str, quantity: Decimal, purchase_price: Decimal) -> Result<Self> {
        Self::new(AssetKind::Stock, ticker, quantity, purchase_price)
    }

    pub fn crypto(ticker: &str, quantity: Decimal, purchase_price: Decimal) -> Result<Self> {
        Self::new(AssetKind::Crypto, ticker, quantity, purchase_price)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    pub fn current_price(&self) -> Decimal {
        self.current_price
    }

    /// Sets the current price. Negative prices, and prices whose position
    /// value is not representable, are rejected and leave the previous
    /// price in place.
    pub fn set_current_price(&mut self, price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(price).into());
        }
        check_position_size(self.quantity, price)?;
        self.current_price = price;
        Ok(())
    }

    /// Symbol this asset is looked up under at the market data provider.
    pub fn provider_symbol(&self) -> String {
        self.kind.provider_symbol(&self.ticker)
    }

    /// Refreshes the current price from the provider's latest close.
    ///
    /// Any lookup failure (network, unknown symbol, empty series, invalid
    /// price) falls back to the purchase price. Nothing is returned to the
    /// caller; a refresh never fails.
    pub async fn fetch_current_price(&mut self, provider: &dyn MarketDataProvider) {
        let symbol = self.provider_symbol();

        match provider.get_latest_quote(&symbol).await {
            Ok(quote) => {
                let price = quote.close.round_dp(self.kind.price_precision());
                match self.set_current_price(price) {
                    Ok(()) => {
                        debug!(
                            "{} priced at {} {} ({})",
                            symbol, price, quote.currency, quote.source
                        );
                        return;
                    }
                    Err(e) => warn!("Rejected quote for {} from {}: {}", symbol, provider.id(), e),
                }
            }
            Err(e) if e.is_missing_data() => {
                warn!("No price data for {} from {}: {}", symbol, provider.id(), e)
            }
            Err(e) => warn!("Price lookup for {} via {} failed: {}", symbol, provider.id(), e),
        }

        debug!(
            "Falling back to purchase price {} for {}",
            self.purchase_price, symbol
        );
        self.current_price = self.purchase_price;
    }

    pub fn calculate_current_value(&self) -> Decimal {
        self.current_price
            .checked_mul(self.quantity)
            .unwrap_or(Decimal::MAX)
    }

    /// Total amount paid for the holding.
    pub fn cost_basis(&self) -> Decimal {
        self.purchase_price
            .checked_mul(self.quantity)
            .unwrap_or(Decimal::MAX)
    }

    /// Percentage change of the current price over the purchase price.
    ///
    /// Returns zero when the purchase price is zero, whatever the current
    /// price is.
    pub fn calculate_gain_percent(&self) -> Decimal {
        ratio_percent(
            self.current_price - self.purchase_price,
            self.purchase_price,
        )
    }

    /// Network fee for transferring `amount`, only defined for crypto.
    pub fn calculate_network_fee(&self, amount: Decimal) -> Option<Decimal> {
        match self.kind {
            AssetKind::Crypto => Some(crypto_network_fee(amount)),
            AssetKind::Stock => None,
        }
    }

    /// Persisted form of the asset. The current price is not part of it.
    pub fn to_record(&self) -> AssetRecord {
        AssetRecord {
            asset_type: self.kind.as_type_tag().to_string(),
            ticker: self.ticker.clone(),
            quantity: self.quantity,
            purchase_price: self.purchase_price,
        }
    }
}

/// Rejects a position whose value `quantity * price` does not fit in a
/// `Decimal`.
fn check_position_size(quantity: Decimal, price: Decimal) -> Result<()> {
    if quantity.checked_mul(price).is_none() {
        return Err(ValidationError::InvalidInput(format!(
            "position of {} at {} is too large",
            quantity, price
        ))
        .into());
    }
    Ok(())
}

impl TryFrom<AssetRecord> for Asset {
    type Error = crate::Error;

    fn try_from(record: AssetRecord) -> Result<Self> {
        let kind = AssetKind::from_type_tag(&record.asset_type)
            .ok_or_else(|| ValidationError::UnknownAssetType(record.asset_type.clone()))?;
        Asset::new(kind, &record.ticker, record.quantity, record.purchase_price)
    }
}
