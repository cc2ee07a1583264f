use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default persistence file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "portfolio_data.json";

/// Decimal precision for portfolio totals, gain and weight percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for stock prices
pub const STOCK_PRICE_PRECISION: u32 = 2;

/// Decimal precision for crypto prices
pub const CRYPTO_PRICE_PRECISION: u32 = 4;

/// Quote currency appended to crypto tickers when asking the provider
pub const CRYPTO_QUOTE_CURRENCY: &str = "USD";

/// Network fee charged on crypto transfers, as a fraction of the amount
pub const CRYPTO_NETWORK_FEE_RATE: Decimal = dec!(0.005);

/// Multiplier for expressing ratios as percentages
pub const PERCENT: Decimal = dec!(100);
