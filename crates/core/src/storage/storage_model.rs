//! Persisted record format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One persisted holding.
///
/// Serializes as
/// `{"type": "Stock"|"Crypto", "ticker": ..., "quantity": ..., "purchase_price": ...}`.
/// The current price is not stored and there is no schema version.
/// Amounts are written as exact JSON numbers, so any `Decimal` reads back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub ticker: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub purchase_price: Decimal,
}
