//! Portfolio display models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;

/// One row of the portfolio summary, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub ticker: String,
    pub kind: AssetKind,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    /// Rounded to 2 decimals
    pub gain_percent: Decimal,
    /// Share of total portfolio value, rounded to 2 decimals; zero when the
    /// portfolio is worth nothing
    pub weight_percent: Decimal,
}

/// Headline figures for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total_value: Decimal,
    pub total_gain: Decimal,
    pub total_gain_percent: Decimal,
    pub asset_count: usize,
}
