//! Property-based integration tests for portfolio valuation and persistence.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use async_trait::async_trait;
use portfolio_sim_core::errors::ValidationError;
use portfolio_sim_core::storage::JsonFileStore;
use portfolio_sim_core::{Asset, AssetKind, Error, Portfolio};
use portfolio_sim_market_data::{MarketDataError, MarketDataProvider, Quote};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;
use tempfile::tempdir;

/// Provider that knows no symbols. Valuation tests set prices by hand.
struct NullProvider;

#[async_trait]
impl MarketDataProvider for NullProvider {
    fn id(&self) -> &'static str {
        "NULL"
    }

    async fn get_recent_quotes(&self, symbol: &str) -> Result<Vec<Quote>, MarketDataError> {
        Err(MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

// =============================================================================
// Generators
// =============================================================================

fn arb_kind() -> impl Strategy<Value = AssetKind> {
    prop_oneof![Just(AssetKind::Stock), Just(AssetKind::Crypto)]
}

/// Non-negative amount with up to `scale` decimals.
fn arb_amount(max_units: i64, scale: u32) -> impl Strategy<Value = Decimal> {
    (0..max_units).prop_map(move |units| Decimal::new(units, scale))
}

/// An asset with a manually assigned current price.
fn arb_priced_asset() -> impl Strategy<Value = Asset> {
    (
        arb_kind(),
        "[A-Z]{1,5}",
        arb_amount(1_000_000, 4),   // quantity
        arb_amount(10_000_000, 2),  // purchase price
        arb_amount(100_000_000, 4), // current price
    )
        .prop_map(|(kind, ticker, quantity, purchase_price, current_price)| {
            let mut asset = Asset::new(kind, &ticker, quantity, purchase_price).unwrap();
            asset.set_current_price(current_price).unwrap();
            asset
        })
}

/// An asset whose value has at most two decimals and is at least 1.00.
fn arb_whole_valued_asset() -> impl Strategy<Value = Asset> {
    (arb_kind(), "[A-Z]{1,5}", 1i64..100, 100i64..10_000_000).prop_map(
        |(kind, ticker, quantity, price_cents)| {
            let price = Decimal::new(price_cents, 2);
            let mut asset = Asset::new(kind, &ticker, Decimal::from(quantity), price).unwrap();
            asset.set_current_price(price).unwrap();
            asset
        },
    )
}

/// Any decimal with up to 19 significant digits at the given scales.
fn arb_precise_amount(scales: std::ops::RangeInclusive<u32>) -> impl Strategy<Value = Decimal> {
    (0..i64::MAX, scales).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// An unpriced asset with full-precision amounts.
fn arb_storable_asset() -> impl Strategy<Value = Asset> {
    (
        arb_kind(),
        "[a-zA-Z]{1,6}",
        arb_precise_amount(8..=28), // quantity, below 1e11
        arb_precise_amount(4..=28), // purchase price, below 1e15
    )
        .prop_map(|(kind, ticker, quantity, purchase_price)| {
            Asset::new(kind, &ticker, quantity, purchase_price).unwrap()
        })
}

/// Any asset the constructor and price setter accept, including positions
/// close to the largest representable value.
fn arb_extreme_asset() -> impl Strategy<Value = Asset> {
    (
        arb_kind(),
        arb_precise_amount(0..=28),
        arb_precise_amount(0..=28),
        arb_precise_amount(0..=28),
        0u32..=9, // extra magnitude for the quantity
    )
        .prop_filter_map(
            "position too large",
            |(kind, quantity, purchase_price, current_price, shift)| {
                let quantity = quantity.checked_mul(Decimal::from(10i64.pow(shift)))?;
                let mut asset = Asset::new(kind, "X", quantity, purchase_price).ok()?;
                asset.set_current_price(current_price).ok()?;
                Some(asset)
            },
        )
}

fn portfolio_with(store: JsonFileStore, assets: Vec<Asset>) -> Portfolio {
    let mut portfolio = Portfolio::new(Arc::new(NullProvider), Arc::new(store));
    for asset in assets {
        portfolio.add_asset(asset);
    }
    portfolio
}

fn unsaved(assets: Vec<Asset>) -> Portfolio {
    portfolio_with(JsonFileStore::new("unused.json"), assets)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn negative_price_is_rejected_and_prior_price_kept(
        mut asset in arb_priced_asset(),
        negative in 1i64..1_000_000,
    ) {
        let before = asset.current_price();
        let result = asset.set_current_price(Decimal::new(-negative, 2));
        prop_assert!(
            matches!(result, Err(Error::Validation(ValidationError::NegativePrice(_)))),
            "expected rejection"
        );
        prop_assert_eq!(asset.current_price(), before);
    }

    #[test]
    fn gain_percent_is_zero_when_nothing_was_paid(
        kind in arb_kind(),
        quantity in arb_amount(1_000_000, 4),
        current in arb_amount(100_000_000, 4),
    ) {
        let mut asset = Asset::new(kind, "FREE", quantity, Decimal::ZERO).unwrap();
        asset.set_current_price(current).unwrap();
        prop_assert_eq!(asset.calculate_gain_percent(), Decimal::ZERO);
    }

    #[test]
    fn total_value_is_rounded_sum_of_holdings(
        assets in prop::collection::vec(arb_priced_asset(), 0..12),
    ) {
        let expected = assets
            .iter()
            .map(|a| a.current_price() * a.quantity())
            .sum::<Decimal>()
            .round_dp(2);
        prop_assert_eq!(unsaved(assets).get_total_value(), expected);
    }

    #[test]
    fn weights_sum_to_one_hundred(
        assets in prop::collection::vec(arb_whole_valued_asset(), 1..12),
    ) {
        let count = assets.len();
        let summary = unsaved(assets).get_portfolio_summary();
        let total: Decimal = summary.iter().map(|row| row.weight_percent).sum();
        let tolerance = Decimal::new(5, 3) * Decimal::from(count);
        prop_assert!(
            (total - Decimal::ONE_HUNDRED).abs() <= tolerance,
            "weights summed to {}",
            total
        );
    }

    #[test]
    fn weights_are_zero_for_unpriced_portfolio(
        assets in prop::collection::vec(arb_storable_asset(), 0..12),
    ) {
        let summary = unsaved(assets).get_portfolio_summary();
        prop_assert!(summary.iter().all(|row| row.weight_percent.is_zero()));
    }

    #[test]
    fn valuation_never_overflows(
        assets in prop::collection::vec(arb_extreme_asset(), 0..12),
    ) {
        let portfolio = unsaved(assets);
        let total = portfolio.get_total_value();
        prop_assert!(total >= Decimal::ZERO);
        let _ = portfolio.calculate_total_gain();
        let _ = portfolio.calculate_total_gain_percent();
        for row in portfolio.get_portfolio_summary() {
            prop_assert!(row.weight_percent >= Decimal::ZERO);
        }
    }

    #[test]
    fn save_then_load_preserves_holdings(
        assets in prop::collection::vec(arb_storable_asset(), 0..12),
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio_data.json");
        let expected: Vec<_> = assets
            .iter()
            .map(|a| (a.kind(), a.ticker().to_string(), a.quantity(), a.purchase_price()))
            .collect();

        portfolio_with(JsonFileStore::new(&path), assets)
            .save_portfolio()
            .unwrap();

        let mut reloaded = portfolio_with(JsonFileStore::new(&path), Vec::new());
        prop_assert!(reloaded.load_portfolio());
        let actual: Vec<_> = reloaded
            .get_assets()
            .iter()
            .map(|a| (a.kind(), a.ticker().to_string(), a.quantity(), a.purchase_price()))
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(reloaded.get_assets().iter().all(|a| a.current_price().is_zero()));
    }
}
