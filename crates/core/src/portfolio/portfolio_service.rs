use std::sync::Arc;

use log::{debug, warn};
use portfolio_sim_market_data::MarketDataProvider;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::assets::Asset;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::{AssetSummary, PortfolioOverview};
use crate::storage::{AssetRecord, PortfolioStoreTrait};
use crate::utils::decimal_utils::{ratio_percent, saturating_sum};

/// An ordered collection of holdings plus the collaborators needed to price
/// and persist it.
///
/// Insertion order is kept for display. Duplicate tickers are separate lots.
pub struct Portfolio {
    assets: Vec<Asset>,
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<dyn PortfolioStoreTrait>,
}

impl Portfolio {
    pub fn new(provider: Arc<dyn MarketDataProvider>, store: Arc<dyn PortfolioStoreTrait>) -> Self {
        Self {
            assets: Vec::new(),
            provider,
            store,
        }
    }

    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Refreshes every holding's price, one lookup at a time.
    ///
    /// Each asset absorbs its own lookup failure, so the batch always runs to
    /// completion.
    pub async fn update_all_prices(&mut self) {
        debug!(
            "Updating prices for {} assets via {}",
            self.assets.len(),
            self.provider.id()
        );
        for asset in self.assets.iter_mut() {
            asset.fetch_current_price(self.provider.as_ref()).await;
        }
        debug!("Finished updating prices.");
    }

    /// Sum of current values, rounded to 2 decimals.
    pub fn get_total_value(&self) -> Decimal {
        saturating_sum(self.assets.iter().map(Asset::calculate_current_value))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    fn total_cost_basis(&self) -> Decimal {
        saturating_sum(self.assets.iter().map(Asset::cost_basis))
    }

    /// Rounded total value minus total amount paid, rounded to 2 decimals.
    pub fn calculate_total_gain(&self) -> Decimal {
        self.get_total_value()
            .saturating_sub(self.total_cost_basis())
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// Total gain as a percentage of the amount paid; zero when nothing was
    /// paid.
    pub fn calculate_total_gain_percent(&self) -> Decimal {
        ratio_percent(self.calculate_total_gain(), self.total_cost_basis())
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }

    /// One row per holding, in insertion order.
    pub fn get_portfolio_summary(&self) -> Vec<AssetSummary> {
        let total_value = self.get_total_value();

        self.assets
            .iter()
            .map(|asset| {
                let current_value = asset.calculate_current_value();
                let weight_percent = ratio_percent(current_value, total_value)
                    .round_dp(DISPLAY_DECIMAL_PRECISION);
                AssetSummary {
                    ticker: asset.ticker().to_string(),
                    kind: asset.kind(),
                    quantity: asset.quantity(),
                    purchase_price: asset.purchase_price(),
                    current_price: asset.current_price(),
                    current_value,
                    gain_percent: asset
                        .calculate_gain_percent()
                        .round_dp(DISPLAY_DECIMAL_PRECISION),
                    weight_percent,
                }
            })
            .collect()
    }

    pub fn get_overview(&self) -> PortfolioOverview {
        PortfolioOverview {
            total_value: self.get_total_value(),
            total_gain: self.calculate_total_gain(),
            total_gain_percent: self.calculate_total_gain_percent(),
            asset_count: self.assets.len(),
        }
    }

    pub fn get_assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Live handle on the holdings, e.g. for manual price overrides.
    pub fn get_assets_mut(&mut self) -> &mut [Asset] {
        &mut self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Writes every holding to the store, replacing what was there.
    /// Current prices are not saved.
    pub fn save_portfolio(&self) -> Result<()> {
        let records: Vec<AssetRecord> = self.assets.iter().map(Asset::to_record).collect();
        self.store.write_records(&records)
    }

    /// Replaces the holdings with the stored ones.
    ///
    /// Returns `false`, leaving the current holdings untouched, when nothing
    /// is stored or the stored document cannot be read. Otherwise returns
    /// `true`, even if no record could be turned into an asset. Records with
    /// an unknown `type` or invalid fields are skipped.
    pub fn load_portfolio(&mut self) -> bool {
        let values = match self.store.read_records() {
            Ok(Some(values)) => values,
            Ok(None) => return false,
            Err(e) => {
                warn!("Could not load portfolio: {}", e);
                return false;
            }
        };

        let record_count = values.len();
        self.assets = decode_assets(values);
        debug!(
            "Loaded {} of {} stored records",
            self.assets.len(),
            record_count
        );
        true
    }
}

fn decode_assets(values: Vec<Value>) -> Vec<Asset> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record: AssetRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping malformed record #{}: {}", index, e);
                    return None;
                }
            };
            match Asset::try_from(record) {
                Ok(asset) => Some(asset),
                Err(Error::Validation(ValidationError::UnknownAssetType(asset_type))) => {
                    warn!(
                        "Skipping record #{} with unknown type '{}'",
                        index, asset_type
                    );
                    None
                }
                Err(e) => {
                    warn!("Skipping invalid record #{}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}
