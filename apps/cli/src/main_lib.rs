use std::sync::Arc;

use portfolio_sim_core::storage::JsonFileStore;
use portfolio_sim_core::{Asset, AssetKind, AssetSummary, Portfolio, PortfolioOverview};
use portfolio_sim_market_data::MarketDataProvider;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const EMPTY_PORTFOLIO_MESSAGE: &str = "Your portfolio is empty. Add an asset.";

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Opens the portfolio stored at the configured path.
///
/// When nothing usable is stored the sample holdings are added and priced,
/// unless seeding is turned off.
pub async fn build_portfolio(config: &Config, provider: Arc<dyn MarketDataProvider>) -> Portfolio {
    let store = Arc::new(JsonFileStore::new(&config.data_file));
    let mut portfolio = Portfolio::new(provider, store);

    let loaded = portfolio.load_portfolio();
    tracing::info!(
        "Portfolio file {} loaded: {} ({} assets)",
        config.data_file.display(),
        loaded,
        portfolio.len()
    );

    if (!loaded || portfolio.is_empty()) && config.seed_sample {
        seed_sample(&mut portfolio);
        portfolio.update_all_prices().await;
    }
    portfolio
}

fn seed_sample(portfolio: &mut Portfolio) {
    let samples = [
        (AssetKind::Stock, "GOOG", Decimal::from(5), Decimal::from(100)),
        (AssetKind::Crypto, "BTC", Decimal::new(5, 1), Decimal::from(50_000)),
    ];
    for (kind, ticker, quantity, purchase_price) in samples {
        match Asset::new(kind, ticker, quantity, purchase_price) {
            Ok(asset) => portfolio.add_asset(asset),
            Err(e) => tracing::warn!("Skipping sample {}: {}", ticker, e),
        }
    }
    tracing::info!("Seeded {} sample assets", portfolio.len());
}

/// Prices a new holding, appends it and saves the portfolio.
pub async fn add_holding(
    portfolio: &mut Portfolio,
    provider: &dyn MarketDataProvider,
    kind: AssetKind,
    ticker: &str,
    quantity: Decimal,
    purchase_price: Decimal,
) -> anyhow::Result<()> {
    let mut asset = Asset::new(kind, ticker, quantity, purchase_price)?;
    asset.fetch_current_price(provider).await;
    tracing::info!("{} added to portfolio.", asset.ticker());
    portfolio.add_asset(asset);
    portfolio.save_portfolio()?;
    Ok(())
}

pub async fn refresh(portfolio: &mut Portfolio) -> anyhow::Result<()> {
    portfolio.update_all_prices().await;
    portfolio.save_portfolio()?;
    Ok(())
}

pub fn render_json(portfolio: &Portfolio) -> anyhow::Result<String> {
    let body = serde_json::json!({
        "overview": portfolio.get_overview(),
        "assets": portfolio.get_portfolio_summary(),
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn render_text(portfolio: &Portfolio) -> String {
    if portfolio.is_empty() {
        return EMPTY_PORTFOLIO_MESSAGE.to_string();
    }
    let mut out = render_overview(&portfolio.get_overview());
    out.push('\n');
    out.push_str(&render_table(&portfolio.get_portfolio_summary()));
    out
}

fn render_overview(overview: &PortfolioOverview) -> String {
    format!(
        "Total Portfolio Value: {}\nTotal Gain/Loss:       {} ({}%)\nNumber of Assets:      {}\n",
        format_money(overview.total_value),
        format_money(overview.total_gain),
        overview.total_gain_percent,
        overview.asset_count
    )
}

fn render_table(rows: &[AssetSummary]) -> String {
    let mut out = format!(
        "{:<8} {:<7} {:>14} {:>16} {:>16} {:>16} {:>9} {:>9}\n",
        "Ticker",
        "Kind",
        "Quantity",
        "Purchase Price",
        "Current Price",
        "Current Value",
        "Gain %",
        "Weight %"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<8} {:<7} {:>14} {:>16} {:>16} {:>16} {:>9} {:>9}\n",
            row.ticker,
            row.kind.to_string(),
            row.quantity.normalize().to_string(),
            format_money(row.purchase_price),
            format_money(row.current_price),
            format_money(row.current_value),
            format!("{:.2}", row.gain_percent),
            format!("{:.2}", row.weight_percent),
        ));
    }
    out
}

/// `$1,234.50` style, two decimals with thousands separators.
fn format_money(value: Decimal) -> String {
    let fixed = format!("{:.2}", value.abs().round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && !value.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("${}{}.{}", sign, grouped, frac_part)
}
