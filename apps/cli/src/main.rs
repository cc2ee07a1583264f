mod config;
mod main_lib;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::Config;
use main_lib::{add_holding, build_portfolio, init_tracing, refresh, render_json, render_text};
use portfolio_sim_core::AssetKind;
use portfolio_sim_market_data::{MarketDataProvider, YahooProvider};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "portfolio-sim", about = "Track stock and crypto holdings")]
struct Args {
    /// Portfolio JSON file (overrides PS_DATA_FILE)
    #[arg(long, env = "PS_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the overview and the holdings table
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Add a holding, price it and save
    Add {
        /// stock or crypto
        #[arg(long)]
        kind: AssetKind,
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        quantity: Decimal,
        #[arg(long)]
        purchase_price: Decimal,
    },
    /// Refresh every price, save, then show
    Refresh {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env();
    let args = Args::parse();
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    init_tracing(&config.log_format);

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new().await?);
    let mut portfolio = build_portfolio(&config, provider.clone()).await;

    let json = match args.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json } => json,
        Commands::Add {
            kind,
            ticker,
            quantity,
            purchase_price,
        } => {
            add_holding(
                &mut portfolio,
                provider.as_ref(),
                kind,
                &ticker,
                quantity,
                purchase_price,
            )
            .await?;
            false
        }
        Commands::Refresh { json } => {
            refresh(&mut portfolio).await?;
            json
        }
    };

    if json {
        println!("{}", render_json(&portfolio)?);
    } else {
        println!("{}", render_text(&portfolio));
    }
    Ok(())
}
