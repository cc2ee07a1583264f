//! Portfolio module - the holdings aggregator and its display models.

mod portfolio_model;
mod portfolio_service;


pub use portfolio_model::{AssetSummary, PortfolioOverview};
pub use portfolio_service::Portfolio;
