//! Portfolio Simulator Market Data Crate
//!
//! This crate provides the market data collaborator used by the portfolio
//! core to price holdings.
//!
//! # Overview
//!
//! The core never talks to a data vendor directly. It asks a
//! [`MarketDataProvider`] for the recent price series of a provider symbol
//! and consumes only the most recent close:
//!
//! ```text
//! +------------------+     +--------------------+     +------------------+
//! |   Asset (core)   | --> | MarketDataProvider | --> |  Quote series    |
//! +------------------+     +--------------------+     +------------------+
//!                                   ^
//!                                   |
//!                          +------------------+
//!                          |  YahooProvider   |  (Yahoo Finance chart API)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Daily closing price with its currency and source
//! - [`MarketDataProvider`] - Provider trait implemented by data sources
//! - [`MarketDataError`] - Error type for provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
