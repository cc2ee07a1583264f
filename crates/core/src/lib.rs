//! Portfolio Simulator Core - holdings model, valuation and persistence.
//!
//! This crate contains the valuation logic for the Portfolio Simulator.
//! It is presentation-agnostic and prices holdings through the
//! `MarketDataProvider` trait from the market-data crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod storage;
pub mod utils;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
