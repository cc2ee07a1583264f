//! Core error types for the Portfolio Simulator.
//!
//! Market data failures never surface here: each asset absorbs its own
//! lookup failure into the purchase-price fallback.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors for asset construction and mutation.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Current price cannot be negative (got {0})")]
    NegativePrice(Decimal),

    #[error("Quantity cannot be negative (got {0})")]
    NegativeQuantity(Decimal),

    #[error("Purchase price cannot be negative (got {0})")]
    NegativePurchasePrice(Decimal),

    #[error("Unknown asset type '{0}'")]
    UnknownAssetType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by the persistence layer.
///
/// Details are carried as strings so the core stays independent of the
/// concrete store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The portfolio file exists but could not be read.
    #[error("Failed to read portfolio file: {0}")]
    ReadFailed(String),

    /// The portfolio file could not be written.
    #[error("Failed to write portfolio file: {0}")]
    WriteFailed(String),

    /// The file contents are not a JSON array of records.
    #[error("Malformed portfolio file: {0}")]
    Malformed(String),
}
