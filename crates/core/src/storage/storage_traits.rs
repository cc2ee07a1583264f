use serde_json::Value;

use super::storage_model::AssetRecord;
use crate::errors::Result;

/// Trait defining the contract for portfolio persistence.
///
/// Reading hands back raw JSON values so the caller can decide, record by
/// record, what to keep.
pub trait PortfolioStoreTrait: Send + Sync {
    /// Returns `Ok(None)` when nothing has been saved yet, and an error when
    /// the stored document cannot be read or is not a JSON array.
    fn read_records(&self) -> Result<Option<Vec<Value>>>;

    /// Replaces the stored document with `records`.
    fn write_records(&self, records: &[AssetRecord]) -> Result<()>;
}
