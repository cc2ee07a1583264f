//! Storage module - persisted record format and the JSON file store.

mod json_store;
mod storage_model;
mod storage_traits;

pub use json_store::JsonFileStore;
pub use storage_model::AssetRecord;
pub use storage_traits::PortfolioStoreTrait;
