//! Assets module - holding model and per-kind pricing rules.

mod assets_model;


// Re-export the public interface
pub use assets_model::{crypto_network_fee, Asset, AssetKind};
