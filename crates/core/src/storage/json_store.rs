use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::storage_model::AssetRecord;
use super::storage_traits::PortfolioStoreTrait;
use crate::errors::{Result, StorageError};

const INDENT: &[u8] = b"    ";

/// Flat-file store holding the portfolio as a pretty-printed JSON array.
///
/// Writes overwrite the file in place. There is no locking: two processes
/// saving to the same path race and the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PortfolioStoreTrait for JsonFileStore {
    fn read_records(&self) -> Result<Option<Vec<Value>>> {
        if !self.path.exists() {
            debug!("No portfolio file at {}", self.path.display());
            return Ok(None);
        }

        let raw = fs::read(&self.path)
            .map_err(|e| StorageError::ReadFailed(format!("{}: {}", self.path.display(), e)))?;

        let records: Vec<Value> = serde_json::from_slice(&raw)
            .map_err(|e| StorageError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        Ok(Some(records))
    }

    fn write_records(&self, records: &[AssetRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::WriteFailed(format!("{}: {}", parent.display(), e))
            })?;
        }

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut serializer)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, buf)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;

        debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
