//! Write one JSON file per country.

use imagery_schedule::{is_valid_identifier, to_json, ScheduleRecord};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid country identifier {0:?}")]
    InvalidName(String),

    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize schedule for {country}: {source}")]
    Serialize {
        country: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Output directory holding `<country>.json` files.
pub struct ScheduleStore {
    dir: PathBuf,
}

impl ScheduleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a country. Identifiers that would escape the
    /// directory are rejected.
    pub fn path_for(&self, country: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_identifier(country) {
            return Err(StoreError::InvalidName(country.to_string()));
        }
        Ok(self.dir.join(format!("{country}.json")))
    }

    /// Write the records as a 2-space indented JSON array, creating the
    /// directory on first use. Returns the file written.
    pub fn save(&self, country: &str, records: &[ScheduleRecord]) -> Result<PathBuf, StoreError> {
        let path = self.path_for(country)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut json = to_json(records).map_err(|source| StoreError::Serialize {
            country: country.to_string(),
            source,
        })?;
        json.push('\n');

        std::fs::write(&path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), records = records.len(), "saved schedule");
        Ok(path)
    }
}
