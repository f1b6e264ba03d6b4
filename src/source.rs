// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where records come from.
//!
//! The engine only needs "the current ordered sequence of records". A source
//! is anything that can produce one: a JSON file on disk, or a vector already
//! in memory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::FundingRecord;

pub trait RecordSource {
    /// All records, in the source's own order.
    fn records(&self) -> Result<Vec<FundingRecord>>;
}

/// A JSON array of records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn records(&self) -> Result<Vec<FundingRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let records = parse_records(&content, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// Records already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<FundingRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<FundingRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn records(&self) -> Result<Vec<FundingRecord>> {
        Ok(self.records.clone())
    }
}

/// Decode a JSON array of records. `origin` only labels errors.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<FundingRecord>> {
    serde_json::from_str(content).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}
