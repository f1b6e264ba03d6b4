// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration file support.
//!
//! Loads configuration from `.agrofondos.toml` in the current directory or
//! `<config dir>/agrofondos/config.toml`. Command-line flags override both.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::synonyms::SynonymDictionary;

/// Default dataset location when neither flag nor config names one.
pub const DEFAULT_DATA_PATH: &str = "data/convocatorias.json";

/// Default number of results shown by `search`.
pub const DEFAULT_MAX_RESULTS: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset path (JSON array of records).
    pub data: Option<PathBuf>,
    /// Extra synonym dictionary (JSON or TOML).
    pub synonyms: Option<PathBuf>,
    /// Maximum number of results to print.
    pub max_results: Option<usize>,
    /// Use the synonym file instead of the built-in vocabulary rather than on top of it.
    pub replace_builtin_synonyms: bool,
}

impl Config {
    /// Load configuration from files.
    ///
    /// Precedence (highest to lowest):
    /// 1. `.agrofondos.toml` in current directory
    /// 2. `<config dir>/agrofondos/config.toml`
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(".agrofondos.toml")) {
            return config;
        }

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("agrofondos").join("config.toml");
            if let Some(config) = Self::load_from_path(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Parse one file. Missing files are silent; malformed ones warn.
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                None
            }
        }
    }

    /// CLI value wins, then config, then the built-in default.
    pub fn data_path(&self, cli_value: Option<PathBuf>) -> PathBuf {
        cli_value
            .or_else(|| self.data.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// The dictionary the engine should use.
    ///
    /// Built-in vocabulary, with the synonym file (CLI path first, then
    /// config) merged on top or replacing it.
    pub fn dictionary(&self, cli_synonyms: Option<&Path>) -> Result<SynonymDictionary> {
        let path = cli_synonyms.or(self.synonyms.as_deref());
        let Some(path) = path else {
            return Ok(SynonymDictionary::builtin());
        };

        let custom = SynonymDictionary::load(path)?;
        if self.replace_builtin_synonyms {
            return Ok(custom);
        }
        let mut dictionary = SynonymDictionary::builtin();
        dictionary.merge(custom);
        Ok(dictionary)
    }
}
