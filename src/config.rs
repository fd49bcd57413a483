//! User configuration read from `smartpad.toml`.

use crate::membership::DEFAULT_BUCKETS;
use crate::utils::default_config_paths;
use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed `smartpad.toml`. Every field has a default, so an empty file is valid.
///
/// ```toml
/// dictionary = "dictionary.txt"
/// color = true
///
/// [suggest]
/// prefix_limit = 10
/// fuzzy_limit = 5
/// max_edit_distance = 2
///
/// [index]
/// buckets = 50000
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word file loaded at startup.
    pub dictionary: PathBuf,
    /// Colour REPL output (only applied when stdout is a terminal).
    pub color: bool,
    pub suggest: SuggestConfig,
    pub index: IndexConfig,
}

/// Limits for autocomplete and "did you mean" lists.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
    pub prefix_limit: usize,
    pub fuzzy_limit: usize,
    pub max_edit_distance: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub buckets: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("dictionary.txt"),
            color: true,
            suggest: SuggestConfig::default(),
            index: IndexConfig::default(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            prefix_limit: 10,
            fuzzy_limit: 5,
            max_edit_distance: 2,
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { buckets: DEFAULT_BUCKETS }
    }
}

impl Config {
    /// Parse config text.
    pub fn from_toml(s: &str) -> Result<Self> {
        let mut cfg: Config = toml::from_str(s)?;
        cfg.index.buckets = cfg.index.buckets.max(1);
        Ok(cfg)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        let cfg = Self::from_toml(&s).with_context(|| format!("Parsing {}", path.display()))?;
        info!("loaded config {}", path.display());
        Ok(cfg)
    }

    /// Load the first config found in `search`, or defaults when none exists.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn discover(search: &[PathBuf]) -> Result<Self> {
        for path in search {
            if path.exists() {
                return Self::load(path);
            }
        }
        Ok(Self::default())
    }

    /// [`Config::discover`] over the standard locations.
    pub fn discover_default() -> Result<Self> {
        Self::discover(&default_config_paths())
    }
}
