/// TOML configuration.
///
/// Read from `<config_dir>/config.toml` unless a path is given. Every field has a
/// default, so a missing file or a partial file is fine.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::recent::{MAX_RECENT, RECENT_STORAGE_KEY};
use crate::search::{MAX_RESULTS, MIN_QUERY_LEN, SearchOptions};

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub recent: RecentConfig,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueConfig {
    /// JSON catalogue file; the built-in catalogue when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_min_query_len() -> usize { MIN_QUERY_LEN }
fn default_max_results() -> usize { MAX_RESULTS }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            min_query_len: self.min_query_len,
            limit: self.max_results,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecentConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory holding `storage.json`; the platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_max_entries() -> usize { MAX_RECENT }
fn default_storage_key() -> String { RECENT_STORAGE_KEY.to_string() }

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            storage_key: default_storage_key(),
            data_dir: None,
        }
    }
}

/// Default location of the config file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("org", "sun-dashboard", "sunmenu")
        .map_or_else(|| PathBuf::from("config.toml"), |dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. The default location may be absent, in which
/// case defaults are used.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML for [`Config`].
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path();
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("reading config {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", config_path.display()))?;
    log::debug!("Config: loaded {}", config_path.display());
    Ok(config)
}
