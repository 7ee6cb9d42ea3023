// SPDX-License-Identifier: GPL-3.0-only

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_ID: &str = "dev.mariinkys.DexView";

const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("could not serialize the configuration: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub items_per_page: usize,
    /// Number of Pokédex entries reachable through pagination
    pub total_entries: u32,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
    pub cache_ttl_secs: u64,
    pub colored: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            total_entries: 151,
            request_timeout_secs: 10,
            max_concurrent_requests: 20,
            cache_ttl_secs: 3600,
            colored: true,
        }
    }
}

impl Config {
    /// `<config_dir>/dev.mariinkys.DexView/config.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join(CONFIG_FILE))
    }

    /// Loads the config at `path`, or at [`Config::default_path`] when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("Loading config from {}", path.display());
                ron::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Writes the config as pretty RON, creating the parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, self.to_ron()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Pages reachable with the current page size, never less than one
    pub fn total_pages(&self) -> u32 {
        // page sizes past u32::MAX all fit the whole index on one page
        let page_size = u32::try_from(self.items_per_page)
            .unwrap_or(u32::MAX)
            .max(1);
        self.total_entries.div_ceil(page_size).max(1)
    }
}
