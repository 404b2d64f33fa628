// src/config.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "site.toml";

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_workers() -> usize {
    8
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid bind address '{0}'")]
    BindAddr(String),
    #[error("invalid worker count '{0}'")]
    Workers(String),
}

/// Server settings from `site.toml`, with env overrides on top.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    /// JSON file replacing the bundled property fixtures.
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Extra thumbnail key -> asset URL entries.
    #[serde(default)]
    pub images: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_workers: default_max_workers(),
            fixtures_path: None,
            log_filter: default_log_filter(),
            images: HashMap::new(),
        }
    }
}

impl Config {
    /// Reads `$SITE_CONFIG` (or `site.toml`) if it exists, then applies
    /// `SITE_BIND` and `SITE_WORKERS`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("SITE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Config::default()
        };

        config.with_overrides(env::var("SITE_BIND").ok(), env::var("SITE_WORKERS").ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        workers: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(bind) = bind {
            self.bind_addr = bind;
        }
        if let Some(raw) = workers {
            self.max_workers = raw
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Workers(raw))?;
        }
        if self.max_workers == 0 {
            return Err(ConfigError::Workers(self.max_workers.to_string()));
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::BindAddr(self.bind_addr.clone()))
    }
}
