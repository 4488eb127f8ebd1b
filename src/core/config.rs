//! Configuration management for the CAALM search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Page size when the request gives none
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum page size
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum candidates fetched from the source per request
    #[serde(default = "default_candidate_cap")]
    pub candidate_cap: usize,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Document source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// JSON array of documents to search
    #[serde(default = "default_documents_path")]
    pub documents_path: PathBuf,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

fn default_candidate_cap() -> usize {
    200
}

fn default_max_query_length() -> usize {
    500
}

fn default_documents_path() -> PathBuf {
    PathBuf::from("./documents.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            candidate_cap: default_candidate_cap(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            documents_path: default_documents_path(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. CAALM_CONFIG env var
    /// 2. XDG config file (~/.config/caalm-search/config.toml)
    /// 3. ./caalm-search.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CAALM_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("caalm-search.toml").exists() {
                Self::from_file("caalm-search.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("CAALM_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("CAALM_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Search configuration
        if let Ok(limit) = env::var("CAALM_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("CAALM_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(cap) = env::var("CAALM_CANDIDATE_CAP") {
            if let Ok(c) = cap.parse() {
                self.search.candidate_cap = c;
            }
        }
        if let Ok(max_query_len) = env::var("CAALM_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        // Source configuration
        if let Ok(path) = env::var("CAALM_DOCUMENTS_PATH") {
            self.source.documents_path = PathBuf::from(path);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SearchError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(SearchError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(SearchError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.candidate_cap == 0 {
            return Err(SearchError::ConfigError(
                "Candidate cap must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(SearchError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Candidate cap: {}", self.search.candidate_cap);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Documents: {:?}", self.source.documents_path);
    }
}
