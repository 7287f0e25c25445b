//! Configuration management with layered hierarchy

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of entries in the featured view
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Default contact destination for contact-required projects
pub const DEFAULT_CONTACT_URL: &str = "/#contact";

/// Default number of technology badges shown per card
pub const DEFAULT_PRIMARY_BADGES: usize = 3;

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "folio.yaml";

/// Folio configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Entries shown by `folio featured`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_limit: Option<usize>,

    /// Where contact-required projects send visitors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,

    /// Technology badges shown per project card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_badges: Option<usize>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(code(folio::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    #[diagnostic(
        code(folio::config::parse),
        help("Config files are YAML maps, e.g. `featured_limit: 6`")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (accessors below)

        // 2. Global user config (~/.config/folio/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            config.merge_file(&global_path);
        }

        // 3. Local config (./folio.yaml)
        config.merge_file(&Self::local_config_path());

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Read a single config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid, empty config
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config layer built from `FOLIO_*` variables
    fn from_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            default_format: lookup("FOLIO_FORMAT"),
            contact_url: lookup("FOLIO_CONTACT_URL"),
            ..Default::default()
        };

        if let Some(raw) = lookup("FOLIO_FEATURED_LIMIT") {
            match raw.trim().parse() {
                Ok(limit) => config.featured_limit = Some(limit),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid FOLIO_FEATURED_LIMIT"),
            }
        }

        config
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::from_file(path) {
            Ok(layer) => {
                tracing::debug!(path = %path.display(), "loaded config layer");
                self.merge(layer);
            }
            Err(e) => tracing::warn!(error = %e, "skipping config file"),
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Get the path to the local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.featured_limit.is_some() {
            self.featured_limit = other.featured_limit;
        }
        if other.contact_url.is_some() {
            self.contact_url = other.contact_url;
        }
        if other.primary_badges.is_some() {
            self.primary_badges = other.primary_badges;
        }
    }

    pub fn featured_limit(&self) -> usize {
        self.featured_limit.unwrap_or(DEFAULT_FEATURED_LIMIT)
    }

    pub fn contact_url(&self) -> &str {
        self.contact_url.as_deref().unwrap_or(DEFAULT_CONTACT_URL)
    }

    pub fn primary_badges(&self) -> usize {
        self.primary_badges.unwrap_or(DEFAULT_PRIMARY_BADGES)
    }

    /// Look up a key by name, with defaults applied
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_format" => self.default_format.clone(),
            "featured_limit" => Some(self.featured_limit().to_string()),
            "contact_url" => Some(self.contact_url().to_string()),
            "primary_badges" => Some(self.primary_badges().to_string()),
            _ => None,
        }
    }
}
