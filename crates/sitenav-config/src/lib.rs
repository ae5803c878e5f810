//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! The `site.base_path` value supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## File Format
//!
//! ```toml
//! [site]
//! base_path = "/nf-neuro"
//!
//! [order]
//! "" = ["getting-started", "guides"]
//! "guides" = ["prototyping", "production"]
//! ```

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_sidebar::{OrderingPolicy, SidebarBuilder};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sitenav.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Sibling ordering rules keyed by section path (`""` = top level).
    pub order: OrderingPolicy,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL prefix the site is served under (e.g., `/nf-neuro`).
    ///
    /// Empty for sites served from the root. Supports `${VAR}` expansion.
    pub base_path: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_path`").
        field: String,
        /// Error message (e.g., "`${SITE_BASE}` not set").
        message: String,
    },
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sitenav.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, expansion references an unset variable, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Search for a config file in the current directory and parents.
    #[must_use]
    pub fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_config_from(&start)
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load and validate configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.site.base_path = expand::expand_env(&config.site.base_path, "site.base_path")?;
        config.validate()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// The base path must be empty or start with `/`; trailing slashes are
    /// stripped here so downstream link concatenation never double-slashes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the base path is malformed.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let trimmed_len = self.site.base_path.trim_end_matches('/').len();
        if trimmed_len > 0 && !self.site.base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_path must start with '/', got '{}'",
                self.site.base_path
            )));
        }
        self.site.base_path.truncate(trimmed_len);
        Ok(())
    }

    /// Create a [`SidebarBuilder`] from this configuration.
    #[must_use]
    pub fn sidebar_builder(&self) -> SidebarBuilder {
        SidebarBuilder::new(self.site.base_path.clone(), self.order.clone())
    }
}
