//! Configuration for the zoo registry
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (zoo.toml)
//! - Environment variables (ZOO__*)
//!
//! ## Example config file (zoo.toml):
//! ```toml
//! [registry]
//! enforce_capacity = false
//! cascade_removal = false
//!
//! [reports]
//! severity_threshold = 7
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZooConfig {
    /// Registry rules
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Report settings
    #[serde(default)]
    pub reports: ReportConfig,
}

/// Registry rules that the data model leaves open
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Refuse admission once an enclosure holds `capacity` animals
    #[serde(default)]
    pub enforce_capacity: bool,

    /// Evict an animal from every enclosure when it is removed from the registry
    #[serde(default)]
    pub cascade_removal: bool,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Minimum severity listed by the medical log
    #[serde(default = "default_severity_threshold")]
    pub severity_threshold: u8,
}

fn default_severity_threshold() -> u8 {
    7
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            severity_threshold: default_severity_threshold(),
        }
    }
}

impl ZooConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layered(config_path, "ZOO")
    }

    /// Files first, then `{env_prefix}__SECTION__KEY` variables on top
    fn load_layered(config_path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for location in ["zoo.toml", ".zoo.toml", "config/zoo.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("org", "zoo", "zoo-registry") {
            let xdg_config = dirs.config_dir().join("zoo.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
