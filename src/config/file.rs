//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::PackConfig;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./testpack.yaml",
    "./testpack.yml",
    "./.testpack.yaml",
    "./.testpack/config.yaml",
    "~/.config/testpack/config.yaml",
    "~/.testpack.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
        }
    }
}

/// Default packing settings applied when the CLI leaves them unset
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default number of execution bundles
    pub default_bundles: usize,

    /// Default output format
    pub format: String,

    /// Allow-list applied to every packing call
    #[serde(default)]
    pub include_tests: Vec<String>,

    /// Deny-list applied to every packing call
    #[serde(default)]
    pub exclude_tests: Vec<String>,

    /// Suite names that must never be split
    #[serde(default)]
    pub keep_whole: Vec<String>,

    /// Duration-estimate source; selects time-based packing when present
    #[serde(default)]
    pub estimates_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_bundles: 4,
            format: "table".to_string(),
            include_tests: Vec::new(),
            exclude_tests: Vec::new(),
            keep_whole: Vec::new(),
            estimates_file: None,
        }
    }
}

impl ConfigFile {
    /// Create a new config file with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        for location in CONFIG_LOCATIONS {
            let path = expand_path(location);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }

        if self.app.default_bundles == 0 {
            anyhow::bail!("default_bundles must be at least 1");
        }

        Ok(())
    }

    /// Generate example configuration
    pub fn example() -> Self {
        Self {
            version: "1.0".to_string(),
            app: AppConfig {
                default_bundles: 4,
                format: "table".to_string(),
                include_tests: Vec::new(),
                exclude_tests: vec!["FlakyTests/testUpload".to_string()],
                keep_whole: vec!["UITests".to_string()],
                estimates_file: None,
            },
        }
    }

    /// Build a packing configuration from the file's defaults
    pub fn to_pack_config(&self) -> PackConfig {
        let mut config = PackConfig::new(self.app.default_bundles);
        if !self.app.include_tests.is_empty() {
            config = config.with_include(self.app.include_tests.clone());
        }
        if !self.app.exclude_tests.is_empty() {
            config = config.with_exclude(self.app.exclude_tests.clone());
        }
        if !self.app.keep_whole.is_empty() {
            config = config.with_keep_whole(self.app.keep_whole.clone());
        }
        if let Some(path) = &self.app.estimates_file {
            config = config.with_estimates_file(path);
        }
        config
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
