//! Suite manifest loading
//!
//! Reads the suite list produced by test discovery. The manifest is a JSON
//! or YAML document with a top-level `suites` array.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::TestSuite;

/// Discovery output: the suites available for packing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteManifest {
    pub suites: Vec<TestSuite>,
}

impl SuiteManifest {
    /// Load a manifest from file, dispatching on extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let manifest: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML manifest: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON manifest: {}", path.display()))?
        };

        Ok(manifest)
    }

    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Total test cases across all suites
    pub fn test_count(&self) -> usize {
        self.suites.iter().map(|s| s.test_count()).sum()
    }
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
