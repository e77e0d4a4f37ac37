//! Configuration module
//!
//! Handles the packing configuration and its file-backed defaults.

#![allow(dead_code)]

mod file;

pub use file::{AppConfig, ConfigFile};

use std::path::PathBuf;

/// Configuration for a single packing call
#[derive(Clone, Debug)]
pub struct PackConfig {
    /// Desired number of execution bundles
    pub num_bundles: usize,

    /// Allow-list: only these test identifiers are eligible, if set
    pub include_tests: Option<Vec<String>>,

    /// Deny-list: these test identifiers never run, if set
    pub exclude_tests: Option<Vec<String>>,

    /// Suite names that must always be emitted as one unsplit bundle
    pub keep_whole: Vec<String>,

    /// Per-test duration estimate source; selects time-based packing
    pub estimates_file: Option<PathBuf>,
}

impl PackConfig {
    pub fn new(num_bundles: usize) -> Self {
        Self {
            num_bundles,
            include_tests: None,
            exclude_tests: None,
            keep_whole: Vec::new(),
            estimates_file: None,
        }
    }

    /// Set the allow-list
    pub fn with_include(mut self, tests: Vec<String>) -> Self {
        self.include_tests = Some(tests);
        self
    }

    /// Set the deny-list
    pub fn with_exclude(mut self, tests: Vec<String>) -> Self {
        self.exclude_tests = Some(tests);
        self
    }

    /// Set the suite names exempt from splitting
    pub fn with_keep_whole(mut self, names: Vec<String>) -> Self {
        self.keep_whole = names;
        self
    }

    /// Set the duration-estimate source
    pub fn with_estimates_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.estimates_file = Some(path.into());
        self
    }

    /// Whether a suite name is exempt from splitting
    pub fn keeps_whole(&self, name: &str) -> bool {
        self.keep_whole.iter().any(|n| n == name)
    }

    /// The configured deny-list, sorted and deduplicated
    pub fn exclude_list(&self) -> Vec<String> {
        let mut list = self.exclude_tests.clone().unwrap_or_default();
        list.sort();
        list.dedup();
        list
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_config_builder() {
        let config = PackConfig::new(8)
            .with_include(vec!["t1".to_string()])
            .with_exclude(vec!["t2".to_string()])
            .with_keep_whole(vec!["UITests".to_string()])
            .with_estimates_file("timings.json");

        assert_eq!(config.num_bundles, 8);
        assert!(config.keeps_whole("UITests"));
        assert!(!config.keeps_whole("UnitTests"));
        assert_eq!(config.estimates_file, Some(PathBuf::from("timings.json")));
    }

    #[test]
    fn test_exclude_list_sorted_deduplicated() {
        let config = PackConfig::new(2).with_exclude(vec![
            "t3".to_string(),
            "t1".to_string(),
            "t3".to_string(),
        ]);
        assert_eq!(config.exclude_list(), vec!["t1", "t3"]);
    }

    #[test]
    fn test_exclude_list_empty_without_deny_list() {
        assert!(PackConfig::new(2).exclude_list().is_empty());
    }
}
