//! Test suite model
//!
//! A discovered, buildable test target as reported by suite discovery.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discovered test suite containing named test cases
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Stable path identifying the suite (map key across the run)
    pub path: String,

    /// Human-readable suite name, matched against the keep-whole set
    pub name: String,

    /// All test-case identifiers the suite contains, in discovery order
    pub test_cases: Vec<String>,

    /// Skip list inherited from prior configuration
    #[serde(default)]
    pub skipped_tests: Vec<String>,
}

impl TestSuite {
    /// Create a new suite with no test cases
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            test_cases: Vec::new(),
            skipped_tests: Vec::new(),
        }
    }

    /// Set the suite's test cases
    pub fn with_test_cases(mut self, test_cases: Vec<String>) -> Self {
        self.test_cases = test_cases;
        self
    }

    /// Set the suite's inherited skip list
    pub fn with_skipped_tests(mut self, skipped_tests: Vec<String>) -> Self {
        self.skipped_tests = skipped_tests;
        self
    }

    /// Total number of test cases in the suite
    pub fn test_count(&self) -> usize {
        self.test_cases.len()
    }
}

impl fmt::Display for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} tests)", self.name, self.test_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suite_builder() {
        let suite = TestSuite::new("build/AppTests.bin", "AppTests")
            .with_test_cases(ids(&["t1", "t2", "t3"]))
            .with_skipped_tests(ids(&["t3"]));

        assert_eq!(suite.path, "build/AppTests.bin");
        assert_eq!(suite.test_count(), 3);
        assert_eq!(suite.skipped_tests, ids(&["t3"]));
    }

    #[test]
    fn test_suite_display() {
        let suite =
            TestSuite::new("a", "AppTests").with_test_cases(ids(&["t1", "t2"]));
        assert_eq!(suite.to_string(), "AppTests (2 tests)");
    }

    #[test]
    fn test_suite_deserialize_without_skip_list() {
        let json = r#"{"path": "a", "name": "AppTests", "test_cases": ["t1"]}"#;
        let suite: TestSuite = serde_json::from_str(json).unwrap();
        assert!(suite.skipped_tests.is_empty());
    }
}
