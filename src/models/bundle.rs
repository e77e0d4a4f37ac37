//! Execution bundle and pack plan models
//!
//! A bundle is one unit of packed work assigned to a single worker.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::TestSuite;

/// One unit of packed work, derived from a suite plus a skip list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionBundle {
    /// The originating suite (cloned, the caller's copy is never touched)
    pub suite: TestSuite,

    /// Identifiers within the suite that must not run in this bundle,
    /// sorted and deduplicated
    pub skipped_tests: Vec<String>,

    /// Estimated execution time, set only by time-based packing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<f64>,
}

impl ExecutionBundle {
    pub fn new(suite: TestSuite, skipped_tests: Vec<String>) -> Self {
        Self {
            suite,
            skipped_tests,
            estimated_duration: None,
        }
    }

    /// Tag the bundle with an estimated duration
    pub fn with_estimated_duration(mut self, duration: Option<f64>) -> Self {
        self.estimated_duration = duration;
        self
    }

    /// The tests this bundle will actually run: suite tests minus skip list
    pub fn runnable_tests(&self) -> Vec<String> {
        let skipped: HashSet<&str> =
            self.skipped_tests.iter().map(String::as_str).collect();
        self.suite
            .test_cases
            .iter()
            .filter(|t| !skipped.contains(t.as_str()))
            .cloned()
            .collect()
    }

    pub fn runnable_count(&self) -> usize {
        self.runnable_tests().len()
    }
}

impl fmt::Display for ExecutionBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} tests", self.suite.name, self.runnable_count())?;
        if let Some(duration) = self.estimated_duration {
            write!(f, ", est {duration:.1}s")?;
        }
        write!(f, "]")
    }
}

/// The full output of a packing call, ready for formatting or saving
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackPlan {
    /// Timestamp when the plan was produced
    pub generated_at: DateTime<Utc>,

    /// Strategy that produced the plan ("count" or "time")
    pub strategy: String,

    /// Bundle count the caller asked for
    pub requested_bundles: usize,

    /// Ordered bundle sequence, ready for worker assignment
    pub bundles: Vec<ExecutionBundle>,
}

impl PackPlan {
    pub fn new(
        strategy: impl Into<String>,
        requested_bundles: usize,
        bundles: Vec<ExecutionBundle>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            strategy: strategy.into(),
            requested_bundles,
            bundles,
        }
    }

    /// Total runnable tests across all bundles
    pub fn total_runnable(&self) -> usize {
        self.bundles.iter().map(|b| b.runnable_count()).sum()
    }

    /// Sum of estimated durations, if any bundle carries one
    pub fn total_estimated(&self) -> Option<f64> {
        let timed: Vec<f64> = self
            .bundles
            .iter()
            .filter_map(|b| b.estimated_duration)
            .collect();
        if timed.is_empty() {
            None
        } else {
            Some(timed.iter().sum())
        }
    }

    /// Number of distinct suites represented in the plan
    pub fn suite_count(&self) -> usize {
        let paths: HashSet<&str> =
            self.bundles.iter().map(|b| b.suite.path.as_str()).collect();
        paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn suite(name: &str, tests: &[&str]) -> TestSuite {
        TestSuite::new(format!("build/{name}.bin"), name).with_test_cases(ids(tests))
    }

    #[test]
    fn test_runnable_tests_excludes_skip_list() {
        let bundle =
            ExecutionBundle::new(suite("App", &["t1", "t2", "t3"]), ids(&["t2"]));
        assert_eq!(bundle.runnable_tests(), ids(&["t1", "t3"]));
        assert_eq!(bundle.runnable_count(), 2);
    }

    #[test]
    fn test_bundle_display() {
        let bundle = ExecutionBundle::new(suite("App", &["t1", "t2"]), Vec::new())
            .with_estimated_duration(Some(3.5));
        assert_eq!(bundle.to_string(), "App [2 tests, est 3.5s]");
    }

    #[test]
    fn test_bundle_serializes_without_absent_duration() {
        let bundle = ExecutionBundle::new(suite("App", &["t1"]), Vec::new());
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(!json.contains("estimated_duration"));
    }

    #[test]
    fn test_plan_totals() {
        let bundles = vec![
            ExecutionBundle::new(suite("A", &["t1", "t2"]), Vec::new())
                .with_estimated_duration(Some(2.0)),
            ExecutionBundle::new(suite("B", &["t3"]), Vec::new())
                .with_estimated_duration(Some(1.5)),
        ];
        let plan = PackPlan::new("time", 2, bundles);

        assert_eq!(plan.total_runnable(), 3);
        assert_eq!(plan.total_estimated(), Some(3.5));
        assert_eq!(plan.suite_count(), 2);
    }

    #[test]
    fn test_plan_total_estimated_absent_for_count_plans() {
        let plan = PackPlan::new(
            "count",
            2,
            vec![ExecutionBundle::new(suite("A", &["t1"]), Vec::new())],
        );
        assert_eq!(plan.total_estimated(), None);
    }
}
