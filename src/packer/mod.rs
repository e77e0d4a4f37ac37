//! Bundle packing strategies
//!
//! Converts discovered test suites into an ordered sequence of execution
//! bundles, balanced by test count or by estimated duration.

mod count;
mod estimates;
mod filter;
mod time;

pub use count::pack_by_count;
pub use estimates::load_estimates;
pub use filter::eligible_tests;
pub use time::pack_by_time;

use std::path::PathBuf;
use thiserror::Error;

use crate::config::PackConfig;
use crate::models::{ExecutionBundle, TestSuite};

/// Errors a packing call can fail with
#[derive(Debug, Error)]
pub enum PackError {
    #[error("no test suites discovered; check that the build produced test targets")]
    NoTestSuites,

    #[error("failed to read duration estimates from {}: {source}", path.display())]
    EstimateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse duration estimates from {}: {source}", path.display())]
    EstimateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Packing strategy, selected once per call from the configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackStrategy {
    /// Split suites into roughly equal-sized chunks
    ByCount,
    /// One bundle per suite, annotated with estimated duration
    ByTime(PathBuf),
}

impl PackStrategy {
    /// Select the strategy the configuration calls for
    pub fn for_config(config: &PackConfig) -> Self {
        match &config.estimates_file {
            Some(path) => PackStrategy::ByTime(path.clone()),
            None => PackStrategy::ByCount,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackStrategy::ByCount => "count",
            PackStrategy::ByTime(_) => "time",
        }
    }
}

/// Pack suites into execution bundles using the configured strategy
pub fn pack(
    suites: &[TestSuite],
    config: &PackConfig,
) -> Result<Vec<ExecutionBundle>, PackError> {
    match PackStrategy::for_config(config) {
        PackStrategy::ByCount => pack_by_count(suites, config),
        PackStrategy::ByTime(path) => pack_by_time(suites, config, &path),
    }
}

/// Sort and deduplicate a skip list before it lands in a bundle
pub(crate) fn sorted_dedup(mut list: Vec<String>) -> Vec<String> {
    list.sort();
    list.dedup();
    list
}
