//! Time-based packing
//!
//! Produces one duration-annotated bundle per suite, ordered so a greedy
//! longest-work-first scheduler can assign them across workers.

use std::path::Path;
use tracing::{debug, warn};

use super::estimates::load_estimates;
use super::filter::eligible_tests;
use super::PackError;
use crate::config::PackConfig;
use crate::models::{ExecutionBundle, TestSuite};

/// Duration assumed for a test with no recorded estimate
const DEFAULT_TEST_DURATION: f64 = 1.0;

/// Pack one bundle per suite, tagged with its estimated execution time.
///
/// No splitting occurs; the output is sorted by descending duration so the
/// caller can hand bundles out longest-first. The bundle count is not
/// bounded to the configured bundle count.
pub fn pack_by_time(
    suites: &[TestSuite],
    config: &PackConfig,
    estimates_path: &Path,
) -> Result<Vec<ExecutionBundle>, PackError> {
    if suites.is_empty() {
        return Err(PackError::NoTestSuites);
    }

    let estimates = load_estimates(estimates_path)?;
    debug!(
        "loaded {} duration estimates from {}",
        estimates.len(),
        estimates_path.display()
    );

    let exclude_list = config.exclude_list();
    let mut bundles: Vec<ExecutionBundle> = Vec::with_capacity(suites.len());

    for suite in suites {
        let eligible = eligible_tests(
            &suite.test_cases,
            config.include_tests.as_deref(),
            config.exclude_tests.as_deref(),
        );

        let duration = if eligible.is_empty() {
            None
        } else {
            let mut sum = 0.0;
            for test in &eligible {
                match estimates.get(test) {
                    Some(estimate) => sum += estimate,
                    None => {
                        warn!(
                            "no duration estimate for {test}; assuming {DEFAULT_TEST_DURATION}s"
                        );
                        sum += DEFAULT_TEST_DURATION;
                    }
                }
            }
            Some(sum)
        };

        bundles.push(
            ExecutionBundle::new(suite.clone(), exclude_list.clone())
                .with_estimated_duration(duration),
        );
    }

    bundles.sort_by(|a, b| {
        b.estimated_duration
            .unwrap_or(0.0)
            .total_cmp(&a.estimated_duration.unwrap_or(0.0))
    });
    Ok(bundles)
}
