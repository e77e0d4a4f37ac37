//! Count-based packing
//!
//! Splits large suites into roughly equal-sized chunks of test cases and
//! keeps small or exempt suites whole.

use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;

use super::filter::eligible_tests;
use super::{sorted_dedup, PackError};
use crate::config::PackConfig;
use crate::models::{ExecutionBundle, TestSuite};

/// Pack suites into bundles of roughly `total / num_bundles` tests each.
///
/// Suites in the keep-whole set, and suites whose eligible count already
/// fits the global chunk size, are emitted unsplit at the head of the
/// sequence; every other suite is sliced into contiguous chunks appended
/// at the tail.
pub fn pack_by_count(
    suites: &[TestSuite],
    config: &PackConfig,
) -> Result<Vec<ExecutionBundle>, PackError> {
    if suites.is_empty() {
        return Err(PackError::NoTestSuites);
    }

    // Pair each suite with its eligible set once, so the ordering pass and
    // the chunking pass agree on a single filtering result.
    let mut ranked: Vec<(&TestSuite, Vec<String>)> = suites
        .iter()
        .map(|suite| {
            let eligible = eligible_tests(
                &suite.test_cases,
                config.include_tests.as_deref(),
                config.exclude_tests.as_deref(),
            );
            (suite, eligible)
        })
        .collect();
    ranked.sort_by_key(|(_, eligible)| Reverse(eligible.len()));

    let total: usize = ranked
        .iter()
        .filter(|(suite, _)| !config.keeps_whole(&suite.name))
        .map(|(_, eligible)| eligible.len())
        .sum();
    let target = std::cmp::max(1, total / config.num_bundles.max(1));

    debug!(
        "packing {} eligible tests from {} suites at {} per chunk",
        total,
        ranked.len(),
        target
    );

    // Unsplit bundles go to the front list, which is reversed on concat so
    // that the last one processed ends up first, matching repeated
    // insertion at the head of the sequence.
    let mut front: Vec<ExecutionBundle> = Vec::new();
    let mut tail: Vec<ExecutionBundle> = Vec::new();
    let exclude_list = config.exclude_list();

    for (suite, eligible) in &ranked {
        let unsplit = config.keeps_whole(&suite.name)
            || (!eligible.is_empty() && eligible.len() <= target);

        if unsplit {
            front.push(ExecutionBundle::new(
                (*suite).clone(),
                exclude_list.clone(),
            ));
            continue;
        }

        let mut chunked = eligible.clone();
        chunked.sort();

        let mut packed = 0;
        for chunk in chunked.chunks(target) {
            let chunk_set: HashSet<&str> =
                chunk.iter().map(String::as_str).collect();
            let mut skipped: Vec<String> = suite
                .test_cases
                .iter()
                .filter(|t| !chunk_set.contains(t.as_str()))
                .cloned()
                .collect();
            skipped.extend(suite.skipped_tests.iter().cloned());

            tail.push(ExecutionBundle::new(
                (*suite).clone(),
                sorted_dedup(skipped),
            ));
            packed += chunk.len();
        }
        debug_assert_eq!(packed, chunked.len());
    }

    front.reverse();
    front.extend(tail);
    Ok(front)
}
