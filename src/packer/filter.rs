//! Test selection filtering
//!
//! Computes the subset of a suite's tests eligible to run.

use std::collections::HashSet;

/// Apply the allow-list, then the deny-list, to a suite's full test list.
///
/// Returns the eligible identifiers in input order. An empty result is
/// valid and means the suite contributes nothing.
pub fn eligible_tests(
    all_tests: &[String],
    include: Option<&[String]>,
    exclude: Option<&[String]>,
) -> Vec<String> {
    let include: Option<HashSet<&str>> =
        include.map(|list| list.iter().map(String::as_str).collect());
    let exclude: Option<HashSet<&str>> =
        exclude.map(|list| list.iter().map(String::as_str).collect());

    all_tests
        .iter()
        .filter(|t| {
            include
                .as_ref()
                .map_or(true, |set| set.contains(t.as_str()))
        })
        .filter(|t| {
            exclude
                .as_ref()
                .map_or(true, |set| !set.contains(t.as_str()))
        })
        .cloned()
        .collect()
}
