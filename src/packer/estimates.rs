//! Duration-estimate loading
//!
//! Reads the per-test duration estimate source used by time-based packing.

use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use super::PackError;

/// Load a JSON object mapping test identifiers to estimated durations.
///
/// Tests absent from the mapping are not an error here; the packer
/// substitutes a default for them. Negative values are kept but flagged.
pub fn load_estimates(path: &Path) -> Result<HashMap<String, f64>, PackError> {
    let content = std::fs::read_to_string(path).map_err(|source| PackError::EstimateRead {
        path: path.to_path_buf(),
        source,
    })?;

    let estimates: HashMap<String, f64> =
        serde_json::from_str(&content).map_err(|source| PackError::EstimateParse {
            path: path.to_path_buf(),
            source,
        })?;

    for (test, duration) in &estimates {
        if *duration < 0.0 {
            warn!("negative duration estimate {duration} for {test}");
        }
    }

    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_estimates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, r#"{"t1": 2.0, "t2": 0.5}"#).unwrap();

        let estimates = load_estimates(&path).unwrap();
        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates.get("t1"), Some(&2.0));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_estimates(&path).unwrap_err();
        assert!(matches!(err, PackError::EstimateRead { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(matches!(
            load_estimates(&path).unwrap_err(),
            PackError::EstimateParse { .. }
        ));
    }

    #[test]
    fn test_non_numeric_duration_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timings.json");
        std::fs::write(&path, r#"{"t1": "fast"}"#).unwrap();

        assert!(matches!(
            load_estimates(&path).unwrap_err(),
            PackError::EstimateParse { .. }
        ));
    }
}
