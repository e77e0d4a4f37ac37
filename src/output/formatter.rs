//! Output formatters for pack plans
//!
//! Provides JSON, Table, CSV, and summary output formats.

#![allow(dead_code)]

use crate::models::{ExecutionBundle, PackPlan};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Pack plan formatter
pub struct PlanFormatter {
    format: OutputFormat,
}

impl PlanFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a full pack plan
    pub fn format_plan(&self, plan: &PackPlan) -> String {
        match self.format {
            OutputFormat::Table => self.format_plan_table(plan),
            OutputFormat::Json => serde_json::to_string(plan).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(plan).unwrap_or_default(),
            OutputFormat::Csv => self.format_plan_csv(plan),
            OutputFormat::Summary => self.format_plan_summary(plan),
        }
    }

    fn format_plan_table(&self, plan: &PackPlan) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\nPack plan ({} strategy, {} bundles requested)\n",
            plan.strategy, plan.requested_bundles
        ));
        out.push_str(&format!("{:-<72}\n", ""));
        out.push_str(&format!(
            "{:>3}  {:28} {:>8} {:>9} {:>12}\n",
            "#", "Suite", "Tests", "Skipped", "Est (s)"
        ));
        out.push_str(&format!("{:-<72}\n", ""));

        for (index, bundle) in plan.bundles.iter().enumerate() {
            let estimate = bundle
                .estimated_duration
                .map(|d| format!("{d:.1}"))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{:>3}  {:28} {:>8} {:>9} {:>12}\n",
                index + 1,
                bundle.suite.name,
                bundle.runnable_count(),
                bundle.skipped_tests.len(),
                estimate
            ));
        }

        out.push_str(&format!("{:-<72}\n", ""));
        out.push_str(&format!(
            "{} bundles | {} suites | {} runnable tests\n",
            plan.bundles.len(),
            plan.suite_count(),
            plan.total_runnable()
        ));
        out
    }

    fn format_plan_csv(&self, plan: &PackPlan) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header = writer.write_record([
            "bundle",
            "suite",
            "path",
            "runnable_tests",
            "skipped_tests",
            "estimated_secs",
        ]);
        if header.is_err() {
            return String::new();
        }

        for (index, bundle) in plan.bundles.iter().enumerate() {
            let estimate = bundle
                .estimated_duration
                .map(|d| d.to_string())
                .unwrap_or_default();
            let record = writer.write_record([
                (index + 1).to_string(),
                bundle.suite.name.clone(),
                bundle.suite.path.clone(),
                bundle.runnable_count().to_string(),
                bundle.skipped_tests.len().to_string(),
                estimate,
            ]);
            if record.is_err() {
                return String::new();
            }
        }

        writer
            .into_inner()
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    fn format_plan_summary(&self, plan: &PackPlan) -> String {
        let mut out = String::new();
        out.push_str(&format!("Strategy:        {}\n", plan.strategy));
        out.push_str(&format!("Bundles:         {}\n", plan.bundles.len()));
        out.push_str(&format!("Suites:          {}\n", plan.suite_count()));
        out.push_str(&format!("Runnable tests:  {}\n", plan.total_runnable()));

        if let Some(largest) = plan
            .bundles
            .iter()
            .max_by_key(|b| b.runnable_count())
        {
            out.push_str(&format!("Largest bundle:  {largest}\n"));
        }
        if let Some(total) = plan.total_estimated() {
            out.push_str(&format!("Estimated total: {total:.1}s\n"));
        }
        out
    }

    /// Format a single bundle line
    pub fn format_bundle(&self, bundle: &ExecutionBundle) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(bundle).unwrap_or_default(),
            OutputFormat::JsonPretty => {
                serde_json::to_string_pretty(bundle).unwrap_or_default()
            }
            _ => bundle.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestSuite;

    fn plan() -> PackPlan {
        let suite = TestSuite::new("build/A.bin", "A")
            .with_test_cases(vec!["t1".to_string(), "t2".to_string()]);
        let bundles = vec![
            ExecutionBundle::new(suite.clone(), vec!["t2".to_string()])
                .with_estimated_duration(Some(4.5)),
            ExecutionBundle::new(suite, vec!["t1".to_string()]),
        ];
        PackPlan::new("time", 2, bundles)
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(
            OutputFormat::from_str("JSON-Pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("bogus"), None);
    }

    #[test]
    fn test_table_lists_every_bundle() {
        let output = PlanFormatter::new(OutputFormat::Table).format_plan(&plan());
        assert!(output.contains("time strategy"));
        assert!(output.contains("4.5"));
        assert!(output.contains("2 bundles"));
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let output = PlanFormatter::new(OutputFormat::Csv).format_plan(&plan());
        let lines: Vec<&str> = output.trim().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("bundle,suite,path"));
        assert!(lines[1].contains("build/A.bin"));
    }

    #[test]
    fn test_json_round_trips() {
        let output = PlanFormatter::new(OutputFormat::Json).format_plan(&plan());
        let parsed: PackPlan = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.bundles.len(), 2);
        assert_eq!(parsed.strategy, "time");
    }

    #[test]
    fn test_summary_totals() {
        let output = PlanFormatter::new(OutputFormat::Summary).format_plan(&plan());
        assert!(output.contains("Bundles:         2"));
        assert!(output.contains("Estimated total: 4.5s"));
    }
}
