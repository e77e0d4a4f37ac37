//! Output formatting module
//!
//! Provides various output formats for pack plans.

mod formatter;

pub use formatter::{OutputFormat, PlanFormatter};
