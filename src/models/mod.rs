//! Data models for test bundle packing
//!
//! This module contains all data structures used throughout the application.

mod bundle;
mod suite;

pub use bundle::{ExecutionBundle, PackPlan};
pub use suite::TestSuite;
