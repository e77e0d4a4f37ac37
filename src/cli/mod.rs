//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Test suite bundle packing tool for parallel test execution
#[derive(Parser, Debug)]
#[command(name = "testpack")]
#[command(version = "0.1.0")]
#[command(about = "Pack discovered test suites into balanced execution bundles")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack suites from a discovery manifest into execution bundles
    Pack(PackArgs),

    /// List the suites in a discovery manifest
    List(ListArgs),

    /// Manage configuration files
    Config(ConfigArgs),
}

/// Arguments for pack command
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Suite discovery manifest (JSON or YAML)
    #[arg(short, long)]
    pub manifest: String,

    /// Number of execution bundles to produce
    #[arg(short = 'n', long)]
    pub bundles: Option<usize>,

    /// Only these tests are eligible (comma-separated identifiers)
    #[arg(long)]
    pub include: Option<String>,

    /// Never run these tests (comma-separated identifiers)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Suite names that must not be split (comma-separated)
    #[arg(long)]
    pub keep_whole: Option<String>,

    /// JSON file of per-test duration estimates (enables time-based packing)
    #[arg(long)]
    pub estimates: Option<String>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save the JSON plan to file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Suite discovery manifest (JSON or YAML)
    #[arg(short, long)]
    pub manifest: String,

    /// Show individual test identifiers
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./testpack.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the active configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file path (defaults to the standard locations)
        #[arg(short, long)]
        file: Option<String>,
    },
}

/// Split a comma-separated flag value into identifiers
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("t1,t2, t3"), vec!["t1", "t2", "t3"]);
        assert_eq!(parse_list("t1,,t2,"), vec!["t1", "t2"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_pack_args_parse() {
        let args = Args::parse_from([
            "testpack", "pack", "--manifest", "suites.json", "-n", "8",
            "--exclude", "t1,t2",
        ]);
        match args.command {
            Command::Pack(pack) => {
                assert_eq!(pack.manifest, "suites.json");
                assert_eq!(pack.bundles, Some(8));
                assert_eq!(pack.exclude.as_deref(), Some("t1,t2"));
            }
            _ => panic!("expected pack command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let args =
            Args::parse_from(["testpack", "list", "--manifest", "suites.json", "-v"]);
        assert!(args.verbose);
    }
}
