//! testpack - Test Suite Bundle Packing Tool
//!
//! A CLI tool that distributes discovered test cases across a fixed number
//! of execution bundles so parallel test workers finish in roughly balanced
//! time or workload.
//!
//! ## Features
//!
//! - Count-based packing: roughly equal-sized contiguous chunks per suite
//! - Time-based packing: one duration-annotated bundle per suite, sorted
//!   for greedy longest-work-first assignment
//! - Allow-list / deny-list test selection and keep-whole suite exemptions
//! - Multiple output formats (Table, JSON, CSV, summary)
//!
//! ## Usage
//!
//! ```bash
//! # Pack a discovery manifest into 4 bundles
//! testpack pack --manifest suites.json --bundles 4
//!
//! # Time-based packing from recorded durations
//! testpack pack --manifest suites.json --estimates timings.json
//!
//! # Never split the UI suite, skip two flaky tests
//! testpack pack --manifest suites.json --keep-whole UITests \
//!     --exclude "Flaky/testUpload,Flaky/testSync"
//!
//! # Inspect a manifest
//! testpack list --manifest suites.json --detailed
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

mod cli;
mod config;
mod manifest;
mod models;
mod output;
mod packer;
mod utils;

use cli::Args;
use config::{ConfigFile, PackConfig};
use manifest::SuiteManifest;
use models::PackPlan;
use output::{OutputFormat, PlanFormatter};
use packer::PackStrategy;
use utils::logger::{init_logger, LogLevel};
use utils::timer::Timer;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    match args.command {
        cli::Command::Pack(pack_args) => run_pack(pack_args)?,
        cli::Command::List(list_args) => list_suites(list_args)?,
        cli::Command::Config(config_args) => manage_config(config_args)?,
    }

    Ok(())
}

fn run_pack(args: cli::PackArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let pack_config = build_pack_config(&args, &file_config);
    if pack_config.num_bundles == 0 {
        anyhow::bail!("--bundles must be at least 1");
    }

    let manifest = SuiteManifest::load(&args.manifest)?;

    info!(
        "Packing {} suites ({} tests) into {} bundles",
        manifest.suite_count(),
        manifest.test_count(),
        pack_config.num_bundles
    );

    let strategy = PackStrategy::for_config(&pack_config);
    let timer = Timer::start("pack");
    let bundles = packer::pack(&manifest.suites, &pack_config)?;
    timer.stop();

    let plan = PackPlan::new(strategy.name(), pack_config.num_bundles, bundles);

    let format_name = args
        .format
        .clone()
        .unwrap_or_else(|| file_config.app.format.clone());
    let formatter = PlanFormatter::new(
        OutputFormat::from_str(&format_name).unwrap_or(OutputFormat::Table),
    );
    println!("{}", formatter.format_plan(&plan));

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&plan)?)?;
        println!("✓ Plan saved to: {path}");
    }

    Ok(())
}

/// Layer CLI flags over the config file's defaults
fn build_pack_config(args: &cli::PackArgs, file: &ConfigFile) -> PackConfig {
    let mut config = file.to_pack_config();

    if let Some(bundles) = args.bundles {
        config.num_bundles = bundles;
    }
    if let Some(include) = &args.include {
        config = config.with_include(cli::parse_list(include));
    }
    if let Some(exclude) = &args.exclude {
        config = config.with_exclude(cli::parse_list(exclude));
    }
    if let Some(keep_whole) = &args.keep_whole {
        config = config.with_keep_whole(cli::parse_list(keep_whole));
    }
    if let Some(estimates) = &args.estimates {
        config = config.with_estimates_file(estimates);
    }

    config
}

fn list_suites(args: cli::ListArgs) -> Result<()> {
    let manifest = SuiteManifest::load(&args.manifest)?;

    println!("\nDiscovered test suites ({} total)\n", manifest.suite_count());
    println!("{:-<64}", "");

    for suite in &manifest.suites {
        println!(
            "  {:32} {:>5} tests {:>4} skipped",
            suite.name,
            suite.test_count(),
            suite.skipped_tests.len()
        );
        if args.detailed {
            for test in &suite.test_cases {
                println!("      - {test}");
            }
        }
    }

    println!("{:-<64}", "");
    println!("{} tests total\n", manifest.test_count());

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let config = ConfigFile::load_default()?;
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./testpack.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
