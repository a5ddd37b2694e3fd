// crates/context-gauge-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for config loading, ranges, and output helpers.
// Purpose: Ensure bounded reads fail closed and argument parsing holds.
// Dependencies: context-gauge-cli main helpers, tempfile
// ============================================================================

//! ## Overview
//! Validates the CLI helper layer: bounded config reads, TOML override
//! loading, dense-range construction, default sweeps, and chart artifact
//! naming.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use context_gauge_core::DEFAULT_TOOL_COUNTS;
use context_gauge_core::ModelConfig;
use context_gauge_core::cycle_impact;
use context_gauge_core::project_monthly_cost;
use context_gauge_core::run_sweep;

use super::Cli;
use super::Commands;
use super::MAX_CONFIG_BYTES;
use super::ReadLimitError;
use super::chart_specs;
use super::dense_range;
use super::fmt_reduction;
use super::load_model_config;
use super::read_bytes_with_limit;
use super::swept_tools;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write config fixture");
    path
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "small.toml", "x = 1\n");
    let bytes = read_bytes_with_limit(&path, 64).unwrap();
    assert_eq!(bytes, b"x = 1\n");
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "large.toml", &"padding\n".repeat(16));
    let err = read_bytes_with_limit(&path, 16).unwrap_err();
    assert!(matches!(err, ReadLimitError::TooLarge { limit: 16, .. }));
}

#[test]
fn read_bytes_with_limit_surfaces_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_bytes_with_limit(&dir.path().join("absent.toml"), 64).unwrap_err();
    assert!(matches!(err, ReadLimitError::Io(_)));
}

// ============================================================================
// SECTION: Config Loading
// ============================================================================

#[test]
fn load_model_config_defaults_without_path() {
    let cfg = load_model_config(None).unwrap();
    assert_eq!(cfg, ModelConfig::default());
}

#[test]
fn load_model_config_applies_partial_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "override.toml", "[tokens]\nper_tool_schema = 120.0\n");
    let cfg = load_model_config(Some(&path)).unwrap();
    assert_eq!(cfg.tokens.per_tool_schema, 120.0);
    assert_eq!(cfg.tokens.base_prompt, ModelConfig::default().tokens.base_prompt);
}

#[test]
fn load_model_config_rejects_invalid_constants() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "invalid.toml", "[accuracy]\nstatic_base = 1.5\n");
    let err = load_model_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn load_model_config_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "broken.toml", "[tokens\nbase_prompt = 1\n");
    assert!(load_model_config(Some(&path)).is_err());
}

#[test]
fn load_model_config_rejects_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "huge.toml", &"# pad\n".repeat(MAX_CONFIG_BYTES));
    let err = load_model_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

// ============================================================================
// SECTION: Ranges & Defaults
// ============================================================================

#[test]
fn dense_range_builds_inclusive_stepped_range() {
    assert_eq!(dense_range(5, 11, 3).unwrap(), vec![5, 8, 11]);
}

#[test]
fn dense_range_rejects_zero_step() {
    assert!(dense_range(5, 10, 0).is_err());
}

#[test]
fn dense_range_rejects_inverted_bounds() {
    assert!(dense_range(10, 5, 1).is_err());
}

#[test]
fn swept_tools_defaults_to_standard_sweep() {
    assert_eq!(swept_tools(&[]), DEFAULT_TOOL_COUNTS.to_vec());
}

#[test]
fn swept_tools_uses_explicit_counts() {
    assert_eq!(swept_tools(&[5, 50]), vec![5, 50]);
}

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn cli_parses_comma_separated_tool_lists() {
    let cli = Cli::parse_from(["context-gauge", "sweep", "--tools", "5,10,20"]);
    let Commands::Sweep(command) = cli.command else {
        panic!("expected sweep command");
    };
    assert_eq!(command.tools, vec![5, 10, 20]);
}

#[test]
fn cli_accepts_global_config_flag_after_subcommand() {
    let cli = Cli::parse_from(["context-gauge", "crossover", "--config", "model.toml"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("model.toml")));
}

// ============================================================================
// SECTION: Chart Artifacts
// ============================================================================

#[test]
fn chart_specs_cover_all_artifacts_with_unique_names() {
    let cfg = ModelConfig::default();
    let report = run_sweep(&cfg, &DEFAULT_TOOL_COUNTS).unwrap();
    let projection = project_monthly_cost(&cfg, &DEFAULT_TOOL_COUNTS, 100_000, 3.0).unwrap();
    let impact = cycle_impact(&cfg, 50, cfg.cycles.min..=cfg.cycles.max).unwrap();
    let specs = chart_specs(&report, &projection, &impact);
    assert_eq!(specs.len(), 9);
    let names: BTreeSet<&str> = specs.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), specs.len(), "artifact names must be unique");
    assert!(names.iter().all(|name| name.ends_with(".svg")));
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

#[test]
fn fmt_reduction_renders_values_and_absence() {
    assert_eq!(fmt_reduction(Some(94.25)), "94.25%");
    assert_eq!(fmt_reduction(None), "n/a");
}
