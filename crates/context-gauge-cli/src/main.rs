// crates/context-gauge-cli/src/main.rs
// ============================================================================
// Module: Context Gauge CLI Entry Point
// Description: Command dispatcher for trade-off sweeps and benchmarks.
// Purpose: Run the analytical model and empirical benchmark from a terminal.
// Dependencies: clap, context-gauge-bench, context-gauge-core,
//               context-gauge-report, thiserror, toml
// ============================================================================

//! ## Overview
//! The Context Gauge CLI sweeps the analytical cost/latency/accuracy model
//! across tool-catalog sizes, projects monthly token spend, inspects cycle
//! sensitivity, renders SVG chart artifacts, and runs the independent
//! empirical token benchmark. Model constants can be overridden per run
//! from a TOML file selected with `--config`; overrides are validated
//! before any command executes.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use context_gauge_bench::BenchComparison;
use context_gauge_bench::MockDataset;
use context_gauge_bench::TokenEstimator;
use context_gauge_bench::compare;
use context_gauge_core::ChartBackend;
use context_gauge_core::ChartSpec;
use context_gauge_core::ComparisonReport;
use context_gauge_core::CycleImpact;
use context_gauge_core::DEFAULT_TOOL_COUNTS;
use context_gauge_core::ModelConfig;
use context_gauge_core::MonthlyCostProjection;
use context_gauge_core::cycle_impact;
use context_gauge_core::project_monthly_cost;
use context_gauge_core::run_sweep;
use context_gauge_report::SvgChartBackend;
use context_gauge_report::accuracy_chart;
use context_gauge_report::crossover_chart;
use context_gauge_report::crossover_section;
use context_gauge_report::cycle_accuracy_chart;
use context_gauge_report::cycle_impact_section;
use context_gauge_report::cycle_latency_chart;
use context_gauge_report::latency_chart;
use context_gauge_report::monthly_cost_chart;
use context_gauge_report::monthly_cost_section;
use context_gauge_report::net_benefit_chart;
use context_gauge_report::summary_table;
use context_gauge_report::tokens_vs_latency_chart;
use context_gauge_report::tradeoff_chart;
use thiserror::Error;

// ============================================================================
// SECTION: Limits & Defaults
// ============================================================================

/// Maximum size of a model config TOML file.
const MAX_CONFIG_BYTES: usize = 64 * 1024;
/// Default monthly query volume for cost projections.
const DEFAULT_QUERIES_PER_MONTH: u64 = 100_000;
/// Default price in USD per million tokens.
const DEFAULT_PRICE_PER_MILLION: f64 = 3.0;
/// Default tool count for cycle-impact inspection.
const DEFAULT_CYCLE_TOOL_COUNT: u32 = 50;
/// Default mock entities per type for the empirical benchmark.
const DEFAULT_BENCH_ENTITIES: usize = 100;
/// Default per-call row limit for the empirical benchmark.
const DEFAULT_BENCH_LIMIT: usize = 10;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "context-gauge", version, disable_help_subcommand = true)]
struct Cli {
    /// Model config TOML overriding any subset of model constants.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep all strategies across tool counts and print the full report.
    Sweep(SweepCommand),
    /// Locate the crossover tool count over a dense range.
    Crossover(CrossoverCommand),
    /// Project monthly token spend per strategy.
    Cost(CostCommand),
    /// Inspect dynamic latency and accuracy across cycle counts.
    Cycles(CyclesCommand),
    /// Render the SVG chart artifacts into a directory.
    Charts(ChartsCommand),
    /// Run the empirical token benchmark over mock data.
    Bench(BenchCommand),
}

/// Arguments for the `sweep` command.
#[derive(Args, Debug)]
struct SweepCommand {
    /// Tool counts to sweep, ascending.
    #[arg(long = "tools", value_name = "N", value_delimiter = ',', num_args = 1..)]
    tools: Vec<u32>,
}

/// Arguments for the `crossover` command.
#[derive(Args, Debug)]
struct CrossoverCommand {
    /// First tool count of the dense range.
    #[arg(long, value_name = "N", default_value_t = 5)]
    from: u32,
    /// Last tool count of the dense range, inclusive.
    #[arg(long, value_name = "N", default_value_t = 300)]
    to: u32,
    /// Stride between swept tool counts.
    #[arg(long, value_name = "N", default_value_t = 1)]
    step: u32,
}

/// Arguments for the `cost` command.
#[derive(Args, Debug)]
struct CostCommand {
    /// Queries issued per month.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUERIES_PER_MONTH)]
    queries: u64,
    /// Price in USD per million tokens.
    #[arg(long, value_name = "USD", default_value_t = DEFAULT_PRICE_PER_MILLION)]
    price: f64,
    /// Tool counts to project, ascending.
    #[arg(long = "tools", value_name = "N", value_delimiter = ',', num_args = 1..)]
    tools: Vec<u32>,
}

/// Arguments for the `cycles` command.
#[derive(Args, Debug)]
struct CyclesCommand {
    /// Tool count held fixed while cycles vary.
    #[arg(long = "tool-count", value_name = "N", default_value_t = DEFAULT_CYCLE_TOOL_COUNT)]
    tool_count: u32,
    /// First cycle count; defaults to the configured minimum.
    #[arg(long, value_name = "N")]
    from: Option<u32>,
    /// Last cycle count, inclusive; defaults to the configured maximum.
    #[arg(long, value_name = "N")]
    to: Option<u32>,
}

/// Arguments for the `charts` command.
#[derive(Args, Debug)]
struct ChartsCommand {
    /// Directory receiving the SVG artifacts.
    #[arg(long, value_name = "DIR")]
    output: PathBuf,
    /// Tool counts to sweep, ascending.
    #[arg(long = "tools", value_name = "N", value_delimiter = ',', num_args = 1..)]
    tools: Vec<u32>,
    /// Queries issued per month for the cost chart.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUERIES_PER_MONTH)]
    queries: u64,
    /// Price in USD per million tokens for the cost chart.
    #[arg(long, value_name = "USD", default_value_t = DEFAULT_PRICE_PER_MILLION)]
    price: f64,
    /// Tool count held fixed for the cycle charts.
    #[arg(long = "tool-count", value_name = "N", default_value_t = DEFAULT_CYCLE_TOOL_COUNT)]
    tool_count: u32,
}

/// Arguments for the `bench` command.
#[derive(Args, Debug)]
struct BenchCommand {
    /// Mock entities generated per type.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BENCH_ENTITIES)]
    entities: usize,
    /// Rows returned per simulated tool call.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BENCH_LIMIT)]
    limit: usize,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self { message }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let cfg = load_model_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Sweep(command) => command_sweep(&cfg, &command),
        Commands::Crossover(command) => command_crossover(&cfg, &command),
        Commands::Cost(command) => command_cost(&cfg, &command),
        Commands::Cycles(command) => command_cycles(&cfg, &command),
        Commands::Charts(command) => command_charts(&cfg, &command),
        Commands::Bench(command) => command_bench(&command),
    }
}

// ============================================================================
// SECTION: Sweep Command
// ============================================================================

/// Executes the `sweep` command.
fn command_sweep(cfg: &ModelConfig, command: &SweepCommand) -> CliResult<ExitCode> {
    let tools = swept_tools(&command.tools);
    let report = run_sweep(cfg, &tools).map_err(|err| CliError::new(err.to_string()))?;
    let focus = report.crossover_tool_count.or_else(|| tools.last().copied());
    print_block(&summary_table(&report))?;
    print_block(&crossover_section(&report))?;
    if let Some(tool_count) = focus {
        let impact = cycle_impact(cfg, tool_count, cfg.cycles.min..=cfg.cycles.max)
            .map_err(|err| CliError::new(err.to_string()))?;
        print_block(&cycle_impact_section(&impact))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Crossover Command
// ============================================================================

/// Executes the `crossover` command.
fn command_crossover(cfg: &ModelConfig, command: &CrossoverCommand) -> CliResult<ExitCode> {
    let tools = dense_range(command.from, command.to, command.step)?;
    let report = run_sweep(cfg, &tools).map_err(|err| CliError::new(err.to_string()))?;
    print_block(&crossover_section(&report))?;
    Ok(ExitCode::SUCCESS)
}

/// Builds the ascending tool-count range for crossover search.
fn dense_range(from: u32, to: u32, step: u32) -> CliResult<Vec<u32>> {
    if step == 0 {
        return Err(CliError::new("step must be at least 1".to_string()));
    }
    if from > to {
        return Err(CliError::new(format!("empty tool range: {from} > {to}")));
    }
    let stride = usize::try_from(step)
        .map_err(|_| CliError::new(format!("step does not fit the platform: {step}")))?;
    Ok((from..=to).step_by(stride).collect())
}

// ============================================================================
// SECTION: Cost Command
// ============================================================================

/// Executes the `cost` command.
fn command_cost(cfg: &ModelConfig, command: &CostCommand) -> CliResult<ExitCode> {
    let tools = swept_tools(&command.tools);
    let projection = project_monthly_cost(cfg, &tools, command.queries, command.price)
        .map_err(|err| CliError::new(err.to_string()))?;
    print_block(&monthly_cost_section(&projection))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Cycles Command
// ============================================================================

/// Executes the `cycles` command.
fn command_cycles(cfg: &ModelConfig, command: &CyclesCommand) -> CliResult<ExitCode> {
    let from = command.from.unwrap_or(cfg.cycles.min);
    let to = command.to.unwrap_or(cfg.cycles.max);
    let impact = cycle_impact(cfg, command.tool_count, from..=to)
        .map_err(|err| CliError::new(err.to_string()))?;
    print_block(&cycle_impact_section(&impact))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Charts Command
// ============================================================================

/// Executes the `charts` command. All numeric results are computed before
/// any file is touched, so an I/O failure cannot leave a half-written
/// report behind.
fn command_charts(cfg: &ModelConfig, command: &ChartsCommand) -> CliResult<ExitCode> {
    let tools = swept_tools(&command.tools);
    let report = run_sweep(cfg, &tools).map_err(|err| CliError::new(err.to_string()))?;
    let projection = project_monthly_cost(cfg, &tools, command.queries, command.price)
        .map_err(|err| CliError::new(err.to_string()))?;
    let impact = cycle_impact(cfg, command.tool_count, cfg.cycles.min..=cfg.cycles.max)
        .map_err(|err| CliError::new(err.to_string()))?;
    let specs = chart_specs(&report, &projection, &impact);

    fs::create_dir_all(&command.output).map_err(|err| {
        CliError::new(format!(
            "failed to create output directory {}: {err}",
            command.output.display()
        ))
    })?;
    let backend = SvgChartBackend::default();
    for (file_name, spec) in &specs {
        let path = command.output.join(file_name);
        backend.render(spec, &path).map_err(|err| CliError::new(err.to_string()))?;
        write_stdout_line(&format!("wrote {}", path.display()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Builds every chart artifact with its file name.
fn chart_specs(
    report: &ComparisonReport,
    projection: &MonthlyCostProjection,
    impact: &CycleImpact,
) -> Vec<(&'static str, ChartSpec)> {
    vec![
        ("tokens_vs_latency.svg", tokens_vs_latency_chart(report)),
        ("latency.svg", latency_chart(report)),
        ("tradeoff.svg", tradeoff_chart(report)),
        ("crossover.svg", crossover_chart(report)),
        ("net_benefit.svg", net_benefit_chart(report)),
        ("accuracy.svg", accuracy_chart(report)),
        ("monthly_cost.svg", monthly_cost_chart(projection)),
        ("cycle_accuracy.svg", cycle_accuracy_chart(impact)),
        ("cycle_latency.svg", cycle_latency_chart(impact)),
    ]
}

// ============================================================================
// SECTION: Bench Command
// ============================================================================

/// Executes the `bench` command.
fn command_bench(command: &BenchCommand) -> CliResult<ExitCode> {
    let estimator = TokenEstimator::new().map_err(|err| CliError::new(err.to_string()))?;
    let dataset = MockDataset::generate(command.entities);
    let comparison = compare(&estimator, &dataset, command.limit)
        .map_err(|err| CliError::new(err.to_string()))?;
    print_block(&bench_section(&comparison))?;
    Ok(ExitCode::SUCCESS)
}

/// Renders the empirical benchmark comparison as a text section.
fn bench_section(comparison: &BenchComparison) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    let _ = writeln!(out, "EMPIRICAL BENCHMARK (cl100k_base tokens over mock data):");
    let _ = writeln!(out, "{}", "-".repeat(72));
    for sample in [&comparison.full_context, &comparison.tool_calling] {
        let _ = writeln!(
            out,
            "{:>16}: {:>9} chars {:>8} tokens {:>6} entities {:>2} tool calls",
            sample.approach,
            sample.chars,
            sample.tokens,
            sample.entities.total(),
            sample.tool_calls.len(),
        );
        for call in &sample.tool_calls {
            let _ = writeln!(
                out,
                "{:>18}- {:<16} {:>9} chars {:>8} tokens",
                "", call.tool, call.chars, call.tokens,
            );
        }
    }
    let _ = writeln!(out, "{}", "-".repeat(72));
    let _ = writeln!(out, "Token reduction:  {}", fmt_reduction(comparison.token_reduction_pct));
    let _ = writeln!(out, "Entity reduction: {}", fmt_reduction(comparison.entity_reduction_pct));
    out
}

/// Formats an optional reduction percentage; `None` renders as `n/a`.
fn fmt_reduction(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |value| format!("{value:.2}%"))
}

// ============================================================================
// SECTION: Config Loading
// ============================================================================

/// Loads the model config, applying TOML overrides when a path is given.
fn load_model_config(path: Option<&Path>) -> CliResult<ModelConfig> {
    let Some(path) = path else {
        return Ok(ModelConfig::default());
    };
    let bytes = read_bytes_with_limit(path, MAX_CONFIG_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(format!("failed to read config {}: {err}", path.display()))
        }
        ReadLimitError::TooLarge { size, limit } => CliError::new(format!(
            "config {} is too large: {size} bytes exceeds the {limit} byte limit",
            path.display()
        )),
    })?;
    let text = String::from_utf8(bytes)
        .map_err(|err| CliError::new(format!("config {} is not UTF-8: {err}", path.display())))?;
    let cfg: ModelConfig = toml::from_str(&text)
        .map_err(|err| CliError::new(format!("invalid config {}: {err}", path.display())))?;
    cfg.validate()
        .map_err(|err| CliError::new(format!("invalid config {}: {err}", path.display())))?;
    Ok(cfg)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes)
        .map_err(|_| ReadLimitError::TooLarge { size, limit: max_bytes })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge { size, limit: max_bytes });
    }

    let read_limit = limit.saturating_add(1);
    let mut limited = file.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge { size: actual, limit: max_bytes });
    }
    Ok(bytes)
}

/// Returns the explicit tool counts, or the default sweep when none given.
fn swept_tools(tools: &[u32]) -> Vec<u32> {
    if tools.is_empty() { DEFAULT_TOOL_COUNTS.to_vec() } else { tools.to_vec() }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a pre-rendered multi-line block to stdout.
fn print_block(block: &str) -> CliResult<()> {
    write_stdout_line(block).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout, surfacing write failures to the caller.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr, surfacing write failures to the caller.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output write failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
