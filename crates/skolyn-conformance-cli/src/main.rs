// crates/skolyn-conformance-cli/src/main.rs
// ============================================================================
// Module: Skolyn Conformance CLI Entry Point
// Description: Command-line front end for the API conformance suite.
// Purpose: Resolve configuration, run the suite, render the report, and gate.
// Dependencies: clap, skolyn-conformance-core, thiserror, tokio
// ============================================================================

//! ## Overview
//! The CLI resolves the backend base URL and request timeout, runs every
//! conformance scenario strictly in order, and renders the run report to
//! stdout. The process exit code is non-zero when any scenario failed so the
//! harness can gate CI pipelines; an inconclusive round trip alone does not
//! gate, since it only arises after a failed intake, which already does.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use skolyn_conformance_core::HarnessConfig;
use skolyn_conformance_core::HttpProbe;
use skolyn_conformance_core::TestReport;
use skolyn_conformance_core::run_suite;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "skolyn-conformance", version, about = "Skolyn API conformance harness")]
struct Cli {
    /// Backend base URL; overrides `NEXT_PUBLIC_BASE_URL` and the default.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Per-request timeout in seconds (must be greater than zero).
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout_secs: u64,
    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Line-per-scenario textual summary.
    Text,
    /// Machine-readable JSON summary.
    Json,
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
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the conformance run.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.timeout_secs == 0 {
        return Err(CliError::new("--timeout-secs must be greater than zero".to_string()));
    }
    let config =
        HarnessConfig::resolve(cli.base_url.as_deref(), Duration::from_secs(cli.timeout_secs))
            .map_err(|err| CliError::new(err.to_string()))?;
    let probe = HttpProbe::new(&config.base_url, config.timeout)
        .map_err(|err| CliError::new(err.to_string()))?;
    if cli.format == OutputFormat::Text {
        write_stdout_line(&format!("Checking Skolyn backend at {}", probe.api_base()))
            .map_err(|err| CliError::new(output_error(&err)))?;
    }
    let report = run_suite(&probe).await;
    let rendered = match cli.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.render_json(),
    };
    write_stdout_line(rendered.trim_end_matches('\n'))
        .map_err(|err| CliError::new(output_error(&err)))?;
    Ok(gate_exit_code(&report))
}

/// Maps the report to the process exit code used for CI gating.
fn gate_exit_code(report: &TestReport) -> ExitCode {
    if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream error message.
fn output_error(error: &std::io::Error) -> String {
    format!("failed to write report to stdout: {error}")
}

/// Writes an error to stderr and returns a failing exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
