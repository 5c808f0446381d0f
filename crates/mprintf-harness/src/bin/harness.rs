//! CLI entrypoint for the mprintf conformance harness.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use mprintf_harness::args::{ArgSpec, to_format_args};
use mprintf_harness::fixtures::{FixtureInputs, load_dir};
use mprintf_harness::runner::execute_buffer;
use mprintf_harness::structured_log::{LogEmitter, LogEntry, now_utc, validate_log_file};
use mprintf_harness::{ConformanceReport, TestRunner, VerificationSummary};

/// Conformance tooling for mprintf.
#[derive(Debug, Parser)]
#[command(name = "mprintf-harness")]
#[command(about = "Fixture-driven conformance harness for mprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the formatter against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Render one call and print the output and return value.
    Render {
        /// Format string.
        #[arg(long)]
        format: String,
        /// Destination capacity (buffer mode).
        #[arg(long, default_value_t = mprintf_core::MPRINTF_BUF_SIZE)]
        capacity: usize,
        /// Argument as `kind:value` (int, uint, float, char, str, null, ptr).
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Stream through the console printer instead of a buffer.
        #[arg(long)]
        stream: bool,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let started = Instant::now();
            let fixture_sets = load_dir(&fixture)?;
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, "verify")?),
                None => None,
            };

            let runner = TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                let set_results = runner.run(set);
                if let Some(emitter) = emitter.as_mut() {
                    for result in &set_results {
                        emitter.emit_entry(LogEntry::for_case(&set.family, result))?;
                    }
                }
                results.extend(set_results);
            }

            let summary = VerificationSummary::from_results(results);
            if let Some(emitter) = emitter.as_mut() {
                let elapsed = started.elapsed().as_millis() as u64;
                emitter.emit_entry(LogEntry::for_summary(&summary, elapsed))?;
                emitter.flush()?;
            }

            let report_doc = ConformanceReport {
                title: String::from("mprintf Conformance Report"),
                timestamp: now_utc(),
                summary,
            };
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {}: {}", failure.case_name, failure.diff.as_deref().unwrap_or(""));
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            format,
            capacity,
            args,
            stream,
        } => {
            let specs = args
                .iter()
                .map(|raw| ArgSpec::parse_cli(raw))
                .collect::<Result<Vec<_>, _>>()?;
            if stream {
                let format_args = to_format_args(&specs)?;
                let n = mprintf_console::printf(format.as_bytes(), &format_args);
                std::io::stdout().flush()?;
                eprintln!("\nreturned={n}");
            } else {
                let run = execute_buffer(&FixtureInputs {
                    capacity,
                    channel: 0,
                    format,
                    args: specs,
                })?;
                println!("{}", run.rendered());
                eprintln!("returned={} truncated={}", run.returned, run.truncated);
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("{}: {lines} lines, {} errors", path.display(), errors.len());
            if !errors.is_empty() {
                return Err("structured log validation failed".into());
            }
        }
    }

    Ok(())
}
