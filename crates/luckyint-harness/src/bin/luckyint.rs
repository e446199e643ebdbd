//! CLI entrypoint for luckyint.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use luckyint_core::ParseMode;
use luckyint_core::config::parse_mode_from_env;
use luckyint_harness::fixtures::{LoadedFixture, fixture_paths};
use luckyint_harness::report::FixtureSource;
use luckyint_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, default_run_id, validate_log_file,
};
use luckyint_harness::{
    ConformanceReport, HarnessError, TestRunner, VerificationSummary, read_line_lossy,
    solve_line,
};

/// Largest lucky integer finder.
///
/// With no subcommand, reads one line of integers from stdin and prints the
/// largest value that occurs exactly as many times as its value (or -1).
#[derive(Debug, Parser)]
#[command(name = "luckyint")]
#[command(about = "Find the largest integer whose occurrence count equals its value")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    solve: SolveArgs,
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Input line to solve instead of reading stdin.
    #[arg(long)]
    input: Option<String>,
    /// Parse mode (`strict` or `lenient`); overrides LUCKYINT_MODE.
    #[arg(long)]
    mode: Option<String>,
    /// Also print every lucky value found to stderr.
    #[arg(long)]
    explain: bool,
    /// Structured JSONL log output path.
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one input line (the default when no subcommand is given).
    Solve(SolveArgs),
    /// Verify the pipeline against fixture JSON files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown); a `.json` sibling is written too.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
        /// Only run cases under this parse mode (default: strict and lenient).
        #[arg(long)]
        mode: Option<String>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn open_emitter(path: Option<&Path>, component: &str) -> Result<LogEmitter, HarnessError> {
    let run_id = default_run_id();
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Ok(LogEmitter::to_file(path, component, &run_id)?)
        }
        None => Ok(LogEmitter::sink(component, &run_id)),
    }
}

fn read_stdin_line() -> Result<String, HarnessError> {
    Ok(read_line_lossy(&mut std::io::stdin().lock())?)
}

fn run_solve(args: SolveArgs) -> Result<(), HarnessError> {
    let mode = args
        .mode
        .as_deref()
        .map(ParseMode::from_str_loose)
        .unwrap_or_else(parse_mode_from_env);
    let mut emitter = open_emitter(args.log.as_deref(), "solve")?;
    let line = match args.input {
        Some(input) => input,
        None => read_stdin_line()?,
    };

    let started = Instant::now();
    let elapsed_ms = || u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "solve_start").with_mode(mode.as_str()),
    )?;

    let solution = match solve_line(&line, mode) {
        Ok(solution) => solution,
        Err(err) => {
            emitter.emit_entry(
                LogEntry::new("", LogLevel::Error, "parse_failed")
                    .with_mode(mode.as_str())
                    .with_outcome(Outcome::Error)
                    .with_exit_code(1)
                    .with_details(serde_json::json!({
                        "index": err.index(),
                        "token": err.token(),
                    })),
            )?;
            emitter.flush()?;
            return Err(err.into());
        }
    };

    for skipped in &solution.skipped {
        eprintln!("Skipping token {}: {}", skipped.index, skipped.reason);
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Warn, "token_skipped")
                .with_mode(mode.as_str())
                .with_details(serde_json::json!({
                    "index": skipped.index,
                    "token": skipped.token,
                })),
        )?;
    }

    println!("{}", solution.output());
    if args.explain {
        eprintln!(
            "values={} lucky={:?} result={}",
            solution.values.len(),
            solution.lucky_values,
            solution.result
        );
    }

    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "solve_done")
            .with_mode(mode.as_str())
            .with_outcome(Outcome::Pass)
            .with_input_len(solution.values.len())
            .with_result(solution.result)
            .with_exit_code(0)
            .with_duration_ms(elapsed_ms())
            .with_details(serde_json::json!({
                "lucky_values": solution.lucky_values,
                "skipped": solution.skipped.len(),
            })),
    )?;
    emitter.flush()?;
    Ok(())
}

fn run_verify(
    fixture: &Path,
    report: Option<&Path>,
    timestamp: Option<String>,
    mode: Option<&str>,
    log: Option<&Path>,
) -> Result<(), HarnessError> {
    eprintln!("Verifying against fixtures in {}", fixture.display());
    let mut emitter = open_emitter(log, "verify")?;

    let mut loaded = Vec::new();
    for path in fixture_paths(fixture)? {
        let set = LoadedFixture::load(&path).map_err(|err| HarnessError::InvalidFixture {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        loaded.push(set);
    }
    if loaded.is_empty() {
        return Err(HarnessError::NoFixtures {
            dir: fixture.to_path_buf(),
        });
    }

    let modes = match mode {
        Some(raw) => vec![ParseMode::from_str_loose(raw)],
        None => vec![ParseMode::Strict, ParseMode::Lenient],
    };

    let mut results = Vec::new();
    for mode in &modes {
        let runner = TestRunner::new("fixture-verify", *mode);
        for set in &loaded {
            results.extend(runner.run_logged(&set.set, &mut emitter)?);
        }
    }

    // Stabilize report ordering for reproducible output.
    results.sort_by(|a, b| {
        a.family
            .cmp(&b.family)
            .then_with(|| a.mode.cmp(&b.mode))
            .then_with(|| a.case_name.cmp(&b.case_name))
    });

    let summary = VerificationSummary::from_results(results);
    let report_doc = ConformanceReport {
        title: String::from("luckyint Conformance Report"),
        mode: modes
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("+"),
        timestamp: timestamp.unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now())),
        sources: loaded
            .iter()
            .map(|f| FixtureSource {
                path: f.path.display().to_string(),
                sha256: f.sha256.clone(),
                cases: f.set.cases.len(),
            })
            .collect(),
        summary,
    };

    eprintln!(
        "Verification complete: total={}, passed={}, failed={}",
        report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
    );
    for failed in report_doc.summary.results.iter().filter(|r| !r.passed) {
        eprintln!("FAIL {}", failed.case_name);
        if let Some(diff) = &failed.diff {
            eprint!("{diff}");
        }
    }

    if let Some(report_path) = report {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(report_path, report_doc.to_markdown())?;
        std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
    }

    let ran_cases = report_doc.summary.total > 0;
    if !ran_cases {
        eprintln!("No fixture case matched mode {}", report_doc.mode);
    }
    let outcome = if ran_cases && report_doc.summary.all_passed() {
        Outcome::Pass
    } else {
        Outcome::Fail
    };
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "verify_done")
            .with_outcome(outcome)
            .with_details(serde_json::json!({
                "total": report_doc.summary.total,
                "passed": report_doc.summary.passed,
                "failed": report_doc.summary.failed,
            })),
    )?;
    emitter.flush()?;

    if !ran_cases {
        return Err(HarnessError::NoCases {
            mode: report_doc.mode,
        });
    }
    if !report_doc.summary.all_passed() {
        return Err(HarnessError::VerificationFailed {
            failed: report_doc.summary.failed,
            total: report_doc.summary.total,
        });
    }
    Ok(())
}

fn run_validate_log(log: &Path) -> Result<(), HarnessError> {
    let (lines, errors) = validate_log_file(log)?;
    for err in &errors {
        eprintln!("{err}");
    }
    eprintln!(
        "Validated {}: lines={}, errors={}",
        log.display(),
        lines,
        errors.len()
    );
    if !errors.is_empty() {
        return Err(HarnessError::InvalidLog {
            path: log.to_path_buf(),
            errors: errors.len(),
        });
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        None => run_solve(cli.solve)?,
        Some(Command::Solve(args)) => run_solve(args)?,
        Some(Command::Verify {
            fixture,
            report,
            timestamp,
            mode,
            log,
        }) => run_verify(
            &fixture,
            report.as_deref(),
            timestamp,
            mode.as_deref(),
            log.as_deref(),
        )?,
        Some(Command::ValidateLog { log }) => run_validate_log(&log)?,
    }

    Ok(())
}
