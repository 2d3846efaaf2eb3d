#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # judge
//!
//! Checker invoked by the judge harness as
//! `judge <INPUT> <EXPECTED> <SUBMISSION>`. Exits with `0` when the submission
//! is accepted and `1` otherwise.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use umm_judge::{
    Judge,
    config::{self, JudgeConfig, parse_tolerance},
    constants::EXIT_REJECTED,
    suite::Suite,
};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Judge a single submission
    Check {
        /// tolerance override
        tolerance:  Option<f64>,
        /// print the report as JSON
        json:       bool,
        /// test input
        input:      PathBuf,
        /// expected output, not read
        expected:   PathBuf,
        /// submitted output
        submission: PathBuf,
    },
    /// Judge every case in a test directory
    Suite {
        /// tolerance override
        tolerance: Option<f64>,
        /// directory with `in/` and `out/`
        tests:     PathBuf,
        /// directory with the submitted `outputN.txt` files
        answers:   PathBuf,
    },
}

/// Parse the command line arguments into a `Cmd` enum
fn options() -> OptionParser<Cmd> {
    /// parses the tolerance override
    fn tolerance_arg() -> impl Parser<Option<f64>> {
        long("tolerance")
            .help("Largest difference (exclusive) that is still accepted")
            .argument::<String>("EPS")
            .parse(|raw| parse_tolerance(&raw).ok_or("tolerance must be a positive number"))
            .optional()
    }

    let json = long("json")
        .help("Print the verdict as JSON on stdout")
        .switch();
    let input = positional::<PathBuf>("INPUT").help("Test input: numbers, then key=value lines");
    let expected = positional::<PathBuf>("EXPECTED").help("Expected output (not read)");
    let submission = positional::<PathBuf>("SUBMISSION").help("Submitted output");
    let tolerance = tolerance_arg();
    let check = construct!(Cmd::Check {
        tolerance,
        json,
        input,
        expected,
        submission
    });

    // Named flags rather than a subcommand, so that no input path the
    // harness passes can be mistaken for suite mode.
    let tests = long("suite")
        .help("Judge every numbered case of this directory (containing in/ and out/)")
        .argument::<PathBuf>("TESTS_DIR");
    let answers = long("answers")
        .help("Directory containing outputN.txt submissions for --suite")
        .argument::<PathBuf>("ANSWERS_DIR");
    let tolerance = tolerance_arg();
    let suite = construct!(Cmd::Suite {
        tolerance,
        tests,
        answers
    });

    construct!([suite, check])
        .to_options()
        .descr("Recomputes the answer for a test input and judges a submission")
}

/// Judges one submission and returns the exit code for the harness.
fn check(
    config: &JudgeConfig,
    json: bool,
    input: PathBuf,
    expected: PathBuf,
    submission: PathBuf,
) -> Result<ExitCode> {
    let report = Judge::builder()
        .input_path(input)
        .expected_path(expected)
        .submission_path(submission)
        .tolerance(config.tolerance())
        .build()
        .run()?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&report).context("Could not serialize the report")?
        );
    }

    Ok(report.verdict.exit_code())
}

/// Judges a whole suite, prints the overview and returns the exit code.
fn suite(config: &JudgeConfig, tests: PathBuf, answers: PathBuf) -> Result<ExitCode> {
    let report = Suite::new(tests, answers)
        .set_tolerance(config.tolerance())
        .run()?;
    println!("{report}");

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    })
}

fn main() -> ExitCode {
    dotenv().ok();
    let config = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
    config.warn_ignored();

    let cmd = options().run();

    let result = match cmd {
        Cmd::Check {
            tolerance,
            json,
            input,
            expected,
            submission,
        } => {
            let config = with_override(config, tolerance);
            check(&config, json, input, expected, submission)
        }
        Cmd::Suite {
            tolerance,
            tests,
            answers,
        } => {
            let config = with_override(config, tolerance);
            suite(&config, tests, answers)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

/// Applies a command line tolerance on top of the environment configuration.
fn with_override(config: &JudgeConfig, tolerance: Option<f64>) -> JudgeConfig {
    match tolerance {
        Some(tolerance) => config.clone().with_tolerance(tolerance),
        None => config.clone(),
    }
}
