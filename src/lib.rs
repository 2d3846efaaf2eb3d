//! # umm-judge
//!
//! A checker for judge harnesses. It reads a test input (numbers on the first
//! line, `key=value` options after it), recomputes the expected answer,
//! reads the submitted answer and reports the verdict through the exit code.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Loading runtime configuration from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Errors raised by the judge itself
pub mod error;
/// Parsing test inputs
pub mod input;
/// Judging a submission end to end
pub mod judge;
/// For all parsers used
pub mod parsers;
/// Computing the reference answer
pub mod reference;
/// Reading submitted answers
pub mod submission;
/// Judging a whole directory of numbered cases
pub mod suite;
/// Utility functions for convenience
pub mod util;
/// Verdicts, comparison and reports
pub mod verdict;

pub use error::JudgeError;
pub use judge::{Judge, judge_texts};
pub use verdict::{Rejection, Report, Verdict};
