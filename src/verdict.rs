#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, process::ExitCode};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::constants::{EXIT_ACCEPTED, EXIT_REJECTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Why a submission was rejected.
pub enum Rejection {
    /// The submitted number is too far from the reference answer.
    WrongAnswer,
    /// The submission did not start with a number.
    MissingAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict", content = "reason")]
/// Outcome of judging one submission.
pub enum Verdict {
    /// The submission matches the reference answer.
    Accepted,
    /// The submission does not match.
    Rejected(Rejection),
}

impl Verdict {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Exit status reported to the judge harness.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_accepted() {
            ExitCode::from(EXIT_ACCEPTED)
        } else {
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "pass"),
            Verdict::Rejected(Rejection::WrongAnswer) => write!(f, "fail (wrong answer)"),
            Verdict::Rejected(Rejection::MissingAnswer) => write!(f, "fail (no number)"),
        }
    }
}

/// Compares a submitted value against the reference answer. Accepts only when
/// the absolute difference is strictly below `tolerance`; swapping the two
/// values never changes the outcome.
pub fn compare(reference: f64, submitted: f64, tolerance: f64) -> Verdict {
    if (reference - submitted).abs() < tolerance {
        Verdict::Accepted
    } else {
        Verdict::Rejected(Rejection::WrongAnswer)
    }
}

#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
/// A record of one judgement.
pub struct Report {
    /// The outcome
    #[serde(flatten)]
    pub verdict:   Verdict,
    /// The answer computed by the judge.
    pub reference: f64,
    /// The number read from the submission, if any.
    pub submitted: Option<f64>,
    /// The tolerance used for the comparison.
    pub tolerance: f64,
}

impl Report {
    /// Absolute difference between the reference and the submitted answer.
    pub fn difference(&self) -> Option<f64> {
        self.submitted.map(|s| (self.reference - s).abs())
    }
}
