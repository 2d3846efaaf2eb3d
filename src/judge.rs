#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use bon::Builder;

use crate::{
    JudgeError,
    constants::EPSILON,
    input::TestInput,
    reference::reference_answer,
    submission::{read_submission, submission_from_path},
    util::read_source,
    verdict::{Rejection, Report, Verdict, compare},
};

#[derive(Debug, Clone, Builder)]
/// Judges one submission against one test input.
pub struct Judge {
    /// The test input describing the computation.
    #[builder(into)]
    input_path:      PathBuf,
    /// Expected output from the harness. Accepted for interface symmetry;
    /// the answer is always recomputed from the test input.
    #[builder(into)]
    expected_path:   Option<PathBuf>,
    /// The contestant's output.
    #[builder(into)]
    submission_path: PathBuf,
    /// Maximum (exclusive) absolute difference that is accepted.
    #[builder(default = EPSILON)]
    tolerance:       f64,
}

impl Judge {
    /// Path to the test input.
    pub fn input_path(&self) -> &Path {
        self.input_path.as_path()
    }

    /// Path to the expected output, if one was given.
    pub fn expected_path(&self) -> Option<&Path> {
        self.expected_path.as_deref()
    }

    /// Path to the submission.
    pub fn submission_path(&self) -> &Path {
        self.submission_path.as_path()
    }

    /// Tolerance used for the comparison.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Reads both files and judges the submission.
    ///
    /// Both files are read before anything is computed, so a missing
    /// submission file is a setup error even if the test input is fine.
    pub fn run(&self) -> Result<Report, JudgeError> {
        let input = read_source(&self.input_path)?;
        let submitted = submission_from_path(&self.submission_path)?;

        if let Some(expected) = &self.expected_path {
            tracing::trace!("Not reading expected output {}", expected.display());
        }

        let report = judge_submitted(&TestInput::parse(&input), submitted, self.tolerance);
        tracing::info!(
            "{}: {} (reference {}, submitted {:?})",
            self.submission_path.display(),
            report.verdict,
            report.reference,
            report.submitted
        );
        Ok(report)
    }
}

/// Judges an in-memory submission against an in-memory test input.
pub fn judge_texts(input: &str, submission: &str, tolerance: f64) -> Report {
    judge_submitted(&TestInput::parse(input), read_submission(submission), tolerance)
}

/// Judges an already-read submitted value; `None` means the submission held
/// no number.
pub fn judge_submitted(input: &TestInput, submitted: Option<f64>, tolerance: f64) -> Report {
    let reference = reference_answer(input);

    let verdict = match submitted {
        Some(value) => compare(reference, value, tolerance),
        None => Verdict::Rejected(Rejection::MissingAnswer),
    };

    Report::builder()
        .verdict(verdict)
        .reference(reference)
        .maybe_submitted(submitted)
        .tolerance(tolerance)
        .build()
}
