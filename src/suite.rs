#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use glob::glob;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    constants::{EPSILON, SUITE_INPUT_DIR, SUITE_OUTPUT_DIR},
    judge::Judge,
    verdict::Report,
};

/// Finds `in/inputN.txt` files under `tests_dir`, ordered by `N`.
pub fn discover_cases(tests_dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let pattern = tests_dir.join(SUITE_INPUT_DIR).join("input*.txt");
    let pattern = pattern
        .to_str()
        .context("Could not convert tests_dir to string")?
        .to_string();

    let mut cases: Vec<(u32, PathBuf)> = glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .filter_map(|path| case_index(&path).map(|index| (index, path)))
        .collect();
    cases.sort_by_key(|(index, _)| *index);

    Ok(cases)
}

/// Extracts `N` from a file named `inputN.txt`.
fn case_index(path: &Path) -> Option<u32> {
    path.file_name()?
        .to_str()?
        .strip_prefix("input")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}

#[derive(Debug, Clone, Serialize)]
/// The result of judging one numbered case.
pub struct CaseResult {
    /// Case number, `N` in `inputN.txt`.
    pub index:  u32,
    /// The judgement, when the judge could read its files.
    pub report: Option<Report>,
    /// Why the case could not be judged.
    pub error:  Option<String>,
}

impl CaseResult {
    /// Whether the submission for this case was accepted.
    pub fn passed(&self) -> bool {
        self.report
            .as_ref()
            .is_some_and(|report| report.verdict.is_accepted())
    }
}

#[derive(Tabled)]
/// A displayable row of the suite summary.
struct CaseRow {
    #[tabled(rename = "Case")]
    /// * `case`: case number
    case:      u32,
    #[tabled(rename = "Verdict")]
    /// * `verdict`: pass, fail, or error
    verdict:   String,
    #[tabled(rename = "Reference")]
    /// * `reference`: the judge's answer
    reference: String,
    #[tabled(rename = "Submitted")]
    /// * `submitted`: the number read from the submission
    submitted: String,
}

impl From<&CaseResult> for CaseRow {
    fn from(result: &CaseResult) -> Self {
        match (&result.report, &result.error) {
            (Some(report), _) => CaseRow {
                case:      result.index,
                verdict:   report.verdict.to_string(),
                reference: report.reference.to_string(),
                submitted: report
                    .submitted
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            },
            (None, error) => CaseRow {
                case:      result.index,
                verdict:   format!("error: {}", error.as_deref().unwrap_or("unknown")),
                reference: "-".to_string(),
                submitted: "-".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Results for every case of a suite.
pub struct SuiteReport {
    /// Per-case results, ordered by case number.
    pub cases: Vec<CaseResult>,
}

impl SuiteReport {
    /// Number of accepted cases.
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    /// Number of cases judged.
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Whether every case was accepted.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<CaseRow> = self.cases.iter().map(CaseRow::from).collect();
        let table = Table::new(&rows)
            .with(Panel::header("Suite Overview"))
            .with(Panel::footer(format!("Passed: {}/{}", self.passed(), self.total())))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string();

        write!(f, "{table}")
    }
}

/// Judges every case of a test directory against a directory of submissions.
///
/// * `tests_dir`: holds `in/inputN.txt` and `out/outputN.txt`
/// * `answers_dir`: holds the submissions, named `outputN.txt`
#[derive(Debug, Clone)]
pub struct Suite {
    /// Directory with the test inputs and expected outputs.
    tests_dir:   PathBuf,
    /// Directory with the submitted outputs.
    answers_dir: PathBuf,
    /// Tolerance used for every case.
    tolerance:   f64,
}

impl Suite {
    /// Creates a new suite with the default tolerance.
    pub fn new(tests_dir: impl Into<PathBuf>, answers_dir: impl Into<PathBuf>) -> Self {
        Self {
            tests_dir:   tests_dir.into(),
            answers_dir: answers_dir.into(),
            tolerance:   EPSILON,
        }
    }

    /// sets the `tolerance` field
    pub fn set_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Judges all cases. Fails only when no cases are found; a case whose
    /// files cannot be read is recorded as an error.
    pub fn run(&self) -> Result<SuiteReport> {
        let discovered = discover_cases(&self.tests_dir)?;
        ensure!(
            !discovered.is_empty(),
            "No test inputs found under {}",
            self.tests_dir.join(SUITE_INPUT_DIR).display()
        );

        let cases = discovered
            .into_iter()
            .map(|(index, input)| {
                let judge = Judge::builder()
                    .input_path(input)
                    .expected_path(
                        self.tests_dir
                            .join(SUITE_OUTPUT_DIR)
                            .join(format!("output{index}.txt")),
                    )
                    .submission_path(self.answers_dir.join(format!("output{index}.txt")))
                    .tolerance(self.tolerance)
                    .build();

                match judge.run() {
                    Ok(report) => CaseResult {
                        index,
                        report: Some(report),
                        error: None,
                    },
                    Err(e) => {
                        tracing::warn!("Case {index}: {e}");
                        CaseResult {
                            index,
                            report: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        Ok(SuiteReport { cases })
    }
}
