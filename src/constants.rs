#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default tolerance: a submission is accepted when it differs from the
/// reference answer by strictly less than this.
pub const EPSILON: f64 = 1e-6;

/// Keyword argument selecting the operation applied to positional arguments.
pub const OPERATION_KEY: &str = "operation";

/// Value of [`OPERATION_KEY`] that selects multiplication.
pub const MULTIPLY: &str = "multiply";

/// Keyword argument holding the number of decimal places to round to.
pub const ROUND_TO_KEY: &str = "round_to";

/// Exit status for an accepted submission.
pub const EXIT_ACCEPTED: u8 = 0;

/// Exit status for everything else: wrong answer, missing answer, or a judge
/// setup failure.
pub const EXIT_REJECTED: u8 = 1;

/// Environment variable overriding the comparison tolerance.
pub const TOLERANCE_ENV: &str = "UMM_JUDGE_TOLERANCE";

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "UMM_JUDGE_LOG";

/// Directory (inside a suite) holding the test inputs.
pub const SUITE_INPUT_DIR: &str = "in";

/// Directory (inside a suite) holding the expected outputs.
pub const SUITE_OUTPUT_DIR: &str = "out";
