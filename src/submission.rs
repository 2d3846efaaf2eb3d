#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use crate::{JudgeError, parsers::parser};

/// Reads the submitted answer: the first number in `text`, after any
/// whitespace. Whatever follows it is ignored.
///
/// Returns `None` for an empty submission or one that does not start with a
/// number.
pub fn read_submission(text: &str) -> Option<f64> {
    parser::leading_number(text).ok().map(|(value, _)| value)
}

/// Reads the submission file at `path`, failing only if it cannot be read.
pub fn submission_from_path(path: impl AsRef<Path>) -> Result<Option<f64>, JudgeError> {
    let text = crate::util::read_source(path.as_ref())?;
    Ok(read_submission(&text))
}
