#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{JudgeError, parsers::numbers_prefix};

/// Keyword arguments, keyed by name.
pub type Kwargs = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A parsed test input: positional numbers from the first line and
/// `key=value` pairs from the lines after it.
pub struct TestInput {
    /// Positional arguments, in the order they appear.
    pub args:   Vec<f64>,
    /// Keyword arguments; a repeated key keeps its last value.
    pub kwargs: Kwargs,
}

impl TestInput {
    /// Parses a test input from text.
    ///
    /// Lines that do not contain `=`, or have nothing after it, are skipped.
    pub fn parse(text: &str) -> Self {
        // `lines` drops the `\r` of a CRLF ending: `operation=multiply\r\n` still
        // selects multiply rather than falling back to sum.
        let mut lines = text.lines();
        let args = lines.next().map(numbers_prefix).unwrap_or_default();

        let mut kwargs = Kwargs::new();
        for line in lines {
            match line.split_once('=') {
                Some((key, value)) if !value.is_empty() => {
                    kwargs.insert(key.to_string(), value.to_string());
                }
                _ => tracing::trace!("Skipping line without a value: {line:?}"),
            }
        }

        Self { args, kwargs }
    }

    /// Reads and parses the test input at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, JudgeError> {
        let text = crate::util::read_source(path.as_ref())?;
        Ok(Self::parse(&text))
    }

    /// Returns the value of a keyword argument, if present.
    pub fn kwarg(&self, key: &str) -> Option<&str> {
        self.kwargs.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_is_positional() {
        let input = TestInput::parse("2 3 5\n");
        assert_eq!(input.args, vec![2.0, 3.0, 5.0]);
        assert!(input.kwargs.is_empty());
    }

    #[test]
    fn later_lines_are_kwargs() {
        let input = TestInput::parse("1 2\noperation=multiply\nround_to=0\n");
        assert_eq!(input.args, vec![1.0, 2.0]);
        assert_eq!(input.kwarg("operation"), Some("multiply"));
        assert_eq!(input.kwarg("round_to"), Some("0"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let input = TestInput::parse("\nexpr=a=b\n");
        assert_eq!(input.kwarg("expr"), Some("a=b"));
    }

    #[test]
    fn last_duplicate_wins() {
        let input = TestInput::parse("1\noperation=multiply\noperation=sum\n");
        assert_eq!(input.kwarg("operation"), Some("sum"));
        assert_eq!(input.kwargs.len(), 1);
    }

    #[test]
    fn skips_lines_without_a_value() {
        let input = TestInput::parse("1\nnonsense\n\nround_to=\n=orphan\n");
        assert_eq!(input.kwarg("round_to"), None);
        assert_eq!(input.kwarg(""), Some("orphan"));
        assert_eq!(input.kwargs.len(), 1);
    }

    #[test]
    fn keys_and_values_are_not_trimmed() {
        let input = TestInput::parse("1\noperation = multiply\n");
        assert_eq!(input.kwarg("operation"), None);
        assert_eq!(input.kwarg("operation "), Some(" multiply"));
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let input = TestInput::parse("4 5\r\noperation=multiply\r\n");
        assert_eq!(input.args, vec![4.0, 5.0]);
        assert_eq!(input.kwarg("operation"), Some("multiply"));
    }

    #[test]
    fn empty_input_has_no_arguments() {
        assert_eq!(TestInput::parse(""), TestInput::default());
    }
}
