#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{MULTIPLY, OPERATION_KEY, ROUND_TO_KEY},
    input::TestInput,
    parsers::parser,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The operation folded over the positional arguments.
pub enum Operation {
    /// Adds all arguments; the default.
    #[default]
    Sum,
    /// Multiplies all arguments.
    Multiply,
}

impl Operation {
    /// Picks the operation named by the `operation` keyword argument. Only an
    /// exact `multiply` selects [`Operation::Multiply`].
    pub fn from_input(input: &TestInput) -> Self {
        match input.kwarg(OPERATION_KEY) {
            Some(MULTIPLY) => Operation::Multiply,
            _ => Operation::Sum,
        }
    }

    /// Applies the operation to `args`. An empty slice gives the identity
    /// element.
    pub fn apply(self, args: &[f64]) -> f64 {
        match self {
            Operation::Sum => args.iter().fold(0.0, |acc, x| acc + x),
            Operation::Multiply => args.iter().fold(1.0, |acc, x| acc * x),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Number of decimal places to round the reference answer to. Negative
/// values round to tens, hundreds, and so on.
pub struct RoundTo(pub i32);

impl RoundTo {
    /// Parses a `round_to` value: leading whitespace and trailing junk are
    /// ignored, so `"2abc"` is `2`. Returns `None` when no integer can be
    /// read.
    pub fn parse(value: &str) -> Option<Self> {
        parser::leading_integer(value).ok().map(RoundTo)
    }

    /// Rounds `value` to this many decimal places, ties away from zero.
    pub fn apply(self, value: f64) -> f64 {
        let multiplier = 10f64.powf(f64::from(self.0));
        (value * multiplier).round() / multiplier
    }
}

/// Computes the reference answer for a test input.
///
/// An unparseable `round_to` is ignored and the unrounded value is returned.
pub fn reference_answer(input: &TestInput) -> f64 {
    let operation = Operation::from_input(input);
    let value = operation.apply(&input.args);
    tracing::debug!("{operation} of {:?} = {value}", input.args);

    match input.kwarg(ROUND_TO_KEY) {
        Some(raw) => match RoundTo::parse(raw) {
            Some(places) => {
                let rounded = places.apply(value);
                tracing::debug!("Rounded {value} to {} places: {rounded}", places.0);
                rounded
            }
            None => {
                tracing::debug!("Ignoring unparseable {ROUND_TO_KEY} value {raw:?}");
                value
            }
        },
        None => value,
    }
}
