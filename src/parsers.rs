#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

peg::parser! {
    /// includes grammars for reading numbers out of test inputs and submissions.
    ///
    /// Both public rules read a prefix and ignore whatever follows it, the way
    /// a stream extraction would.
    pub grammar parser() for str {
        /// matches any sequence of 1 or more digits
        rule digits() = ['0'..='9']+

        /// matches an optional leading sign
        rule sign() = ['+' | '-']

        /// matches a scientific notation suffix, eg. `e-3`. A marker with no
        /// digits after it is still consumed and yields `None`.
        rule exponent() -> Option<&'input str>
            = e:$(['e' | 'E'] sign()? digits()) { Some(e) }
            / ['e' | 'E'] sign()? { None }

        /// matches `12`, `12.`, `12.5` or `.5`
        rule mantissa() = digits() ("." digits()?)? / "." digits()

        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[' ' | '\n' | '\t' | '\r' | '\x0B' | '\x0C']+}

        /// skips leading whitespace and parses the longest decimal number
        /// prefix. Returns the number and the byte offset just past it.
        /// Fails on a dangling exponent (`1e`, `1e+`) and on values that
        /// overflow to infinity.
        pub rule leading_number() -> (f64, usize)
            = whitespace()? m:$(sign()? mantissa()) x:exponent()? end:position!() [_]*
            {?
                match x {
                    None => finite(m).map(|value| (value, end)),
                    Some(Some(e)) => finite(&format!("{m}{e}")).map(|value| (value, end)),
                    Some(None) => Err("exponent digits"),
                }
            }

        /// skips leading whitespace and parses the longest integer prefix;
        /// anything after the digits is ignored.
        pub rule leading_integer() -> i32
            = whitespace()? n:$(sign()? digits()) [_]*
            {? n.parse().or(Err("i32")) }
    }
}

/// Parses `text` as a finite `f64`.
fn finite(text: &str) -> Result<f64, &'static str> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or("finite f64")
}

/// Reads numbers from `line` until the end or until something that is not a
/// number is reached. `3abc 4` yields `[3.0]`.
pub fn numbers_prefix(line: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut rest = line;

    while let Ok((value, end)) = parser::leading_number(rest) {
        numbers.push(value);
        rest = &rest[end..];
    }

    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_and_signed_numbers() {
        assert_eq!(parser::leading_number("42"), Ok((42.0, 2)));
        assert_eq!(parser::leading_number("  -1.5 rest"), Ok((-1.5, 6)));
        assert_eq!(parser::leading_number("+.5"), Ok((0.5, 3)));
        assert_eq!(parser::leading_number("3."), Ok((3.0, 2)));
        assert_eq!(parser::leading_number("2.5e2"), Ok((250.0, 5)));
    }

    #[test]
    fn dangling_exponent_is_not_a_number() {
        assert!(parser::leading_number("1e").is_err());
        assert!(parser::leading_number("1e+").is_err());
        assert!(parser::leading_number("7E+x").is_err());
        assert_eq!(parser::leading_number("7E+2x"), Ok((700.0, 4)));
    }

    #[test]
    fn overflowing_numbers_are_rejected() {
        assert!(parser::leading_number("1e999").is_err());
        assert!(parser::leading_number("-1e999").is_err());
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(parser::leading_number("").is_err());
        assert!(parser::leading_number("   ").is_err());
        assert!(parser::leading_number("abc").is_err());
        assert!(parser::leading_number("-").is_err());
        assert!(parser::leading_number(".").is_err());
    }

    #[test]
    fn numbers_prefix_stops_at_first_non_number() {
        assert_eq!(numbers_prefix("2 3 5"), vec![2.0, 3.0, 5.0]);
        assert_eq!(numbers_prefix("1 two 3"), vec![1.0]);
        assert_eq!(numbers_prefix("3abc 4"), vec![3.0]);
        assert_eq!(numbers_prefix("1 2e"), vec![1.0]);
        assert!(numbers_prefix("1e999 2").is_empty());
        assert_eq!(numbers_prefix("\t1\t 2  "), vec![1.0, 2.0]);
        assert!(numbers_prefix("").is_empty());
    }

    #[test]
    fn integer_prefix_behaves_like_stoi() {
        assert_eq!(parser::leading_integer("2"), Ok(2));
        assert_eq!(parser::leading_integer(" -3"), Ok(-3));
        assert_eq!(parser::leading_integer("+4"), Ok(4));
        assert_eq!(parser::leading_integer("2abc"), Ok(2));
        assert_eq!(parser::leading_integer("1.9"), Ok(1));
        assert!(parser::leading_integer("abc").is_err());
        assert!(parser::leading_integer("").is_err());
        assert!(parser::leading_integer("99999999999").is_err());
    }
}
