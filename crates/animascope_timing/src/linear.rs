// SPDX-License-Identifier: MIT OR Apache-2.0
//! Piecewise linear easing, the `linear(...)` function syntax.

use crate::{function_arguments, parse_number};
use serde::Serialize;

/// One stop of a piecewise linear easing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearStop {
    /// Output progress at this stop
    pub output: f64,
    /// Input progress of this stop as a fraction, when given explicitly
    /// (`0.5 50%`); stops without one are spaced evenly
    pub input: Option<f64>,
}

/// A piecewise linear easing, e.g. `linear(0, 0.25 25%, 1)`.
///
/// The bare `linear` keyword is not part of this family; it parses as the
/// identity [`CubicBezier`](crate::CubicBezier) curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearEasing {
    /// Ordered easing stops
    pub stops: Vec<LinearStop>,
}

impl LinearEasing {
    /// Parse `linear(<stop>, <stop>, ...)` with at least two stops, where a
    /// stop is an output value optionally followed by an input percentage.
    pub fn parse(text: &str) -> Option<Self> {
        let arguments = function_arguments(text, "linear")?;
        let stops = arguments
            .split(',')
            .map(parse_stop)
            .collect::<Option<Vec<_>>>()?;
        if stops.len() < 2 {
            return None;
        }
        Some(Self { stops })
    }
}

fn parse_stop(entry: &str) -> Option<LinearStop> {
    let mut tokens = entry.split_whitespace();
    let output = parse_number(tokens.next()?)?;
    let input = match tokens.next() {
        Some(token) => Some(parse_percentage(token)?),
        None => None,
    };
    if tokens.next().is_some() {
        return None;
    }
    Some(LinearStop { output, input })
}

fn parse_percentage(token: &str) -> Option<f64> {
    let number = parse_number(token.strip_suffix('%')?)?;
    Some(number / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let easing = LinearEasing::parse("linear(0, 1)").unwrap();
        assert_eq!(easing.stops.len(), 2);
        assert_eq!(easing.stops[0], LinearStop { output: 0.0, input: None });
        assert_eq!(easing.stops[1], LinearStop { output: 1.0, input: None });
    }

    #[test]
    fn test_parse_with_input_percentages() {
        let easing = LinearEasing::parse("linear(0, 0.25 25%, 1)").unwrap();
        assert_eq!(easing.stops[1].output, 0.25);
        assert_eq!(easing.stops[1].input, Some(0.25));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        // Keyword form belongs to the bezier family.
        assert_eq!(LinearEasing::parse("linear"), None);
        assert_eq!(LinearEasing::parse("linear()"), None);
        assert_eq!(LinearEasing::parse("linear(1)"), None);
        assert_eq!(LinearEasing::parse("linear(0, 0.25 25, 1)"), None);
        assert_eq!(LinearEasing::parse("linear(0, x, 1)"), None);
    }
}
