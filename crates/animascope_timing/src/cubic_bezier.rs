// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cubic bezier timing functions.

use crate::{function_arguments, parse_number};
use serde::Serialize;

/// A cubic bezier timing curve through `(0, 0)`, the two control points,
/// and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    /// X of the first control point, in the unit interval
    pub x1: f64,
    /// Y of the first control point
    pub y1: f64,
    /// X of the second control point, in the unit interval
    pub x2: f64,
    /// Y of the second control point
    pub y2: f64,
}

impl CubicBezier {
    /// `linear` keyword curve
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// `ease` keyword curve
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    /// `ease-in` keyword curve
    pub const EASE_IN: Self = Self::new(0.42, 0.0, 1.0, 1.0);
    /// `ease-out` keyword curve
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    /// `ease-in-out` keyword curve
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    /// Create a bezier curve from its control points
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Look up an easing keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "linear" => Some(Self::LINEAR),
            "ease" => Some(Self::EASE),
            "ease-in" => Some(Self::EASE_IN),
            "ease-out" => Some(Self::EASE_OUT),
            "ease-in-out" => Some(Self::EASE_IN_OUT),
            _ => None,
        }
    }

    /// Parse an easing keyword or `cubic-bezier(x1, y1, x2, y2)`.
    ///
    /// The x coordinates must lie in `[0, 1]` for the curve to be a
    /// function of time; values outside that range are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(keyword) = Self::from_keyword(text) {
            return Some(keyword);
        }

        let arguments = function_arguments(text, "cubic-bezier")?;
        let mut numbers = arguments.split(',').map(parse_number);
        let x1 = numbers.next()??;
        let y1 = numbers.next()??;
        let x2 = numbers.next()??;
        let y2 = numbers.next()??;
        if numbers.next().is_some() {
            return None;
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return None;
        }
        Some(Self::new(x1, y1, x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(CubicBezier::parse("ease"), Some(CubicBezier::EASE));
        assert_eq!(CubicBezier::parse("ease-in-out"), Some(CubicBezier::EASE_IN_OUT));
        assert_eq!(CubicBezier::parse(" linear "), Some(CubicBezier::LINEAR));
        assert_eq!(CubicBezier::parse("easy"), None);
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(
            CubicBezier::parse("cubic-bezier(0.25, 0.1, 0.25, 1)"),
            Some(CubicBezier::new(0.25, 0.1, 0.25, 1.0))
        );
        // Y coordinates may overshoot the unit interval.
        assert_eq!(
            CubicBezier::parse("cubic-bezier(0.5, -2, 0.5, 3)"),
            Some(CubicBezier::new(0.5, -2.0, 0.5, 3.0))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(CubicBezier::parse("cubic-bezier(0.25, 0.1, 0.25)"), None);
        assert_eq!(CubicBezier::parse("cubic-bezier(0.25, 0.1, 0.25, 1, 0)"), None);
        assert_eq!(CubicBezier::parse("cubic-bezier(2, 0, 0.5, 1)"), None);
        assert_eq!(CubicBezier::parse("cubic-bezier(a, b, c, d)"), None);
    }
}
