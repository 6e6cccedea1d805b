// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parsed timing-function values for Animascope.
//!
//! Remote animation payloads carry timing functions as raw strings in the
//! syntax the styling engine emits. This crate parses those strings into
//! typed values:
//! - Cubic bezier curves (and the named easing keywords)
//! - Piecewise linear easing
//! - Step functions
//! - Spring curves
//!
//! [`TimingFunction::parse`] tries each family in a fixed order and returns
//! the first successful parse, mirroring how the remote side serializes.

pub mod cubic_bezier;
pub mod linear;
pub mod spring;
pub mod steps;

pub use cubic_bezier::CubicBezier;
pub use linear::{LinearEasing, LinearStop};
pub use spring::Spring;
pub use steps::{StepPosition, Steps};

use serde::Serialize;

/// A parsed timing function of any supported family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TimingFunction {
    /// Cubic bezier curve (including keyword forms such as `ease-in`)
    CubicBezier(CubicBezier),
    /// Piecewise linear easing, `linear(...)` function syntax
    Linear(LinearEasing),
    /// Step function
    Steps(Steps),
    /// Spring curve
    Spring(Spring),
}

impl TimingFunction {
    /// Parse a timing-function string, trying cubic-bezier, then linear,
    /// then steps, then spring. The first family that recognizes the
    /// string wins; returns `None` when no family does.
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(bezier) = CubicBezier::parse(text) {
            return Some(Self::CubicBezier(bezier));
        }
        if let Some(linear) = LinearEasing::parse(text) {
            return Some(Self::Linear(linear));
        }
        if let Some(steps) = Steps::parse(text) {
            return Some(Self::Steps(steps));
        }
        if let Some(spring) = Spring::parse(text) {
            return Some(Self::Spring(spring));
        }
        None
    }
}

/// Extract the argument list of `name(args)` function syntax.
///
/// Returns the text between the parentheses, untrimmed, or `None` when the
/// input is not exactly a call of `name`.
pub(crate) fn function_arguments<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let text = text.trim();
    let rest = text.strip_prefix(name)?.trim_start();
    let rest = rest.strip_prefix('(')?;
    rest.strip_suffix(')')
}

/// Parse a finite floating-point number, rejecting `inf`/`nan` spellings.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    let value: f64 = token.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
