// SPDX-License-Identifier: MIT OR Apache-2.0
//! Step timing functions.

use crate::function_arguments;
use serde::Serialize;

/// Where the jumps of a step function occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepPosition {
    /// Jump at the start of each interval (`start` / `jump-start`)
    JumpStart,
    /// Jump at the end of each interval (`end` / `jump-end`)
    JumpEnd,
    /// No jump at either boundary (`jump-none`)
    JumpNone,
    /// Jump at both boundaries (`jump-both`)
    JumpBoth,
}

impl StepPosition {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "start" | "jump-start" => Some(Self::JumpStart),
            "end" | "jump-end" => Some(Self::JumpEnd),
            "jump-none" => Some(Self::JumpNone),
            "jump-both" => Some(Self::JumpBoth),
            _ => None,
        }
    }
}

/// A step timing function, e.g. `steps(4, jump-end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Steps {
    /// Number of steps, at least one
    pub count: u32,
    /// Jump position; `steps(n)` defaults to [`StepPosition::JumpEnd`]
    pub position: StepPosition,
}

impl Steps {
    /// Parse `step-start`, `step-end`, `steps(n)`, or `steps(n, <position>)`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "step-start" => {
                return Some(Self { count: 1, position: StepPosition::JumpStart });
            }
            "step-end" => {
                return Some(Self { count: 1, position: StepPosition::JumpEnd });
            }
            _ => {}
        }

        let arguments = function_arguments(text, "steps")?;
        let mut parts = arguments.split(',');
        let count: u32 = parts.next()?.trim().parse().ok()?;
        let position = match parts.next() {
            Some(keyword) => StepPosition::from_keyword(keyword.trim())?,
            None => StepPosition::JumpEnd,
        };
        if parts.next().is_some() || count == 0 {
            return None;
        }
        Some(Self { count, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            Steps::parse("step-start"),
            Some(Steps { count: 1, position: StepPosition::JumpStart })
        );
        assert_eq!(
            Steps::parse("step-end"),
            Some(Steps { count: 1, position: StepPosition::JumpEnd })
        );
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(
            Steps::parse("steps(4)"),
            Some(Steps { count: 4, position: StepPosition::JumpEnd })
        );
        assert_eq!(
            Steps::parse("steps(3, jump-both)"),
            Some(Steps { count: 3, position: StepPosition::JumpBoth })
        );
        assert_eq!(
            Steps::parse("steps( 2 , start )"),
            Some(Steps { count: 2, position: StepPosition::JumpStart })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Steps::parse("steps(0)"), None);
        assert_eq!(Steps::parse("steps(-1)"), None);
        assert_eq!(Steps::parse("steps(4, sideways)"), None);
        assert_eq!(Steps::parse("steps(4, end, extra)"), None);
        assert_eq!(Steps::parse("steps(1.5)"), None);
    }
}
