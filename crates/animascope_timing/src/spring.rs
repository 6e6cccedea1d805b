// SPDX-License-Identifier: MIT OR Apache-2.0
//! Spring timing functions.

use crate::{function_arguments, parse_number};
use serde::Serialize;

/// A spring timing curve, e.g. `spring(1 100 10 0)`.
///
/// Arguments are space-separated: mass, stiffness, damping, initial
/// velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    /// Mass of the simulated object, positive
    pub mass: f64,
    /// Spring stiffness, positive
    pub stiffness: f64,
    /// Damping coefficient, non-negative
    pub damping: f64,
    /// Initial velocity
    pub initial_velocity: f64,
}

impl Spring {
    /// Parse `spring(mass stiffness damping initialVelocity)`.
    pub fn parse(text: &str) -> Option<Self> {
        let arguments = function_arguments(text, "spring")?;
        let mut numbers = arguments.split_whitespace().map(parse_number);
        let mass = numbers.next()??;
        let stiffness = numbers.next()??;
        let damping = numbers.next()??;
        let initial_velocity = numbers.next()??;
        if numbers.next().is_some() {
            return None;
        }
        if mass <= 0.0 || stiffness <= 0.0 || damping < 0.0 {
            return None;
        }
        Some(Self { mass, stiffness, damping, initial_velocity })
    }
}
