//! Error types for the BeeClust simulation.
//!
//! Two kinds suffice: [`ConfigError`] for construction-time validation and
//! [`SimError`] for the one accessor that can fail on valid input,
//! `score()`.

use std::error::Error;
use std::fmt;

/// Errors raised while constructing or reconfiguring a simulation.
///
/// Every `Display` impl embeds the substring a caller is expected to
/// assert on.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid is not two-dimensional, or has a zero-length dimension.
    WrongDimensions {
        /// Human-readable description of what was found.
        detail: String,
    },
    /// A numeric parameter was not actually numeric.
    ///
    /// Unreachable from [`crate::Cell`]'s statically-typed constructor
    /// (Rust's type system rejects non-numeric values at compile time);
    /// retained for parity with an untyped or FFI-facing constructor, the
    /// way `murk-engine::ConfigError` keeps variants reachable only from
    /// sibling subsystems.
    NotNumeric {
        /// The offending parameter's name.
        parameter: &'static str,
    },
    /// A parameter that must be non-negative was negative.
    Negative {
        /// The offending parameter's name.
        parameter: &'static str,
    },
    /// A probability parameter exceeded `1.0`.
    ProbabilityAboveOne {
        /// The offending parameter's name.
        parameter: &'static str,
    },
    /// `T_cooler <= T_env <= T_heater` was violated.
    TemperatureOrdering {
        /// Configured cooler temperature.
        t_cooler: f64,
        /// Configured environment temperature.
        t_env: f64,
        /// Configured heater temperature.
        t_heater: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongDimensions { detail } => {
                write!(f, "wrong grid dim/shape: {detail}")
            }
            Self::NotNumeric { parameter } => {
                write!(f, "wrong type of {parameter}: not numeric")
            }
            Self::Negative { parameter } => {
                write!(f, "{parameter} cannot be negative (must be positive or zero)")
            }
            Self::ProbabilityAboveOne { parameter } => {
                write!(f, "{parameter} is a probability, it cannot be larger than 1")
            }
            Self::TemperatureOrdering {
                t_cooler,
                t_env,
                t_heater,
            } => write!(
                f,
                "invalid temperature ordering: T_cooler ({t_cooler}) <= T_env ({t_env}) <= T_heater ({t_heater}) must hold"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors raised by accessors on an otherwise-valid simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimError {
    /// `score()` was called with no bees present.
    NoBees,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBees => write!(f, "no bees in beeclust"),
        }
    }
}

impl Error for SimError {}
