//! Crate-level error types.

use std::fmt;

/// Errors produced by the flightpath crate.
///
/// Every variant is a setup-time failure. The per-frame update never
/// fails; out-of-range frame inputs are clamped instead.
#[derive(Debug)]
pub enum FlightError {
    /// A path curve needs at least two control points.
    TooFewControlPoints {
        /// Number of control points that were supplied.
        count: usize,
    },
    /// A control point contains a NaN or infinite coordinate.
    NonFiniteControlPoint {
        /// Index of the offending control point.
        index: usize,
    },
    /// An option value is outside its accepted range.
    InvalidOption(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewControlPoints { count } => write!(
                f,
                "path curve needs at least 2 control points, got {count}"
            ),
            Self::NonFiniteControlPoint { index } => {
                write!(f, "control point {index} is not finite")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlightError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
