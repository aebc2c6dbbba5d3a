//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid {
        /// Which dimension was zero: `"width"` or `"height"`.
        name: &'static str,
    },
    /// A dimension exceeds the mission maximum.
    DimensionTooLarge {
        /// Which dimension: `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { name } => {
                write!(f, "grid {name} must be at least 1")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}
