//! The mission error type.
//!
//! Every fallible mission operation returns one of these variants to its
//! direct caller; nothing in the core panics on expected input. All kinds
//! are recoverable — the shell reports them and re-prompts.

use std::error::Error;
use std::fmt;

/// Why a placement or drive command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionError {
    /// The target cell lies outside the grid.
    OutOfBounds {
        /// The rejected x coordinate.
        x: i32,
        /// The rejected y coordinate.
        y: i32,
    },
    /// Another rover already occupies the target cell.
    ///
    /// Checked before bounds: a cell that is both occupied and out of
    /// bounds reports occupancy.
    PositionOccupied {
        /// The contested x coordinate.
        x: i32,
        /// The contested y coordinate.
        y: i32,
    },
    /// A drive step letter other than M, L, or R.
    ///
    /// Steps before the offending letter have already been applied.
    InvalidCommand {
        /// The unrecognized letter, as submitted.
        letter: char,
    },
    /// The operation needs at least one rover, but none exist.
    NoRovers,
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => {
                write!(f, "position ({x}, {y}) is outside the grid")
            }
            Self::PositionOccupied { x, y } => {
                write!(f, "position ({x}, {y}) is already occupied")
            }
            Self::InvalidCommand { letter } => {
                write!(f, "unrecognized drive command '{letter}'")
            }
            Self::NoRovers => write!(f, "no rovers exist"),
        }
    }
}

impl Error for MissionError {}
