//! Core types for the Regolith rover mission simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary used throughout the workspace: rover identity,
//! cardinal headings and their turn transitions, the rover value type, and
//! the mission error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heading;
pub mod id;
pub mod rover;

pub use error::MissionError;
pub use heading::Heading;
pub use id::RoverId;
pub use rover::Rover;
