//! Mission grid bounds for the Regolith rover simulator.
//!
//! A [`Grid`] is fixed once at mission setup and never reconfigured. It
//! answers exactly one question — is a coordinate inside the mission
//! rectangle — and owns the dimension validation that makes an invalid
//! grid unrepresentable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
