//! Fleet registry and command interpreter for the Regolith rover simulator.
//!
//! [`Fleet`] owns the append-only rover collection and answers identity
//! and occupancy queries. [`MissionControl`] is the orchestration core:
//! it validates placement and drive commands against the grid and the
//! fleet, and is the only component with cross-cutting policy (occupancy
//! checked before bounds, abort-on-first-failure drive sequences).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fleet;
pub mod mission;

pub use fleet::Fleet;
pub use mission::MissionControl;
