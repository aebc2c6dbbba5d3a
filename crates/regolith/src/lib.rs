//! Regolith: a rover mission simulator on a bounded 2-D grid.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Regolith sub-crates. For most users, adding `regolith` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use regolith::prelude::*;
//!
//! // Fix the mission grid: closed bounds, so a 5x5 grid spans
//! // coordinates 0..=5 on each axis.
//! let grid = Grid::new(5, 5).unwrap();
//! let mut mission = MissionControl::new(grid);
//!
//! // Launch a rover and drive it: two steps north, then face east.
//! mission.place_rover(0, 0, Heading::North).unwrap();
//! mission.drive("MMR").unwrap();
//! assert_eq!(
//!     mission.current_status().unwrap(),
//!     "Rover 0 is at 0, 2 facing E.",
//! );
//!
//! // Rejected commands come back as typed errors.
//! assert_eq!(
//!     mission.place_rover(0, 2, Heading::South),
//!     Err(MissionError::PositionOccupied { x: 0, y: 2 }),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `regolith-core` | Rover id, heading, rover, mission errors |
//! | [`grid`] | `regolith-grid` | Mission grid bounds and construction errors |
//! | [`mission`] | `regolith-mission` | Fleet registry and command interpreter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`regolith-core`).
///
/// Contains [`types::RoverId`], [`types::Heading`], the [`types::Rover`]
/// value type, and [`types::MissionError`].
pub use regolith_core as types;

/// Mission grid bounds (`regolith-grid`).
///
/// Provides [`grid::Grid`] and [`grid::GridError`].
pub use regolith_grid as grid;

/// Fleet registry and command interpreter (`regolith-mission`).
///
/// Provides [`mission::Fleet`] and [`mission::MissionControl`].
pub use regolith_mission as mission;

/// Common imports for typical Regolith usage.
///
/// ```rust
/// use regolith::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use regolith_core::{Heading, MissionError, Rover, RoverId};

    // Grid
    pub use regolith_grid::{Grid, GridError};

    // Mission
    pub use regolith_mission::{Fleet, MissionControl};
}
