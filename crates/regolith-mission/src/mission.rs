//! The command interpreter.

use regolith_core::{Heading, MissionError, Rover, RoverId};
use regolith_grid::Grid;
use tracing::debug;

use crate::fleet::Fleet;

/// Orchestrates validated placement and drive commands against one grid
/// and one fleet.
///
/// This is the only component with cross-cutting policy: occupancy is
/// checked *before* bounds (a cell that is both occupied and out of
/// bounds reports occupancy), and drive sequences abort on the first
/// failing step while keeping the steps that already succeeded.
///
/// Constructing a `MissionControl` requires an already-validated
/// [`Grid`], so the setup → operational transition is one-way by
/// construction: no mission exists before grid validation succeeds, and
/// there is no reconfiguration path afterwards.
///
/// # Examples
///
/// ```
/// use regolith_grid::Grid;
/// use regolith_core::Heading;
/// use regolith_mission::MissionControl;
///
/// let mut mission = MissionControl::new(Grid::new(5, 5).unwrap());
/// mission.place_rover(0, 0, Heading::North).unwrap();
/// mission.drive("MMR").unwrap();
/// assert_eq!(
///     mission.current_status().unwrap(),
///     "Rover 0 is at 0, 2 facing E.",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MissionControl {
    grid: Grid,
    fleet: Fleet,
}

impl MissionControl {
    /// Start a mission on `grid` with an empty fleet.
    pub fn new(grid: Grid) -> Self {
        Self::with_fleet(grid, Fleet::new())
    }

    /// Start a mission on `grid` over an existing fleet.
    pub fn with_fleet(grid: Grid, fleet: Fleet) -> Self {
        Self { grid, fleet }
    }

    /// The mission grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The rover registry.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Place a new rover at `(x, y)` facing `heading`.
    ///
    /// Rejects an occupied cell with
    /// [`MissionError::PositionOccupied`], then an out-of-bounds cell
    /// with [`MissionError::OutOfBounds`] — occupancy first. On success
    /// the rover joins the fleet as the new current rover and its id is
    /// returned.
    pub fn place_rover(
        &mut self,
        x: i32,
        y: i32,
        heading: Heading,
    ) -> Result<RoverId, MissionError> {
        if self.fleet.occupied(x, y) {
            debug!(x, y, "placement rejected: cell occupied");
            return Err(MissionError::PositionOccupied { x, y });
        }
        if !self.grid.contains(x, y) {
            debug!(x, y, "placement rejected: outside grid");
            return Err(MissionError::OutOfBounds { x, y });
        }
        let id = self.fleet.create(x, y, heading);
        debug!(%id, x, y, %heading, "rover placed");
        Ok(id)
    }

    /// Execute a drive sequence against the current rover.
    ///
    /// Steps are scanned left-to-right, case-insensitively: `M` moves
    /// forward, `L` and `R` turn. The sequence aborts on the first
    /// failing step; steps already applied in this call stay applied
    /// (the caller must resubmit the remainder).
    ///
    /// # Errors
    ///
    /// [`MissionError::NoRovers`] when the fleet is empty;
    /// [`MissionError::PositionOccupied`] or
    /// [`MissionError::OutOfBounds`] when a forward step is rejected
    /// (occupancy checked first); [`MissionError::InvalidCommand`] for
    /// any letter other than M/L/R.
    pub fn drive(&mut self, sequence: &str) -> Result<(), MissionError> {
        if self.fleet.is_empty() {
            return Err(MissionError::NoRovers);
        }
        for letter in sequence.chars() {
            let result = match letter.to_ascii_uppercase() {
                'M' => self.step_forward(),
                'L' => self.current_mut().map(|rover| rover.turn_left()),
                'R' => self.current_mut().map(|rover| rover.turn_right()),
                _ => Err(MissionError::InvalidCommand { letter }),
            };
            if let Err(err) = result {
                debug!(step = %letter, %err, "drive aborted");
                return Err(err);
            }
        }
        Ok(())
    }

    /// The current rover's status line.
    pub fn current_status(&self) -> Result<String, MissionError> {
        self.fleet
            .current()
            .map(|rover| rover.status())
            .ok_or(MissionError::NoRovers)
    }

    /// Every rover's status line, in creation order.
    ///
    /// Unlike [`Fleet::all_statuses`], an empty fleet is an error here —
    /// there is nothing to report.
    pub fn status_report(&self) -> Result<String, MissionError> {
        if self.fleet.is_empty() {
            return Err(MissionError::NoRovers);
        }
        Ok(self.fleet.all_statuses())
    }

    /// Validate and apply one forward step for the current rover.
    fn step_forward(&mut self) -> Result<(), MissionError> {
        let (x, y) = self
            .fleet
            .current()
            .ok_or(MissionError::NoRovers)?
            .next_position();
        if self.fleet.occupied(x, y) {
            return Err(MissionError::PositionOccupied { x, y });
        }
        if !self.grid.contains(x, y) {
            return Err(MissionError::OutOfBounds { x, y });
        }
        self.current_mut()?.move_forward();
        Ok(())
    }

    /// The current rover, or [`MissionError::NoRovers`].
    fn current_mut(&mut self) -> Result<&mut Rover, MissionError> {
        self.fleet.current_mut().ok_or(MissionError::NoRovers)
    }
}
