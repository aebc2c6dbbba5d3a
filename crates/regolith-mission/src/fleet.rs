//! The rover registry.

use indexmap::IndexMap;
use regolith_core::{Heading, Rover, RoverId};

/// Append-only registry of every rover in a mission.
///
/// Insertion order is creation order is id order: `RoverId(n)` is the
/// n-th rover created, and iteration and status reports follow that
/// order. Rovers are never removed.
///
/// The *current* rover is always the most recently created one; there is
/// no separate selection state. The fleet answers occupancy queries but
/// performs no validation itself — rejecting a placement or move is the
/// mission layer's job.
///
/// # Examples
///
/// ```
/// use regolith_core::{Heading, RoverId};
/// use regolith_mission::Fleet;
///
/// let mut fleet = Fleet::new();
/// let id = fleet.create(0, 0, Heading::North);
/// assert_eq!(id, RoverId(0));
/// assert!(fleet.occupied(0, 0));
/// assert_eq!(fleet.current().map(|r| r.id()), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    rovers: IndexMap<RoverId, Rover>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new rover with id = current count.
    ///
    /// No validation of the position or heading happens here; this
    /// operation cannot fail. Returns the new rover's id.
    pub fn create(&mut self, x: i32, y: i32, heading: Heading) -> RoverId {
        let id = RoverId(self.rovers.len() as u32);
        self.rovers.insert(id, Rover::new(id, x, y, heading));
        id
    }

    /// Number of rovers created so far.
    pub fn len(&self) -> usize {
        self.rovers.len()
    }

    /// Whether no rover has been created yet.
    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }

    /// Whether any rover currently sits at `(x, y)`.
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.rovers.values().any(|r| r.coords() == (x, y))
    }

    /// The most recently created rover, or `None` on an empty fleet.
    pub fn current(&self) -> Option<&Rover> {
        self.rovers.last().map(|(_, rover)| rover)
    }

    /// Mutable access to the most recently created rover.
    pub fn current_mut(&mut self) -> Option<&mut Rover> {
        self.rovers.last_mut().map(|(_, rover)| rover)
    }

    /// Look up a rover by id.
    pub fn get(&self, id: RoverId) -> Option<&Rover> {
        self.rovers.get(&id)
    }

    /// Iterate over all rovers in creation order.
    pub fn rovers(&self) -> impl Iterator<Item = &Rover> {
        self.rovers.values()
    }

    /// Every rover's status line in creation order, each followed by a
    /// newline. An empty fleet yields the empty string.
    pub fn all_statuses(&self) -> String {
        let mut report = String::new();
        for rover in self.rovers.values() {
            report.push_str(&rover.status());
            report.push('\n');
        }
        report
    }
}
