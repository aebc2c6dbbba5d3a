//! The rover value type.

use crate::heading::Heading;
use crate::id::RoverId;
use std::fmt;

/// A positioned, headed rover.
///
/// A rover is a pure value-holder: it knows nothing about the grid or
/// about other rovers. [`move_forward()`](Rover::move_forward) performs no
/// validation — bounds and occupancy policy live in the mission layer,
/// which checks [`next_position()`](Rover::next_position) before asking
/// the rover to move.
///
/// # Examples
///
/// ```
/// use regolith_core::{Heading, Rover, RoverId};
///
/// let mut rover = Rover::new(RoverId(0), 0, 0, Heading::North);
/// rover.move_forward();
/// rover.turn_right();
/// assert_eq!(rover.coords(), (0, 1));
/// assert_eq!(rover.status(), "Rover 0 is at 0, 1 facing E.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    id: RoverId,
    x: i32,
    y: i32,
    heading: Heading,
}

impl Rover {
    /// Create a rover at its initial position and heading.
    ///
    /// Construction is placement: all four fields are fixed here, and the
    /// id never changes afterwards.
    pub fn new(id: RoverId, x: i32, y: i32, heading: Heading) -> Self {
        Self { id, x, y, heading }
    }

    /// This rover's immutable id.
    pub fn id(&self) -> RoverId {
        self.id
    }

    /// Current x coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Current position as `(x, y)`.
    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Rotate 90° clockwise. Always succeeds.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Rotate 90° counter-clockwise. Always succeeds.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    /// The cell one step ahead along the current heading, without moving.
    pub fn next_position(&self) -> (i32, i32) {
        let (dx, dy) = self.heading.offset();
        (self.x + dx, self.y + dy)
    }

    /// Advance one unit along the current heading.
    ///
    /// Unconditional: the caller is responsible for having validated the
    /// target cell against bounds and occupancy.
    pub fn move_forward(&mut self) {
        let (x, y) = self.next_position();
        self.x = x;
        self.y = y;
    }

    /// The status line for this rover.
    ///
    /// The exact format `Rover {id} is at {x}, {y} facing {heading}.` is a
    /// compatibility contract.
    pub fn status(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rover {} is at {}, {} facing {}.",
            self.id, self.x, self.y, self.heading
        )
    }
}
