//! Cardinal headings and their turn transitions.

use std::fmt;

/// One of the four cardinal directions a rover can face.
///
/// A heading is always exactly one cardinal value — there are no diagonal
/// or unset states. Turning follows two inverse 4-cycles: right
/// N→E→S→W→N, left N→W→S→E→N.
///
/// The coordinate frame is x-east, y-north: moving while facing
/// [`North`](Heading::North) increases `y`, facing
/// [`East`](Heading::East) increases `x`.
///
/// # Examples
///
/// ```
/// use regolith_core::Heading;
///
/// let h = Heading::North;
/// assert_eq!(h.turn_right(), Heading::East);
/// assert_eq!(h.turn_left(), Heading::West);
/// assert_eq!(h.offset(), (0, 1));
/// assert_eq!(h.to_string(), "N");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing up the y axis.
    North,
    /// Facing down the y axis.
    South,
    /// Facing up the x axis.
    East,
    /// Facing down the x axis.
    West,
}

impl Heading {
    /// All four headings, in N/S/E/W order.
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::South,
        Heading::East,
        Heading::West,
    ];

    /// The heading after a 90° clockwise turn.
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The heading after a 90° counter-clockwise turn.
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The `(dx, dy)` unit translation for one forward step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// The single-letter form used in status lines and command input.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::South => 'S',
            Heading::East => 'E',
            Heading::West => 'W',
        }
    }

    /// Parse a heading from its letter, case-insensitively.
    ///
    /// Returns `None` for anything other than N/S/E/W.
    pub fn from_letter(letter: char) -> Option<Heading> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Heading::North),
            'S' => Some(Heading::South),
            'E' => Some(Heading::East),
            'W' => Some(Heading::West),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn right_cycle_is_n_e_s_w() {
        assert_eq!(Heading::North.turn_right(), Heading::East);
        assert_eq!(Heading::East.turn_right(), Heading::South);
        assert_eq!(Heading::South.turn_right(), Heading::West);
        assert_eq!(Heading::West.turn_right(), Heading::North);
    }

    #[test]
    fn left_cycle_is_n_w_s_e() {
        assert_eq!(Heading::North.turn_left(), Heading::West);
        assert_eq!(Heading::West.turn_left(), Heading::South);
        assert_eq!(Heading::South.turn_left(), Heading::East);
        assert_eq!(Heading::East.turn_left(), Heading::North);
    }

    #[test]
    fn offsets_are_unit_translations() {
        assert_eq!(Heading::North.offset(), (0, 1));
        assert_eq!(Heading::South.offset(), (0, -1));
        assert_eq!(Heading::East.offset(), (1, 0));
        assert_eq!(Heading::West.offset(), (-1, 0));
    }

    #[test]
    fn from_letter_accepts_both_cases() {
        assert_eq!(Heading::from_letter('n'), Some(Heading::North));
        assert_eq!(Heading::from_letter('N'), Some(Heading::North));
        assert_eq!(Heading::from_letter('w'), Some(Heading::West));
        assert_eq!(Heading::from_letter('x'), None);
        assert_eq!(Heading::from_letter('5'), None);
    }

    #[test]
    fn display_round_trips_through_letter() {
        for h in Heading::ALL {
            assert_eq!(Heading::from_letter(h.letter()), Some(h));
            assert_eq!(h.to_string().len(), 1);
        }
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![
            Just(Heading::North),
            Just(Heading::South),
            Just(Heading::East),
            Just(Heading::West),
        ]
    }

    proptest! {
        #[test]
        fn turns_are_inverse(h in arb_heading()) {
            prop_assert_eq!(h.turn_right().turn_left(), h);
            prop_assert_eq!(h.turn_left().turn_right(), h);
        }

        #[test]
        fn four_turns_return_home(h in arb_heading(), extra in 0usize..8) {
            // Any multiple of four turns is the identity.
            let mut r = h;
            let mut l = h;
            for _ in 0..4 * (extra + 1) {
                r = r.turn_right();
                l = l.turn_left();
            }
            prop_assert_eq!(r, h);
            prop_assert_eq!(l, h);
        }

        #[test]
        fn opposite_headings_cancel_offsets(h in arb_heading()) {
            let (dx, dy) = h.offset();
            let (ox, oy) = h.turn_right().turn_right().offset();
            prop_assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
