//! Interactive mission shell: menus, input parsing, message rendering.
//!
//! The shell owns all free-text handling. It tokenizes what the operator
//! types, hands validated structured commands to
//! [`MissionControl`], and renders each typed rejection back as the
//! matching menu message before re-prompting. Core state is never touched
//! on a rejected command, apart from drive steps that had already
//! succeeded when a later step failed.

use crate::io::UserIo;
use regolith::prelude::*;

const INVALID_INPUT: &str = "Invalid input, please try again.";

/// Grid-size input that could not become a [`Grid`].
enum SetupError {
    /// Not two whitespace-separated digit strings.
    Malformed,
    /// Parsed, but a dimension is zero or above the maximum.
    OutOfRange,
}

/// The menu-driven mission shell.
///
/// Generic over [`UserIo`] so tests can script the terminal.
pub struct Shell<I> {
    io: I,
}

impl<I: UserIo> Shell<I> {
    /// Create a shell over the given I/O collaborator.
    pub fn new(io: I) -> Self {
        Self { io }
    }

    /// Run the whole mission: greeting, grid setup, then the main menu
    /// loop until the operator exits or input ends.
    pub fn run(&mut self) {
        self.io.write_line("Welcome NASA's Mars Rover Initiative.");
        let Some(mut mission) = self.grid_setup() else {
            return;
        };
        self.mission_loop(&mut mission);
    }

    /// Print the inline prompt and read one line.
    fn prompt(&mut self) -> Option<String> {
        self.io.write(": ");
        self.io.read_line()
    }

    fn clear_and_write_line(&mut self, message: &str) {
        self.io.clear();
        self.io.write_line(message);
    }

    /// Ask for grid dimensions until a valid grid is produced.
    ///
    /// This is the one-way setup → operational transition: the mission
    /// value only comes into existence once the grid is fixed.
    fn grid_setup(&mut self) -> Option<MissionControl> {
        loop {
            self.io.write_line(&format!(
                "What size would you like to make the grid?\n\
                 Max size: {max}x{max} (Ex. '3 4' makes a 3x4 grid.)",
                max = Grid::MAX_DIM
            ));
            let input = self.prompt()?;
            match parse_grid_size(&input) {
                Ok(grid) => {
                    self.clear_and_write_line(&format!(
                        "Grid was initialized with size {}x{}",
                        grid.width(),
                        grid.height()
                    ));
                    return Some(MissionControl::new(grid));
                }
                Err(SetupError::Malformed) => {
                    self.clear_and_write_line("Invalid grid size input.");
                }
                Err(SetupError::OutOfRange) => {
                    self.clear_and_write_line(&format!(
                        "Invalid grid size input, please use a valid grid size \
                         0 < Length/Width < {}.",
                        Grid::MAX_DIM
                    ));
                }
            }
        }
    }

    /// The main menu loop. Returns when the operator exits.
    fn mission_loop(&mut self, mission: &mut MissionControl) {
        loop {
            self.io.write_line(
                "____MAIN MENU____\n\
                 [1] Launch Rover\n\
                 [2] Drive Rover\n\
                 [3] Rover Status\n\
                 [4] Exit",
            );
            let Some(input) = self.prompt() else {
                return;
            };
            let more = match input.as_str() {
                "1" => self.launch_menu(mission),
                "2" => self.drive_menu(mission),
                "3" => {
                    self.rover_status(mission);
                    Some(())
                }
                "4" => return,
                _ => {
                    self.clear_and_write_line(INVALID_INPUT);
                    Some(())
                }
            };
            if more.is_none() {
                return;
            }
        }
    }

    /// Launch-a-rover submenu. `None` means input ended.
    fn launch_menu(&mut self, mission: &mut MissionControl) -> Option<()> {
        self.io.clear();
        loop {
            self.io.write_line(
                "Where would you like to place the new rover?\n\
                 Syntax: 'X Y Direction' ('E' to exit)",
            );
            let input = self.prompt()?.to_uppercase();
            let tokens: Vec<&str> = input.split_whitespace().collect();
            if tokens.first() == Some(&"E") {
                self.io.clear();
                return Some(());
            }
            let Some((x, y, heading)) = parse_placement(&tokens) else {
                self.clear_and_write_line(INVALID_INPUT);
                continue;
            };
            match mission.place_rover(x, y, heading) {
                Ok(_) => {
                    self.clear_and_write_line("Rover launched successfully.");
                    return Some(());
                }
                Err(err) => self.clear_and_write_line(placement_message(&err)),
            }
        }
    }

    /// Drive-the-current-rover submenu. `None` means input ended.
    fn drive_menu(&mut self, mission: &mut MissionControl) -> Option<()> {
        if mission.fleet().is_empty() {
            self.clear_and_write_line("There are no rover's to drive.");
            return Some(());
        }
        self.io.clear();
        loop {
            let status = match mission.current_status() {
                Ok(status) => status,
                Err(err) => {
                    self.clear_and_write_line(drive_message(&err));
                    return Some(());
                }
            };
            self.io.write_line(&status);
            self.io.write_line(
                "M to move forward\n\
                 L to turn left\n\
                 R to turn right\n\
                 E to exit",
            );
            let input = self.prompt()?.to_uppercase();
            if input == "E" {
                break;
            }
            if input.is_empty() {
                self.clear_and_write_line(INVALID_INPUT);
                continue;
            }
            match mission.drive(&input) {
                Ok(()) => self.io.clear(),
                Err(err) => self.clear_and_write_line(drive_message(&err)),
            }
        }
        self.io.clear();
        Some(())
    }

    /// Print every rover's status line.
    fn rover_status(&mut self, mission: &MissionControl) {
        match mission.status_report() {
            Ok(report) => self.clear_and_write_line(&report),
            Err(MissionError::NoRovers) => {
                self.clear_and_write_line("There are no rover's to output.");
            }
            Err(err) => self.clear_and_write_line(&err.to_string()),
        }
    }
}

/// Whether `token` is a non-empty string of ASCII digits.
fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `"W H"` into a validated grid.
fn parse_grid_size(input: &str) -> Result<Grid, SetupError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [width, height] = tokens.as_slice() else {
        return Err(SetupError::Malformed);
    };
    if !is_number(width) || !is_number(height) {
        return Err(SetupError::Malformed);
    }
    // Digit strings too large for u32 are out of range, not a crash.
    let width = width.parse().map_err(|_| SetupError::OutOfRange)?;
    let height = height.parse().map_err(|_| SetupError::OutOfRange)?;
    Grid::new(width, height).map_err(|_| SetupError::OutOfRange)
}

/// Parse uppercased `["X", "Y", "H"]` tokens into a placement request.
fn parse_placement(tokens: &[&str]) -> Option<(i32, i32, Heading)> {
    let [x, y, heading] = tokens else {
        return None;
    };
    if !is_number(x) || !is_number(y) {
        return None;
    }
    let mut letters = heading.chars();
    let letter = letters.next()?;
    if letters.next().is_some() {
        return None;
    }
    let heading = Heading::from_letter(letter)?;
    Some((x.parse().ok()?, y.parse().ok()?, heading))
}

/// The launch-menu message for a placement rejection.
fn placement_message(err: &MissionError) -> &'static str {
    match err {
        MissionError::PositionOccupied { .. } => "Cannot place a rover here, space occupied.",
        MissionError::OutOfBounds { .. } => "Cannot place a rover outside of grid.",
        MissionError::InvalidCommand { .. } | MissionError::NoRovers => INVALID_INPUT,
    }
}

/// The drive-menu message for a drive rejection.
fn drive_message(err: &MissionError) -> &'static str {
    match err {
        MissionError::PositionOccupied { .. } => {
            "Cannot move forward, there is a rover in the way."
        }
        MissionError::OutOfBounds { .. } => "You have reached the edge. Turn around.",
        MissionError::InvalidCommand { .. } => INVALID_INPUT,
        MissionError::NoRovers => "There are no rover's to drive.",
    }
}
