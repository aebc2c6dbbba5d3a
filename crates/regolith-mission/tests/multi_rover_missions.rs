//! End-to-end mission scenarios exercising placement, driving, collisions,
//! and reporting across several rovers.

use regolith_core::{Heading, MissionError, RoverId};
use regolith_grid::Grid;
use regolith_mission::MissionControl;

#[test]
fn convoy_moves_without_disturbing_parked_rovers() {
    let mut mission = MissionControl::new(Grid::new(5, 5).unwrap());
    mission.place_rover(1, 2, Heading::North).unwrap();
    mission.place_rover(3, 3, Heading::East).unwrap();

    // Each newly placed rover becomes the drive target.
    mission.drive("MLM").unwrap();
    let report = mission.status_report().unwrap();
    assert_eq!(
        report,
        "Rover 0 is at 1, 2 facing N.\nRover 1 is at 4, 4 facing N.\n"
    );
}

#[test]
fn a_rover_cannot_drive_through_a_parked_one() {
    let mut mission = MissionControl::new(Grid::new(5, 5).unwrap());
    mission.place_rover(2, 3, Heading::North).unwrap();
    mission.place_rover(2, 0, Heading::North).unwrap();

    // Two steps succeed, the third would enter the parked rover's cell.
    assert_eq!(
        mission.drive("MMM"),
        Err(MissionError::PositionOccupied { x: 2, y: 3 })
    );
    assert_eq!(mission.fleet().current().unwrap().coords(), (2, 2));

    // Turning away and resubmitting succeeds.
    mission.drive("RMLM").unwrap();
    assert_eq!(mission.fleet().current().unwrap().coords(), (3, 3));
}

#[test]
fn walking_the_perimeter_of_the_smallest_grid() {
    let mut mission = MissionControl::new(Grid::new(1, 1).unwrap());
    mission.place_rover(0, 0, Heading::North).unwrap();

    // Closed bounds: a 1x1 grid is a 2x2 square of positions.
    mission.drive("MRMRMRMR").unwrap();
    let rover = mission.fleet().current().unwrap();
    assert_eq!(rover.coords(), (0, 0));
    assert_eq!(rover.heading(), Heading::North);

    // One more step in any outward direction falls off.
    mission.drive("L").unwrap();
    assert_eq!(
        mission.drive("M"),
        Err(MissionError::OutOfBounds { x: -1, y: 0 })
    );
}

#[test]
fn vacated_cells_become_placeable_again() {
    let mut mission = MissionControl::new(Grid::new(5, 5).unwrap());
    mission.place_rover(0, 0, Heading::North).unwrap();
    mission.drive("MM").unwrap();

    // (0, 0) is free again; the newcomer takes it and becomes current.
    let id = mission.place_rover(0, 0, Heading::East).unwrap();
    assert_eq!(id, RoverId(1));
    assert_eq!(
        mission.current_status().unwrap(),
        "Rover 1 is at 0, 0 facing E."
    );
}

#[test]
fn launch_rejections_do_not_consume_ids() {
    let mut mission = MissionControl::new(Grid::new(3, 3).unwrap());
    mission.place_rover(0, 0, Heading::North).unwrap();

    assert!(mission.place_rover(0, 0, Heading::South).is_err());
    assert!(mission.place_rover(9, 9, Heading::South).is_err());

    let id = mission.place_rover(1, 1, Heading::South).unwrap();
    assert_eq!(id, RoverId(1));
    assert_eq!(mission.fleet().len(), 2);
}
