use super::structure::ShipKind;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in a standard fleet.
pub const NUM_SHIPS: usize = 5;

/// The standard fleet, in the order the console asks for it.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Upper bound on recorded structures per board; used as a capacity hint.
pub const MAX_STRUCTURES: usize = 15;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts made by [`Board::random_placement`](super::Board::random_placement)
/// before giving up.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;
