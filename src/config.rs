use crate::ship::ShipKind;

pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_ROWS: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = ShipKind::ALL;

/// Random placements tried per ship while seeding before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Hunt-mode bonus for an empty cell orthogonally adjacent to a hit.
pub const HUNT_NEIGHBOR_BONUS: i32 = 100;
/// Extra bonus per supporting hit on the same axis as the neighbor.
pub const HUNT_LINE_BONUS: i32 = 500;
/// Flat bonus for an empty cell sitting between two hits.
pub const HUNT_GAP_BONUS: i32 = 500;

/// Simulated games give up after `cols * rows * MOVE_CEILING_FACTOR` moves.
pub const MOVE_CEILING_FACTOR: usize = 2;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Sum of the lengths of `fleet`.
pub const fn fleet_cells(fleet: &[ShipKind]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}
