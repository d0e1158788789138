// Shot-desirability heatmap computed from the visible state of a board.
// Recomputed from scratch on every call; nothing carries over between turns.

use core::fmt;
use log::trace;

use crate::{
    board::BattleBoard,
    config::{HUNT_GAP_BONUS, HUNT_LINE_BONUS, HUNT_NEIGHBOR_BONUS},
    grid::Grid,
    ship::{Cell, Orientation},
};

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Signed heat score per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Heatmap {
    grid: Grid<i32>,
}

impl Heatmap {
    /// # Panics
    ///
    /// Panics on zero-sized dimensions.
    pub fn new(cols: usize, rows: usize) -> Self {
        Heatmap {
            grid: Grid::new(cols, rows),
        }
    }

    /// A zeroed heatmap with the same dimensions as `board`.
    pub fn for_board(board: &BattleBoard) -> Self {
        Self::new(board.cols(), board.rows())
    }

    pub fn grid(&self) -> &Grid<i32> {
        &self.grid
    }

    /// Heat at the wrapped coordinate.
    #[inline]
    pub fn heat(&self, x: i32, y: i32) -> i32 {
        self.grid.get(x, y)
    }

    /// Sum of all heat values.
    pub fn total(&self) -> i32 {
        self.grid.total()
    }

    /// Sum of the heat of the up to eight cells surrounding `(x, y)`.
    /// Cells past the edge contribute nothing.
    pub fn neighborhood_sum(&self, x: i32, y: i32) -> i32 {
        let mut sum = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) == (0, 0) || !self.grid.in_bounds(x + dx, y + dy) {
                    continue;
                }
                sum += self.grid.get(x + dx, y + dy);
            }
        }
        sum
    }

    /// Recompute every cell from `board`: placement counting for each ship
    /// still afloat, then hunt bonuses around known hits.
    pub fn calculate(&mut self, board: &BattleBoard) {
        if self.grid.cols() != board.cols() || self.grid.rows() != board.rows() {
            self.grid = Grid::new(board.cols(), board.rows());
        } else {
            self.grid.fill(0);
        }

        let cols = board.cols() as i32;
        let rows = board.rows() as i32;
        for kind in board.remaining_ships() {
            let len = kind.length() as i32;
            for y in 0..rows {
                for x in 0..cols {
                    for orientation in Orientation::BOTH {
                        if !placement_open(board, x, y, len, orientation) {
                            continue;
                        }
                        let (dx, dy) = orientation.step();
                        for i in 0..len {
                            self.add(x + dx * i, y + dy * i, 1);
                        }
                    }
                }
            }
        }

        self.apply_hunt_bonuses(board);
        trace!("heatmap recomputed, total heat {}", self.total());
    }

    fn apply_hunt_bonuses(&mut self, board: &BattleBoard) {
        let grid = board.grid();
        let is_hit = |x: i32, y: i32| grid.in_bounds(x, y) && grid.get(x, y) == Cell::Hit;
        let is_open = |x: i32, y: i32| grid.in_bounds(x, y) && grid.get(x, y) == Cell::Empty;

        let cols = board.cols() as i32;
        let rows = board.rows() as i32;
        for y in 0..rows {
            for x in 0..cols {
                match grid.get(x, y) {
                    Cell::Hit => {
                        let horizontal = is_hit(x - 1, y) as i32 + is_hit(x + 1, y) as i32;
                        let vertical = is_hit(x, y - 1) as i32 + is_hit(x, y + 1) as i32;
                        for (dx, dy) in ORTHOGONAL {
                            if !is_open(x + dx, y + dy) {
                                continue;
                            }
                            // The neighbor itself is open, so the only other
                            // same-axis support is the hit on the far side.
                            let same = is_hit(x - dx, y - dy) as i32;
                            let cross = if dx != 0 { vertical } else { horizontal };
                            if same == 0 && cross > 0 {
                                continue;
                            }
                            self.add(
                                x + dx,
                                y + dy,
                                HUNT_NEIGHBOR_BONUS + HUNT_LINE_BONUS * same,
                            );
                        }
                    }
                    Cell::Empty => {
                        let gap = (is_hit(x - 1, y) && is_hit(x + 1, y))
                            || (is_hit(x, y - 1) && is_hit(x, y + 1));
                        if gap {
                            self.add(x, y, HUNT_GAP_BONUS);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    #[inline]
    fn add(&mut self, x: i32, y: i32, amount: i32) {
        let v = self.grid.get(x, y);
        self.grid.set(x, y, v + amount);
    }
}

/// Whether a ship of `len` could still sit at `(x, y)`: fully on the board
/// and covering only cells nobody has fired at.
fn placement_open(board: &BattleBoard, x: i32, y: i32, len: i32, orientation: Orientation) -> bool {
    let (dx, dy) = orientation.step();
    let grid = board.grid();
    if !grid.in_bounds(x + dx * (len - 1), y + dy * (len - 1)) {
        return false;
    }
    (0..len).all(|i| grid.get(x + dx * i, y + dy * i) == Cell::Empty)
}

impl fmt::Display for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.as_slice().chunks(self.grid.cols()) {
            for v in row {
                write!(f, "{:>5}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heatmap {}x{} (total {}):", self.grid.cols(), self.grid.rows(), self.total())?;
        write!(f, "{}", self)
    }
}
