//! Battle board: ship placement, attack resolution, and sunk-ship bookkeeping
//! on top of a [`Grid`] of [`Cell`]s.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::grid::Grid;
use crate::ship::{Cell, Orientation, ShipKind};

/// One player's board, either the ground truth with ships on it or an
/// observer's view that only ever holds `Empty`, `Miss`, `Hit` and `Sunk`.
#[derive(Clone, PartialEq, Eq)]
pub struct BattleBoard {
    grid: Grid<Cell>,
    sunk: [bool; NUM_SHIPS],
    /// Normalized `(x, y)` of every hit, mapped to the ship that was there.
    /// The grid loses that information once a cell becomes `Hit`.
    hit_locations: BTreeMap<(usize, usize), ShipKind>,
}

impl BattleBoard {
    /// Create an empty board (no ships, nothing attacked).
    ///
    /// # Panics
    ///
    /// Panics on zero-sized dimensions; see [`BattleBoard::try_new`].
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::from_grid(Grid::new(cols, rows))
    }

    pub fn try_new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Self::from_grid(Grid::try_new(cols, rows)?))
    }

    fn from_grid(grid: Grid<Cell>) -> Self {
        BattleBoard {
            grid,
            sunk: [false; NUM_SHIPS],
            hit_locations: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Read-only access to the underlying grid.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Cell state at the wrapped coordinate.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    /// Overwrite a cell directly. Observer views use this to mirror attack
    /// results; it bypasses every placement and attack rule.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        self.grid.set(x, y, cell);
    }

    /// Clear every cell and forget all sunk ships and hit locations.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Empty);
        self.sunk = [false; NUM_SHIPS];
        self.hit_locations.clear();
    }

    /// Whether a ship of `kind` fits at `(x, y)` without leaving the board or
    /// touching a non-empty cell. Placement never wraps; a ship may sit flush
    /// against the far edge.
    pub fn can_place(&self, x: i32, y: i32, kind: ShipKind, orientation: Orientation) -> bool {
        self.check_placement(x, y, kind, orientation).is_ok()
    }

    fn check_placement(
        &self,
        x: i32,
        y: i32,
        kind: ShipKind,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let len = kind.length() as i64;
        let (dx, dy) = orientation.step();
        let end_x = x as i64 + dx as i64 * len;
        let end_y = y as i64 + dy as i64 * len;
        if x < 0 || y < 0 || end_x.max(x as i64 + 1) > self.cols() as i64 {
            return Err(BoardError::ShipOutOfBounds);
        }
        if end_y.max(y as i64 + 1) > self.rows() as i64 {
            return Err(BoardError::ShipOutOfBounds);
        }
        let occupied = (0..kind.length() as i32)
            .any(|i| !self.grid.get(x + dx * i, y + dy * i).is_empty());
        if occupied {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(())
    }

    /// Place a ship starting at `(x, y)`, extending right or down. On error
    /// the board is left untouched.
    pub fn place_ship(
        &mut self,
        x: i32,
        y: i32,
        kind: ShipKind,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if let Err(e) = self.check_placement(x, y, kind, orientation) {
            debug!("rejected {} at ({}, {}) {:?}: {}", kind, x, y, orientation, e);
            return Err(e);
        }
        self.write_ship(x, y, kind, orientation);
        Ok(())
    }

    /// Mark the ship's cells. Callers must have checked the placement.
    fn write_ship(&mut self, x: i32, y: i32, kind: ShipKind, orientation: Orientation) {
        let (dx, dy) = orientation.step();
        for i in 0..kind.length() as i32 {
            self.grid.set(x + dx * i, y + dy * i, Cell::Ship(kind));
        }
    }

    /// Place a ship from raw integer codes, as a host layer would send them.
    /// Unknown kinds or orientations are rejected before anything is touched.
    pub fn place_ship_code(
        &mut self,
        x: i32,
        y: i32,
        kind: u8,
        orientation: u8,
    ) -> Result<(), BoardError> {
        let kind = ShipKind::try_from(kind)?;
        let orientation = Orientation::try_from(orientation)?;
        self.place_ship(x, y, kind, orientation)
    }

    /// Pick a random legal `(x, y, orientation)` for `kind`, giving up after
    /// [`MAX_PLACEMENT_ATTEMPTS`] tries.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Option<(i32, i32, Orientation)> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let x = rng.random_range(0..self.cols() as i32);
            let y = rng.random_range(0..self.rows() as i32);
            if self.can_place(x, y, kind, orientation) {
                return Some((x, y, orientation));
            }
        }
        None
    }

    /// Reset the board and place the whole fleet at random.
    ///
    /// Returns the kinds that could not be placed. Those ships are simply
    /// absent from the board, so [`BattleBoard::all_ships_sunk`] can never
    /// become true on a partially seeded board.
    pub fn seed_board<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<ShipKind> {
        self.reset();
        let mut skipped = Vec::new();
        for kind in FLEET {
            match self.random_placement(rng, kind) {
                Some((x, y, orientation)) => self.write_ship(x, y, kind, orientation),
                None => {
                    warn!(
                        "could not place {} on a {}x{} board after {} attempts",
                        kind,
                        self.cols(),
                        self.rows(),
                        MAX_PLACEMENT_ATTEMPTS
                    );
                    skipped.push(kind);
                }
            }
        }
        skipped
    }

    /// Resolve an attack at the wrapped coordinate.
    pub fn attack(&mut self, x: i32, y: i32) -> Result<AttackResult, BoardError> {
        let (col, row) = self.grid.normalize(x, y);
        let kind = match self.grid.get(x, y) {
            Cell::Empty => {
                self.grid.set(x, y, Cell::Miss);
                return Ok(AttackResult::Miss);
            }
            Cell::Miss | Cell::Hit | Cell::Sunk => {
                return Err(BoardError::AlreadyAttacked { x: col, y: row })
            }
            Cell::Ship(kind) => kind,
        };

        self.hit_locations.insert((col, row), kind);
        self.grid.set(x, y, Cell::Hit);
        if self.ship_afloat(kind) {
            return Ok(AttackResult::Hit(kind));
        }

        self.sunk[kind.index()] = true;
        for (&(c, r), &k) in self.hit_locations.iter() {
            if k == kind {
                self.grid.set(c as i32, r as i32, Cell::Sunk);
            }
        }
        debug!("{} sunk at ({}, {})", kind, col, row);
        Ok(AttackResult::Sink(kind))
    }

    /// Whether any cell still carries the untouched `kind` marker.
    fn ship_afloat(&self, kind: ShipKind) -> bool {
        self.grid.as_slice().iter().any(|&c| c == Cell::Ship(kind))
    }

    /// Pure read of the sunk registry.
    #[inline]
    pub fn is_ship_sunk(&self, kind: ShipKind) -> bool {
        self.sunk[kind.index()]
    }

    /// `Sunk` cells, plus `Hit` cells whose ship is registered as sunk.
    pub fn is_cell_sunk(&self, x: i32, y: i32) -> bool {
        match self.grid.get(x, y) {
            Cell::Sunk => true,
            Cell::Hit => self
                .hit_locations
                .get(&self.grid.normalize(x, y))
                .is_some_and(|&kind| self.is_ship_sunk(kind)),
            _ => false,
        }
    }

    /// Returns `true` when every kind in the fleet is registered sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.sunk.iter().all(|&s| s)
    }

    /// Mark `kind` sunk without scanning the grid. Idempotent.
    pub fn record_sunk_ship(&mut self, kind: ShipKind) {
        self.sunk[kind.index()] = true;
    }

    /// Sunk flag per kind, in fleet order.
    pub fn sunk_ships(&self) -> &[bool; NUM_SHIPS] {
        &self.sunk
    }

    /// Kinds not yet registered sunk.
    pub fn remaining_ships(&self) -> impl Iterator<Item = ShipKind> + '_ {
        FLEET.into_iter().filter(move |&k| !self.is_ship_sunk(k))
    }

    pub fn hit_locations(&self) -> &BTreeMap<(usize, usize), ShipKind> {
        &self.hit_locations
    }

    /// Every recorded hit cell that belonged to `kind`.
    pub fn hit_cells_of(&self, kind: ShipKind) -> Vec<(usize, usize)> {
        self.hit_locations
            .iter()
            .filter(|(_, &k)| k == kind)
            .map(|(&pos, _)| pos)
            .collect()
    }

    /// Mirror an attack result onto an observer view: the target becomes
    /// `Miss` or `Hit`, and on a sink the kind is recorded and every cell in
    /// `sunk_cells` becomes `Sunk`.
    pub fn observe(
        &mut self,
        target: (i32, i32),
        result: AttackResult,
        sunk_cells: &[(usize, usize)],
    ) {
        let (x, y) = target;
        match result {
            AttackResult::Miss => self.grid.set(x, y, Cell::Miss),
            AttackResult::Hit(_) => self.grid.set(x, y, Cell::Hit),
            AttackResult::Sink(kind) => {
                self.grid.set(x, y, Cell::Hit);
                self.record_sunk_ship(kind);
                for &(c, r) in sunk_cells {
                    self.grid.set(c as i32, r as i32, Cell::Sunk);
                }
            }
        }
    }
}

impl Default for BattleBoard {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl fmt::Display for BattleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.as_slice().chunks(self.cols()) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BattleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BattleBoard {{\n  sunk: {:?},\n  hit_locations: {:?}\n}}",
            self.sunk, self.hit_locations
        )?;
        write!(f, "{}", self)
    }
}
