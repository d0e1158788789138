//! Ship kinds, orientations, and the per-cell board state.

use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board. Horizontal ships extend toward
/// larger `x`, vertical ships toward larger `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Unit step `(dx, dy)` along this orientation.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(BoardError::UnknownOrientation(other)),
        }
    }
}

/// The five ships of the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Every kind, in fleet order.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Number of cells the ship covers.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Position of this kind in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Glyph used when rendering an intact ship cell.
    pub const fn glyph(self) -> char {
        match self {
            ShipKind::Carrier => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'R',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
        }
    }
}

/// Length for a raw ship-kind code; unknown codes have length 0.
pub fn ship_length(code: u8) -> usize {
    ShipKind::try_from(code).map(ShipKind::length).unwrap_or(0)
}

impl TryFrom<u8> for ShipKind {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ShipKind::ALL
            .get(code as usize)
            .copied()
            .ok_or(BoardError::UnknownShipKind(code))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a single board cell.
///
/// A cell only ever moves `Ship(kind) -> Hit -> Sunk` or `Empty -> Miss`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Miss,
    Hit,
    Sunk,
    Ship(ShipKind),
}

impl Cell {
    /// Whether the cell has already been attacked.
    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit | Cell::Sunk)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Miss => 'o',
            Cell::Hit => 'x',
            Cell::Sunk => '#',
            Cell::Ship(kind) => kind.glyph(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
