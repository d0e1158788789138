//! Common types for the targeting core: board errors and attack results.

use crate::ship::ShipKind;

/// Outcome of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on open water.
    Miss,
    /// Attack struck a ship that still has intact cells.
    Hit(ShipKind),
    /// Attack struck the last intact cell of a ship.
    Sink(ShipKind),
}

impl AttackResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackResult::Sink(_))
    }

    /// The ship that was struck, if any.
    pub fn kind(&self) -> Option<ShipKind> {
        match *self {
            AttackResult::Miss => None,
            AttackResult::Hit(kind) | AttackResult::Sink(kind) => Some(kind),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The cell was already resolved as a miss, hit, or sunk cell.
    AlreadyAttacked { x: usize, y: usize },
    /// Ship would start off the board or run past its edge.
    ShipOutOfBounds,
    /// Ship placement overlaps a non-empty cell.
    ShipOverlaps,
    /// Raw ship-kind code outside the fleet.
    UnknownShipKind(u8),
    /// Raw orientation code other than horizontal or vertical.
    UnknownOrientation(u8),
    /// Grid extents must be non-zero and fit in an `i32`.
    InvalidDimensions { cols: usize, rows: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::AlreadyAttacked { x, y } => {
                write!(f, "Cell ({}, {}) was already attacked", x, y)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps a non-empty cell"),
            BoardError::UnknownShipKind(code) => write!(f, "Unknown ship kind code {}", code),
            BoardError::UnknownOrientation(code) => {
                write!(f, "Unknown orientation code {}", code)
            }
            BoardError::InvalidDimensions { cols, rows } => {
                write!(f, "Invalid grid dimensions {}x{}", cols, rows)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
