use gridpath_core::DiagonalMovement;

use crate::heuristic::Heuristic;

/// Settings for an [`AStarFinder`](crate::AStarFinder).
///
/// The default searches orthogonally with the Manhattan heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    pub heuristic: Heuristic,
    pub diagonal_movement: DiagonalMovement,
}

impl FinderConfig {
    /// Config with the given heuristic and movement policy.
    pub const fn new(heuristic: Heuristic, diagonal_movement: DiagonalMovement) -> Self {
        Self {
            heuristic,
            diagonal_movement,
        }
    }
}
