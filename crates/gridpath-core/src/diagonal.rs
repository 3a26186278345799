//! Diagonal movement policies.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// When a diagonal step between two cells is allowed.
///
/// A diagonal step is "framed" by the two orthogonal cells it passes between,
/// e.g. a step to the north-west is framed by the west and north cells.
/// Policies other than [`Always`](Self::Always) look at those cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DiagonalMovement {
    /// Diagonal steps are always allowed, even between two obstacles.
    Always,
    /// Only orthogonal steps.
    #[default]
    Never,
    /// Allowed if at least one framing cell is walkable.
    IfAtMostOneObstacle,
    /// Allowed only if both framing cells are walkable.
    OnlyWhenNoObstacle,
}

impl DiagonalMovement {
    /// Every policy, in numeric-code order.
    pub const ALL: [DiagonalMovement; 4] = [
        Self::Always,
        Self::Never,
        Self::IfAtMostOneObstacle,
        Self::OnlyWhenNoObstacle,
    ];

    /// Whether this policy can ever produce a diagonal step.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self != Self::Never
    }

    /// Whether a diagonal framed by two orthogonal cells with the given
    /// walkability is admissible under this policy.
    ///
    /// The diagonal target itself still has to be walkable.
    #[inline]
    pub fn admits(self, framing_a: bool, framing_b: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::IfAtMostOneObstacle => framing_a || framing_b,
            Self::OnlyWhenNoObstacle => framing_a && framing_b,
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::IfAtMostOneObstacle => "if-at-most-one-obstacle",
            Self::OnlyWhenNoObstacle => "only-when-no-obstacle",
        }
    }
}

/// Numeric policy codes: 1 always, 2 never, 3 if at most one obstacle,
/// 4 only when no obstacle.
impl TryFrom<i32> for DiagonalMovement {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            1 => Ok(Self::Always),
            2 => Ok(Self::Never),
            3 => Ok(Self::IfAtMostOneObstacle),
            4 => Ok(Self::OnlyWhenNoObstacle),
            _ => Err(Error::InvalidConfiguration(format!(
                "unknown diagonal movement code {code}"
            ))),
        }
    }
}

impl From<DiagonalMovement> for i32 {
    fn from(dm: DiagonalMovement) -> Self {
        match dm {
            DiagonalMovement::Always => 1,
            DiagonalMovement::Never => 2,
            DiagonalMovement::IfAtMostOneObstacle => 3,
            DiagonalMovement::OnlyWhenNoObstacle => 4,
        }
    }
}

impl FromStr for DiagonalMovement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|dm| dm.name() == name)
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown diagonal movement {s:?}")))
    }
}

impl fmt::Display for DiagonalMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
