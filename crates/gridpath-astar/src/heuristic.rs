//! Distance heuristics.
//!
//! All functions take absolute per-axis deltas and never return a negative
//! value for non-negative input.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use gridpath_core::{Error, Point};

/// Manhattan (L1) distance: `dx + dy`.
#[inline]
pub fn manhattan(dx: f64, dy: f64) -> f64 {
    dx + dy
}

/// Euclidean (L2) distance: `√(dx² + dy²)`.
#[inline]
pub fn euclidean(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

/// Octile distance: `(√2 − 1)·min(dx, dy) + max(dx, dy)`.
///
/// Exact on an open grid where orthogonal steps cost 1 and diagonal steps
/// cost √2.
#[inline]
pub fn octile(dx: f64, dy: f64) -> f64 {
    let f = SQRT_2 - 1.0;
    if dx < dy { f * dx + dy } else { f * dy + dx }
}

/// Chebyshev (L∞) distance: `max(dx, dy)`.
#[inline]
pub fn chebyshev(dx: f64, dy: f64) -> f64 {
    dx.max(dy)
}

/// Selector for one of the heuristic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Octile,
    Chebyshev,
}

impl Heuristic {
    /// Every heuristic.
    pub const ALL: [Heuristic; 4] = [
        Self::Manhattan,
        Self::Euclidean,
        Self::Octile,
        Self::Chebyshev,
    ];

    /// Estimate for absolute deltas `dx`, `dy`.
    #[inline]
    pub fn estimate(self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::Manhattan => manhattan(dx, dy),
            Self::Euclidean => euclidean(dx, dy),
            Self::Octile => octile(dx, dy),
            Self::Chebyshev => chebyshev(dx, dy),
        }
    }

    /// Estimate between two grid positions.
    #[inline]
    pub fn between(self, from: Point, to: Point) -> f64 {
        let (dx, dy) = from.abs_delta(to);
        self.estimate(f64::from(dx), f64::from(dy))
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Octile => "octile",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.name() == name)
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown heuristic {s:?}")))
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
