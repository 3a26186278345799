//! The [`Error`] type shared by grid construction, lookups and configuration parsing.

use std::fmt;

/// Errors raised by grid construction, grid access and configuration parsing.
///
/// A search that cannot reach its goal is not an error: the finder reports it
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate outside the grid was accessed.
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// The occupancy matrix is empty, ragged or contains unparsable cells.
    MalformedGrid(String),
    /// A raw value does not name a known movement policy or heuristic.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "position ({x}, {y}) is outside the {width}x{height} grid"),
            Self::MalformedGrid(s) => write!(f, "malformed grid: {s}"),
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {s}"),
        }
    }
}

impl std::error::Error for Error {}
