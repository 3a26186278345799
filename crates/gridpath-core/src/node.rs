//! The [`Node`] type: one cell of a [`Grid`](crate::Grid).

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::Point;

/// An immutable grid cell: its position and whether it can be walked on.
///
/// Equality and hashing only look at the position, so any two `Node` values
/// for the same cell are interchangeable as map keys.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    walkable: bool,
}

impl Node {
    /// Create a node. Grids create their own nodes; this is mostly useful in
    /// tests and for building lookups by position.
    #[inline]
    pub const fn new(x: i32, y: i32, walkable: bool) -> Self {
        Self {
            pos: Point::new(x, y),
            walkable,
        }
    }

    /// Column.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    /// Row.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Position as a [`Point`].
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// Whether the cell can be traversed.
    #[inline]
    pub const fn walkable(&self) -> bool {
        self.walkable
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pos, f)
    }
}
