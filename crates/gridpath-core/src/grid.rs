//! The [`Grid`] type: a rectangular occupancy field of [`Node`]s.
//!
//! A grid is built once from an occupancy matrix and is read-only afterwards,
//! so a single `&Grid` can be shared by any number of concurrent searches.

use std::str::FromStr;

use crate::diagonal::DiagonalMovement;
use crate::error::Error;
use crate::geom::Point;
use crate::node::Node;

/// Orthogonal directions in neighbor order: up, right, down, left.
const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Diagonal directions in neighbor order, each with the indices (into
/// [`ORTHOGONAL`]) of the two cells framing it: NW (W, N), NE (N, E),
/// SE (E, S), SW (S, W).
const DIAGONAL: [(Point, usize, usize); 4] = [
    (Point::new(-1, -1), 3, 0),
    (Point::new(1, -1), 0, 1),
    (Point::new(1, 1), 1, 2),
    (Point::new(-1, 1), 2, 3),
];

/// A rectangular grid of walkable and blocked cells.
///
/// Two grids are equal when they have the same size and the same walkable
/// cells.
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Build a grid from a row-major occupancy matrix.
    ///
    /// A cell is walkable when its value is `<= 0` (compared against
    /// `T::default()`), blocked otherwise. Every row must have the same
    /// non-zero length and there must be at least one row.
    pub fn from_matrix<T, R>(matrix: &[R]) -> Result<Self, Error>
    where
        T: Copy + PartialOrd + Default,
        R: AsRef<[T]>,
    {
        let Some(first) = matrix.first() else {
            return Err(Error::MalformedGrid("matrix has no rows".into()));
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(Error::MalformedGrid("matrix has empty rows".into()));
        }
        let height = matrix.len();
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(Error::MalformedGrid(format!(
                "{width}x{height} does not fit in i32 coordinates"
            )));
        };

        let mut nodes = Vec::with_capacity(width * height);
        for (y, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::MalformedGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &cell) in row.iter().enumerate() {
                nodes.push(Node::new(x as i32, y as i32, cell <= T::default()));
            }
        }

        log::debug!(
            "grid: built {w}x{h}, {} blocked cells",
            nodes.iter().filter(|n| !n.walkable()).count()
        );

        Ok(Self {
            nodes,
            width: w,
            height: h,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Whether `(x, y)` lies inside the grid and is walkable. Positions
    /// outside the grid are simply not walkable.
    #[inline]
    pub fn walkable(&self, x: i32, y: i32) -> bool {
        self.get(Point::new(x, y)).is_some_and(Node::walkable)
    }

    /// The node at `(x, y)`.
    pub fn node(&self, x: i32, y: i32) -> Result<&Node, Error> {
        self.get(Point::new(x, y)).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// The node at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.inside(p.x, p.y) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// All nodes as a row-major slice, indexable by [`index`](Self::index).
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All nodes in row-major order (y ascending, then x ascending).
    ///
    /// Each call starts a fresh pass over the grid.
    #[inline]
    pub fn each_node(&self) -> Nodes<'_> {
        Nodes {
            inner: self.nodes.iter(),
        }
    }

    /// Nodes reachable from `node` in one step under `diagonal_movement`.
    ///
    /// Walkable orthogonal neighbors come first (up, right, down, left),
    /// followed by admissible walkable diagonals (NW, NE, SE, SW).
    pub fn neighbors(&self, node: &Node, diagonal_movement: DiagonalMovement) -> Vec<Node> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(node, diagonal_movement, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors), but appends into `buf` so callers
    /// can reuse one allocation. The caller clears `buf` before calling.
    pub fn neighbors_into(
        &self,
        node: &Node,
        diagonal_movement: DiagonalMovement,
        buf: &mut Vec<Node>,
    ) {
        let p = node.pos();
        let mut open = [false; 4];
        for (i, d) in ORTHOGONAL.into_iter().enumerate() {
            if let Some(&n) = self.walkable_node(p + d) {
                buf.push(n);
                open[i] = true;
            }
        }

        if !diagonal_movement.allows_diagonals() {
            return;
        }

        for (d, a, b) in DIAGONAL {
            if !diagonal_movement.admits(open[a], open[b]) {
                continue;
            }
            if let Some(&n) = self.walkable_node(p + d) {
                buf.push(n);
            }
        }
    }

    #[inline]
    fn walkable_node(&self, p: Point) -> Option<&Node> {
        self.get(p).filter(|n| n.walkable())
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.walkable() == b.walkable())
    }
}

impl Eq for Grid {}

/// Occupancy matrix in text form: one row per line, cells as
/// whitespace-separated integers. Blank lines are skipped.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut matrix: Vec<Vec<i64>> = Vec::new();
        for (y, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let row = line
                .split_whitespace()
                .map(|cell| {
                    cell.parse::<i64>().map_err(|_| {
                        Error::MalformedGrid(format!("row {y}: {cell:?} is not an integer"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            matrix.push(row);
        }
        Self::from_matrix(&matrix)
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Row-major iterator over the nodes of a [`Grid`].
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    inner: std::slice::Iter<'a, Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_> {}

// ---------------------------------------------------------------------------
// serde: a grid travels as its occupancy matrix
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let matrix: Vec<Vec<u8>> = self
            .nodes
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|n| u8::from(!n.walkable())).collect())
            .collect();
        serde::Serialize::serialize(&matrix, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let matrix: Vec<Vec<i64>> = serde::Deserialize::deserialize(deserializer)?;
        Grid::from_matrix(&matrix).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_occupancy_matrix() {
        let g = Grid::from_matrix(&[[0, 5], [-2, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,1],[0,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_rejects_ragged_matrix() {
        let res: Result<Grid, _> = serde_json::from_str("[[0,0],[0]]");
        assert!(res.is_err());
    }
}
