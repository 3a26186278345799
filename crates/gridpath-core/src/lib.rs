//! **gridpath-core**: occupancy grids for shortest-path search.
//!
//! This crate provides the data model consumed by `gridpath-astar`:
//! geometry primitives, immutable [`Node`]s, the [`DiagonalMovement`]
//! policies and the [`Grid`] that answers bounds, walkability and neighbor
//! queries. It also knows how to build a grid from an occupancy matrix and how
//! to render one, with or without a path, as text.

pub mod diagonal;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;
pub mod render;

pub use diagonal::DiagonalMovement;
pub use error::Error;
pub use geom::Point;
pub use grid::{Grid, Nodes};
pub use node::Node;
pub use render::RenderStyle;
