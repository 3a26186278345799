//! A* shortest-path search on occupancy grids.
//!
//! Build a [`Grid`](gridpath_core::Grid), pick two of its nodes and ask an
//! [`AStarFinder`] for the path between them:
//!
//! ```
//! use gridpath_astar::{AStarFinder, Heuristic};
//! use gridpath_core::{DiagonalMovement, Grid};
//!
//! let grid = Grid::from_matrix(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
//! let start = grid.node(0, 0).unwrap();
//! let goal = grid.node(2, 2).unwrap();
//!
//! let finder = AStarFinder::new(Heuristic::Manhattan, DiagonalMovement::Never);
//! let path = finder.find_path(start, goal, &grid).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! Orthogonal steps cost 1 and diagonal steps √2; see [`step_cost`].

mod astar;
mod config;
mod cost;
mod heuristic;

pub use astar::AStarFinder;
pub use config::FinderConfig;
pub use cost::{path_cost, step_cost};
pub use heuristic::{Heuristic, chebyshev, euclidean, manhattan, octile};
