//! Step and path costs on a uniform grid.

use std::f64::consts::SQRT_2;

use gridpath_core::Node;

/// Cost of one step between adjacent nodes: `1` when they share a row or a
/// column, `√2` otherwise.
#[inline]
pub fn step_cost(a: &Node, b: &Node) -> f64 {
    if a.pos().is_aligned(b.pos()) { 1.0 } else { SQRT_2 }
}

/// Sum of the step costs along `path`. Empty and single-node paths cost 0.
pub fn path_cost(path: &[Node]) -> f64 {
    path.windows(2).map(|w| step_cost(&w[0], &w[1])).sum()
}
