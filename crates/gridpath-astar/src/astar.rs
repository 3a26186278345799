//! A* search over a [`Grid`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{DiagonalMovement, Grid, Node};

use crate::config::FinderConfig;
use crate::cost::step_cost;
use crate::heuristic::Heuristic;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Working set
// ---------------------------------------------------------------------------

/// Per-cell search state, indexed like [`Grid::nodes`].
#[derive(Clone)]
struct Slot {
    g: f64,
    f: f64,
    parent: usize,
    /// Position in open-set order, assigned each time the cell enters the set.
    seq: u64,
    open: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: NO_PARENT,
            seq: 0,
            open: false,
        }
    }
}

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f`
/// first and, among equal `f`, the cell that entered the open set first.
#[derive(Clone, Copy, Debug)]
struct OpenRef {
    idx: usize,
    f: f64,
    seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

/// Open set, score tables and predecessor links for a single search. Lives
/// for one [`AStarFinder::find_path`] call.
struct Search {
    slots: Vec<Slot>,
    open: BinaryHeap<OpenRef>,
    next_seq: u64,
}

impl Search {
    fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::default(); len],
            open: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Record new scores for `idx`. A cell already in the open set keeps its
    /// place in the open-set order; any other cell is appended.
    fn push(&mut self, idx: usize, g: f64, f: f64, parent: usize) {
        let slot = &mut self.slots[idx];
        slot.g = g;
        slot.f = f;
        slot.parent = parent;
        if !slot.open {
            slot.open = true;
            slot.seq = self.next_seq;
            self.next_seq += 1;
        }
        self.open.push(OpenRef {
            idx,
            f,
            seq: slot.seq,
        });
    }

    /// Remove and return the open cell with the lowest `(f, seq)`.
    fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let slot = &mut self.slots[entry.idx];
            // Superseded by a later improvement, or already expanded.
            if !slot.open || entry.seq != slot.seq || entry.f > slot.f {
                continue;
            }
            slot.open = false;
            return Some(entry.idx);
        }
        None
    }

    fn path(&self, grid: &Grid, goal: usize) -> Vec<Node> {
        let nodes = grid.nodes();
        let mut path = Vec::new();
        let mut idx = goal;
        while idx != NO_PARENT {
            path.push(nodes[idx]);
            idx = self.slots[idx].parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// AStarFinder
// ---------------------------------------------------------------------------

/// Shortest-path finder using A*.
///
/// Orthogonal steps cost 1 and diagonal steps cost √2. When the movement
/// policy allows diagonals, the configured heuristic is replaced by
/// [`Heuristic::Octile`], which matches those step costs; see
/// [`heuristic`](Self::heuristic).
///
/// A finder holds no search state, so one instance can serve any number of
/// concurrent searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AStarFinder {
    heuristic: Heuristic,
    diagonal_movement: DiagonalMovement,
}

impl AStarFinder {
    /// Create a finder.
    pub fn new(heuristic: Heuristic, diagonal_movement: DiagonalMovement) -> Self {
        let effective = if diagonal_movement.allows_diagonals() {
            Heuristic::Octile
        } else {
            heuristic
        };
        if effective != heuristic {
            log::debug!("astar: {diagonal_movement} movement, using octile instead of {heuristic}");
        }
        Self {
            heuristic: effective,
            diagonal_movement,
        }
    }

    /// Create a finder from a [`FinderConfig`].
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.heuristic, config.diagonal_movement)
    }

    /// The heuristic actually used, after the octile override.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The diagonal movement policy.
    #[inline]
    pub fn diagonal_movement(&self) -> DiagonalMovement {
        self.diagonal_movement
    }

    /// The effective configuration.
    pub fn config(&self) -> FinderConfig {
        FinderConfig::new(self.heuristic, self.diagonal_movement)
    }

    /// Find a minimum-cost path from `start` to `goal`.
    ///
    /// Returns every node from `start` to `goal` inclusive, or `None` if the
    /// goal cannot be reached. `start` and `goal` are expected to be nodes of
    /// `grid`; positions outside it yield `None`.
    ///
    /// Walkability of the endpoints is not checked: a blocked goal is never
    /// entered, so it yields `None`, while a blocked start can still step out
    /// onto walkable neighbors.
    ///
    /// Among several optimal paths the result is deterministic. The open
    /// cell with the lowest `f = g + h` is expanded next, ties going to the
    /// cell that entered the open set first. Neighbors are visited in the
    /// order given by [`Grid::neighbors`].
    pub fn find_path(&self, start: &Node, goal: &Node, grid: &Grid) -> Option<Vec<Node>> {
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start.pos()), grid.index(goal.pos()))
        else {
            log::debug!("astar: {start} -> {goal} lies outside the grid");
            return None;
        };

        let nodes = grid.nodes();
        let goal_pos = goal.pos();
        let mut search = Search::new(grid.len());
        search.push(
            start_idx,
            0.0,
            self.heuristic.between(start.pos(), goal_pos),
            NO_PARENT,
        );

        let mut neighbors = Vec::with_capacity(8);
        let mut expanded = 0usize;

        while let Some(ci) = search.pop() {
            if ci == goal_idx {
                let path = search.path(grid, goal_idx);
                log::debug!(
                    "astar: {start} -> {goal}: {} nodes, cost {:.3}, {expanded} expanded",
                    path.len(),
                    search.slots[goal_idx].g
                );
                return Some(path);
            }

            expanded += 1;
            let current = nodes[ci];
            let current_g = search.slots[ci].g;
            log::trace!("astar: expand {current} g={current_g:.3}");

            neighbors.clear();
            grid.neighbors_into(&current, self.diagonal_movement, &mut neighbors);

            for neighbor in &neighbors {
                let Some(ni) = grid.index(neighbor.pos()) else {
                    continue;
                };
                let tentative_g = current_g + step_cost(&current, neighbor);
                if tentative_g >= search.slots[ni].g {
                    continue;
                }
                let f = tentative_g + self.heuristic.between(neighbor.pos(), goal_pos);
                search.push(ni, tentative_g, f, ci);
            }
        }

        log::debug!("astar: {start} -> {goal}: no path, {expanded} expanded");
        None
    }
}

impl From<FinderConfig> for AStarFinder {
    fn from(config: FinderConfig) -> Self {
        Self::from_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    use crate::cost::path_cost;

    const EPS: f64 = 1e-9;

    const EXAMPLE_1: [[i32; 3]; 3] = [[0, 0, 0], [0, 1, 0], [0, 0, 0]];

    const EXAMPLE_2: [[i32; 5]; 6] = [
        [0, 0, 0, 0, 0],
        [1, 0, 1, 1, 0],
        [1, 0, 1, 0, 0],
        [0, 1, 0, 0, 0],
        [1, 0, 1, 1, 0],
        [0, 0, 1, 0, 0],
    ];

    const MAZE: [[i32; 6]; 6] = [
        [0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 0],
        [0, 0, 0, 0, 1, 0],
        [1, 1, 1, 0, 1, 0],
        [0, 0, 0, 0, 1, 0],
        [0, 1, 1, 1, 1, 0],
    ];

    fn pts(path: &[Node]) -> Vec<(i32, i32)> {
        path.iter().map(|n| (n.x(), n.y())).collect()
    }

    fn solve(
        grid: &Grid,
        from: (i32, i32),
        to: (i32, i32),
        heuristic: Heuristic,
        dm: DiagonalMovement,
    ) -> Option<Vec<Node>> {
        let start = grid.node(from.0, from.1).unwrap();
        let goal = grid.node(to.0, to.1).unwrap();
        AStarFinder::new(heuristic, dm).find_path(start, goal, grid)
    }

    /// Dijkstra over the same neighbor relation, for optimality checks.
    fn reference_cost(grid: &Grid, from: &Node, to: &Node, dm: DiagonalMovement) -> Option<f64> {
        let n = grid.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        dist[grid.index(from.pos()).unwrap()] = 0.0;
        loop {
            let next = (0..n)
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            let Some(i) = next else {
                break;
            };
            done[i] = true;
            let node = grid.nodes()[i];
            for nb in grid.neighbors(&node, dm) {
                let j = grid.index(nb.pos()).unwrap();
                let d = dist[i] + step_cost(&node, &nb);
                if d < dist[j] {
                    dist[j] = d;
                }
            }
        }
        let d = dist[grid.index(to.pos()).unwrap()];
        d.is_finite().then_some(d)
    }

    fn assert_valid_path(grid: &Grid, path: &[Node], dm: DiagonalMovement) {
        for w in path.windows(2) {
            assert!(
                grid.neighbors(&w[0], dm).contains(&w[1]),
                "{} -> {} is not a {dm} step",
                w[0],
                w[1]
            );
        }
    }

    fn matrix_from_mask(w: usize, h: usize, mask: u32) -> Vec<Vec<i32>> {
        (0..h)
            .map(|y| (0..w).map(|x| ((mask >> (y * w + x)) & 1) as i32).collect())
            .collect()
    }

    #[test]
    fn example_one_orthogonal() {
        let g = Grid::from_matrix(&EXAMPLE_1).unwrap();
        let path = solve(&g, (0, 0), (2, 2), Heuristic::Manhattan, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(pts(&path), vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(path_cost(&path), 4.0);
    }

    #[test]
    fn example_one_diagonal_policies() {
        let g = Grid::from_matrix(&EXAMPLE_1).unwrap();
        let cut = vec![(0, 0), (1, 0), (2, 1), (2, 2)];
        let around = vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)];
        for (dm, expected) in [
            (DiagonalMovement::Always, &cut),
            (DiagonalMovement::IfAtMostOneObstacle, &cut),
            (DiagonalMovement::OnlyWhenNoObstacle, &around),
        ] {
            let path = solve(&g, (0, 0), (2, 2), Heuristic::Manhattan, dm).unwrap();
            assert_eq!(&pts(&path), expected, "{dm}");
        }
    }

    #[test]
    fn example_two_every_policy() {
        let g = Grid::from_matrix(&EXAMPLE_2).unwrap();
        let around = vec![
            (1, 1),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 4),
        ];
        let cases = [
            (DiagonalMovement::Never, around.clone()),
            (
                DiagonalMovement::Always,
                vec![(1, 1), (1, 2), (2, 3), (3, 3), (4, 4)],
            ),
            (
                DiagonalMovement::IfAtMostOneObstacle,
                vec![(1, 1), (2, 0), (3, 0), (4, 1), (4, 2), (4, 3), (4, 4)],
            ),
            (DiagonalMovement::OnlyWhenNoObstacle, around),
        ];
        for (dm, expected) in cases {
            let path = solve(&g, (1, 1), (4, 4), Heuristic::Manhattan, dm).unwrap();
            assert_eq!(pts(&path), expected, "{dm}");
        }
    }

    #[test]
    fn ties_follow_open_set_order() {
        // On an open grid every monotone path is optimal; which one comes
        // back depends on the heuristic and the first-in tie break.
        let g = Grid::from_matrix(&[[0; 6]; 6]).unwrap();
        let staircase = vec![
            (0, 0),
            (1, 0),
            (1, 1),
            (2, 1),
            (2, 2),
            (3, 2),
            (3, 3),
            (4, 3),
            (4, 4),
            (5, 4),
            (5, 5),
        ];
        let path = solve(&g, (0, 0), (5, 5), Heuristic::Manhattan, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(
            pts(&path),
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (5, 1),
                (5, 2),
                (5, 3),
                (5, 4),
                (5, 5)
            ]
        );
        for h in [Heuristic::Euclidean, Heuristic::Octile, Heuristic::Chebyshev] {
            let path = solve(&g, (0, 0), (5, 5), h, DiagonalMovement::Never).unwrap();
            assert_eq!(pts(&path), staircase, "{h}");
        }

        let path = solve(&g, (5, 4), (0, 1), Heuristic::Manhattan, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(
            pts(&path),
            vec![
                (5, 4),
                (5, 3),
                (5, 2),
                (5, 1),
                (4, 1),
                (3, 1),
                (2, 1),
                (1, 1),
                (0, 1)
            ]
        );
        let path = solve(&g, (5, 4), (0, 1), Heuristic::Euclidean, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(
            pts(&path),
            vec![
                (5, 4),
                (4, 4),
                (3, 4),
                (3, 3),
                (2, 3),
                (2, 2),
                (1, 2),
                (1, 1),
                (0, 1)
            ]
        );

        for dm in [
            DiagonalMovement::Always,
            DiagonalMovement::IfAtMostOneObstacle,
            DiagonalMovement::OnlyWhenNoObstacle,
        ] {
            let path = solve(&g, (0, 0), (5, 3), Heuristic::Manhattan, dm).unwrap();
            assert_eq!(
                pts(&path),
                vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3)],
                "{dm}"
            );
        }
    }

    #[test]
    fn maze_corner_cutting() {
        let g = Grid::from_matrix(&MAZE).unwrap();
        let long = solve(&g, (0, 4), (5, 5), Heuristic::Manhattan, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(long.len(), 21);
        assert_eq!(path_cost(&long), 20.0);
        let strict = solve(
            &g,
            (0, 4),
            (5, 5),
            Heuristic::Manhattan,
            DiagonalMovement::OnlyWhenNoObstacle,
        )
        .unwrap();
        assert_eq!(pts(&strict), pts(&long));

        let cut = vec![
            (0, 4),
            (1, 4),
            (2, 4),
            (3, 3),
            (2, 2),
            (1, 2),
            (0, 1),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (5, 5),
        ];
        for dm in [DiagonalMovement::Always, DiagonalMovement::IfAtMostOneObstacle] {
            let path = solve(&g, (0, 4), (5, 5), Heuristic::Manhattan, dm).unwrap();
            assert_eq!(pts(&path), cut, "{dm}");
            assert!((path_cost(&path) - (10.0 + 5.0 * SQRT_2)).abs() < EPS);
        }
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::from_matrix(&EXAMPLE_1).unwrap();
        for dm in DiagonalMovement::ALL {
            let path = solve(&g, (2, 1), (2, 1), Heuristic::Manhattan, dm).unwrap();
            assert_eq!(pts(&path), vec![(2, 1)]);
        }
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        // The goal's only diagonal neighbor is itself blocked, so even
        // unconditional diagonals cannot reach it.
        let g = Grid::from_matrix(&[[0, 0, 0], [0, 1, 1], [0, 1, 0]]).unwrap();
        for dm in DiagonalMovement::ALL {
            assert!(solve(&g, (0, 0), (2, 2), Heuristic::Manhattan, dm).is_none());
        }
    }

    #[test]
    fn only_always_squeezes_between_two_walls() {
        let g = Grid::from_matrix(&[[0, 1], [1, 0]]).unwrap();
        let path = solve(&g, (0, 0), (1, 1), Heuristic::Manhattan, DiagonalMovement::Always)
            .unwrap();
        assert_eq!(pts(&path), vec![(0, 0), (1, 1)]);
        for dm in [
            DiagonalMovement::Never,
            DiagonalMovement::IfAtMostOneObstacle,
            DiagonalMovement::OnlyWhenNoObstacle,
        ] {
            assert!(solve(&g, (0, 0), (1, 1), Heuristic::Manhattan, dm).is_none());
        }
    }

    #[test]
    fn blocked_goal_has_no_path() {
        let g = Grid::from_matrix(&EXAMPLE_1).unwrap();
        for dm in DiagonalMovement::ALL {
            assert!(solve(&g, (0, 0), (1, 1), Heuristic::Manhattan, dm).is_none());
        }
    }

    #[test]
    fn blocked_start_can_step_out() {
        let g = Grid::from_matrix(&[[1, 0], [0, 0]]).unwrap();
        let path = solve(&g, (0, 0), (1, 1), Heuristic::Manhattan, DiagonalMovement::Never)
            .unwrap();
        assert_eq!(pts(&path), vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn nodes_outside_grid_have_no_path() {
        let g = Grid::from_matrix(&EXAMPLE_1).unwrap();
        let finder = AStarFinder::default();
        let inside = g.node(0, 0).unwrap();
        let outside = Node::new(7, 7, true);
        assert!(finder.find_path(inside, &outside, &g).is_none());
        assert!(finder.find_path(&outside, inside, &g).is_none());
    }

    #[test]
    fn octile_override_is_observable() {
        for h in Heuristic::ALL {
            assert_eq!(AStarFinder::new(h, DiagonalMovement::Never).heuristic(), h);
            for dm in [
                DiagonalMovement::Always,
                DiagonalMovement::IfAtMostOneObstacle,
                DiagonalMovement::OnlyWhenNoObstacle,
            ] {
                let finder = AStarFinder::new(h, dm);
                assert_eq!(finder.heuristic(), Heuristic::Octile);
                assert_eq!(finder.diagonal_movement(), dm);
                assert_eq!(finder.config(), FinderConfig::new(Heuristic::Octile, dm));
            }
        }
    }

    #[test]
    fn heuristic_choice_is_ignored_with_diagonals() {
        let grids = [
            Grid::from_matrix(&EXAMPLE_2).unwrap(),
            Grid::from_matrix(&MAZE).unwrap(),
        ];
        for g in &grids {
            for dm in [
                DiagonalMovement::Always,
                DiagonalMovement::IfAtMostOneObstacle,
                DiagonalMovement::OnlyWhenNoObstacle,
            ] {
                let octile = AStarFinder::new(Heuristic::Octile, dm);
                for start in g.each_node().filter(|n| n.walkable()) {
                    for goal in g.each_node().filter(|n| n.walkable()) {
                        let expected = octile.find_path(start, goal, g);
                        for h in Heuristic::ALL {
                            let got = AStarFinder::new(h, dm).find_path(start, goal, g);
                            assert_eq!(got, expected);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn from_config() {
        let cfg = FinderConfig::new(Heuristic::Chebyshev, DiagonalMovement::Never);
        let finder = AStarFinder::from(cfg);
        assert_eq!(finder.config(), cfg);
        assert_eq!(AStarFinder::default().config(), FinderConfig::default());
    }

    #[test]
    fn optimal_on_every_3x3_grid() {
        for mask in 0u32..(1 << 9) {
            let g = Grid::from_matrix(&matrix_from_mask(3, 3, mask)).unwrap();
            for dm in DiagonalMovement::ALL {
                let finder = AStarFinder::new(Heuristic::Manhattan, dm);
                for start in g.each_node() {
                    for goal in g.each_node() {
                        let found = finder.find_path(start, goal, &g);
                        let best = reference_cost(&g, start, goal, dm);
                        match (found, best) {
                            (Some(path), Some(cost)) => {
                                assert_eq!(path.first(), Some(start));
                                assert_eq!(path.last(), Some(goal));
                                assert_valid_path(&g, &path, dm);
                                assert!(
                                    (path_cost(&path) - cost).abs() < EPS,
                                    "mask {mask:#b} {start}->{goal} {dm}"
                                );
                            }
                            (None, None) => {}
                            (found, best) => panic!(
                                "mask {mask:#b} {start}->{goal} {dm}: found {found:?}, best {best:?}"
                            ),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn optimal_on_every_4x4_grid_corner_to_corner() {
        for mask in 0u32..(1 << 16) {
            let g = Grid::from_matrix(&matrix_from_mask(4, 4, mask)).unwrap();
            let start = g.node(0, 0).unwrap();
            let goal = g.node(3, 3).unwrap();
            for dm in DiagonalMovement::ALL {
                let heuristics: &[Heuristic] = if dm.allows_diagonals() {
                    &[Heuristic::Octile]
                } else {
                    &Heuristic::ALL
                };
                let best = reference_cost(&g, start, goal, dm);
                for &h in heuristics {
                    let found = AStarFinder::new(h, dm).find_path(start, goal, &g);
                    assert_eq!(found.is_some(), best.is_some(), "mask {mask:#x} {dm} {h}");
                    if let (Some(path), Some(cost)) = (found, best) {
                        assert_valid_path(&g, &path, dm);
                        assert!(
                            (path_cost(&path) - cost).abs() < EPS,
                            "mask {mask:#x} {dm} {h}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn concurrent_searches_share_one_grid() {
        let g = Grid::from_matrix(&MAZE).unwrap();
        let finder = AStarFinder::new(Heuristic::Manhattan, DiagonalMovement::Always);
        let start = *g.node(0, 4).unwrap();
        let goal = *g.node(5, 5).unwrap();
        let expected = finder.find_path(&start, &goal, &g);
        let (finder, start, goal, g) = (&finder, &start, &goal, &g);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || finder.find_path(start, goal, g)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn heap_prefers_lower_f_then_earlier_seq() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenRef { idx: 0, f: 4.0, seq: 0 });
        heap.push(OpenRef { idx: 1, f: 3.0, seq: 2 });
        heap.push(OpenRef { idx: 2, f: 3.0, seq: 1 });
        heap.push(OpenRef { idx: 3, f: 5.0, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn improved_cell_keeps_its_place() {
        let mut s = Search::new(3);
        s.push(0, 1.0, 5.0, NO_PARENT);
        s.push(1, 1.0, 4.0, NO_PARENT);
        // Improving cell 0 to the same f as cell 1 must not move it behind.
        s.push(0, 0.5, 4.0, NO_PARENT);
        assert_eq!(s.pop(), Some(0));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }
}
