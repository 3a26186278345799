//! Shared driver code for the example binaries.
//!
//! Each example builds a grid from a fixed matrix, searches between two
//! cells and prints the grid with the path drawn on it. The movement policy
//! and heuristic can be chosen on the command line:
//!
//! ```text
//! example2 [DIAGONAL_MOVEMENT] [HEURISTIC]
//! ```

use gridpath_astar::{AStarFinder, FinderConfig, path_cost};
use gridpath_core::{Error, Grid, RenderStyle};

/// A fixed search problem.
pub struct Scenario<'a> {
    pub matrix: &'a [&'a [i32]],
    pub start: (i32, i32),
    pub goal: (i32, i32),
}

/// Build a [`FinderConfig`] from positional arguments: an optional diagonal
/// movement name followed by an optional heuristic name.
pub fn parse_args<I, S>(args: I) -> Result<FinderConfig, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = FinderConfig::default();
    let mut args = args.into_iter();
    if let Some(dm) = args.next() {
        config.diagonal_movement = dm.as_ref().parse()?;
    }
    if let Some(h) = args.next() {
        config.heuristic = h.as_ref().parse()?;
    }
    if let Some(extra) = args.next() {
        return Err(Error::InvalidConfiguration(format!(
            "unexpected argument {:?}",
            extra.as_ref()
        )));
    }
    Ok(config)
}

/// Solve `scenario` and describe the outcome: the rendered grid, then either
/// the path and its cost or a "no path" line.
pub fn run(scenario: &Scenario<'_>, config: &FinderConfig) -> Result<String, Error> {
    let grid = Grid::from_matrix(scenario.matrix)?;
    let start = grid.node(scenario.start.0, scenario.start.1)?;
    let goal = grid.node(scenario.goal.0, scenario.goal.1)?;

    let finder = AStarFinder::from_config(config);
    let path = finder.find_path(start, goal, &grid);

    let mut out = grid.render(
        path.as_deref(),
        Some(start),
        Some(goal),
        &RenderStyle::default(),
    );
    out.push('\n');
    match &path {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
            out.push_str(&steps.join(" -> "));
            out.push_str(&format!("\ncost: {:.3}", path_cost(path)));
        }
        None => out.push_str(&format!("no path from {start} to {goal}")),
    }
    Ok(out)
}
