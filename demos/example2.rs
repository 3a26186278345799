//! Path through a small maze.
//!
//! Run: cargo run --bin example2 -- [DIAGONAL_MOVEMENT] [HEURISTIC]

use gridpath_demos::{Scenario, parse_args, run};

const MATRIX: &[&[i32]] = &[
    &[0, 0, 0, 0, 0],
    &[1, 0, 1, 1, 0],
    &[1, 0, 1, 0, 0],
    &[0, 1, 0, 0, 0],
    &[1, 0, 1, 1, 0],
    &[0, 0, 1, 0, 0],
];

fn main() {
    let scenario = Scenario {
        matrix: MATRIX,
        start: (1, 1),
        goal: (4, 4),
    };
    match parse_args(std::env::args().skip(1)).and_then(|cfg| run(&scenario, &cfg)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
