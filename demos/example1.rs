//! Path around a single obstacle in a 3x3 room.
//!
//! Run: cargo run --bin example1 -- [DIAGONAL_MOVEMENT] [HEURISTIC]

use gridpath_demos::{Scenario, parse_args, run};

const MATRIX: &[&[i32]] = &[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]];

fn main() {
    let scenario = Scenario {
        matrix: MATRIX,
        start: (0, 0),
        goal: (2, 2),
    };
    match parse_args(std::env::args().skip(1)).and_then(|cfg| run(&scenario, &cfg)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
