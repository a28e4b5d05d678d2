// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod comparison;
pub mod config;
pub mod data;
pub mod moves;
pub mod problem;
pub mod solver;
pub mod state;

mod fs;
mod heuristic;
mod parser;
mod vec2d;

use std::error::Error;
use std::path::Path;

pub use crate::config::{ConfigErr, Heuristic, Strategy};
pub use crate::parser::ParserErr;
pub use crate::problem::{Expander, Problem, ProblemErr, Successor};
pub use crate::state::State;

use crate::solver::SolverOk;

pub trait LoadProblem {
    fn load_problem(&self, heuristic: Heuristic) -> Result<Problem, Box<dyn Error>>;
}

impl LoadProblem for str {
    fn load_problem(&self, heuristic: Heuristic) -> Result<Problem, Box<dyn Error>> {
        Path::new(self).load_problem(heuristic)
    }
}

impl LoadProblem for Path {
    fn load_problem(&self, heuristic: Heuristic) -> Result<Problem, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        let problem = Problem::new(&text, heuristic)?;
        Ok(problem)
    }
}

pub trait Solve {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SolverOk;
}
