//! Exact cover problem definition and solution handling

pub mod io;
pub mod problem;
pub mod solution;
pub mod solver;

pub use io::{create_example_problems, load_problem_from_file, parse_problem};
pub use problem::ExactCoverProblem;
pub use solution::{validate_selection, SelectionReport, Solution, SolutionMetadata};
pub use solver::{decode_model, ExactCoverSolver};
