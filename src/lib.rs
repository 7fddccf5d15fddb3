//! Exact Cover SAT Solver
//!
//! This library solves exact cover problems by reducing them to Boolean
//! satisfiability and delegating the search to an external DIMACS-speaking
//! SAT solver such as glucose.

pub mod config;
pub mod cover;
pub mod error;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use cover::{ExactCoverProblem, ExactCoverSolver, Solution};
pub use error::SolveError;

use anyhow::Result;
use sat::{estimate_encoding, GlucoseOracle};
use std::time::Instant;

/// Solve the problem named by the settings end to end
///
/// Returns `None` when the instance has no exact cover.
pub fn solve_with_settings(settings: &Settings) -> Result<Option<Solution>> {
    let problem = cover::load_problem_from_file(&settings.input.problem_file)?;
    solve_problem(&problem, settings)
}

/// Solve an already loaded problem with the given settings
pub fn solve_problem(problem: &ExactCoverProblem, settings: &Settings) -> Result<Option<Solution>> {
    let start_time = Instant::now();

    let oracle = GlucoseOracle::new(&settings.solver.executable);
    let solver = ExactCoverSolver::new(problem);
    let selected = solver.solve(
        &oracle,
        &settings.output.cnf_file,
        settings.effective_verbosity(),
    )?;

    let estimate = estimate_encoding(problem);
    Ok(selected.map(|indices| Solution::new(problem, indices, &estimate, start_time.elapsed())))
}
