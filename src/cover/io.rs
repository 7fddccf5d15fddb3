//! File I/O for exact cover problems

use super::ExactCoverProblem;
use crate::error::SolveError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a problem from a text file
///
/// Format: the first line lists the universe elements separated by
/// whitespace, and every following line is one subset of the collection
/// (line 2 is subset 0, line 3 is subset 1, and so on).
pub fn load_problem_from_file<P: AsRef<Path>>(path: P) -> Result<ExactCoverProblem> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SolveError::InputFormat {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_problem(&content))
}

/// Parse a problem from its textual form
///
/// A blank subset line stays in the collection as an empty subset: it keeps
/// the line-to-index correspondence intact and allocates no SAT variable. An
/// empty input yields the empty problem, whose exact cover is the empty
/// selection.
pub fn parse_problem(content: &str) -> ExactCoverProblem {
    let mut lines = content.lines();

    let universe = lines
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    let collection = lines
        .map(|line| line.split_whitespace().map(str::to_owned).collect())
        .collect();

    ExactCoverProblem::new(universe, collection)
}

/// Create example problem files for testing
pub fn create_example_problems<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Small solvable instance with two exact covers
    let simple_content = "1 2 3\n1 2\n3\n1\n2 3\n";
    std::fs::write(dir.join("simple.in"), simple_content)
        .context("Failed to write simple.in")?;

    // Knuth's classic seven element instance with a unique cover
    let knuth_content = "1 2 3 4 5 6 7\n1 4 7\n1 4\n4 5 7\n3 5 6\n2 3 6 7\n2 7\n";
    std::fs::write(dir.join("knuth.in"), knuth_content)
        .context("Failed to write knuth.in")?;

    // Element 2 sits in both subsets, so no disjoint cover exists
    let unsolvable_content = "1 2 3\n1 2\n2 3\n";
    std::fs::write(dir.join("unsolvable.in"), unsolvable_content)
        .context("Failed to write unsolvable.in")?;

    Ok(())
}
