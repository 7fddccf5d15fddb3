//! Reduction pipeline from exact cover to SAT and back

use super::ExactCoverProblem;
use crate::config::Verbosity;
use crate::sat::{write_dimacs_file, CnfEncoder, GlucoseOracle, VariableTranslator};
use anyhow::{Context, Result};
use std::path::Path;

/// Solves an exact cover problem by reduction to SAT
///
/// One `solve` call runs the full sequential pipeline: encode the instance,
/// write the DIMACS file, run the external solver and translate its model
/// back into subset indices. A fresh variable translator is built for every
/// call and discarded with it.
pub struct ExactCoverSolver<'a> {
    problem: &'a ExactCoverProblem,
}

impl<'a> ExactCoverSolver<'a> {
    /// Create a solver for the given problem
    pub fn new(problem: &'a ExactCoverProblem) -> Self {
        Self { problem }
    }

    /// Run the pipeline once
    ///
    /// Returns `Ok(Some(indices))` with the selected subset indices in
    /// model order, or `Ok(None)` if the instance has no exact cover.
    /// Failures are not retried, and the CNF file stays on disk whatever
    /// the outcome.
    pub fn solve(
        &self,
        oracle: &GlucoseOracle,
        cnf_path: &Path,
        verbosity: Verbosity,
    ) -> Result<Option<Vec<usize>>> {
        let mut encoder = CnfEncoder::new();
        let formula = encoder.encode(self.problem);

        write_dimacs_file(&formula, cnf_path)?;

        let verdict = oracle.run_from_file(cnf_path, verbosity, true)?;
        if !verdict.satisfiable {
            return Ok(None);
        }

        let model = verdict
            .model
            .context("Solver reported satisfiable but did not print a model")?;
        let selected = decode_model(&model, encoder.translator())?;

        Ok(Some(selected))
    }
}

/// Map a satisfying assignment back to subset indices
///
/// Positive literals mark chosen subsets; everything else in the model is
/// dropped. The result follows model order, not collection order. A
/// variable the translator never allocated means the model belongs to some
/// other formula and is reported as an error.
pub fn decode_model(model: &[i32], translator: &VariableTranslator) -> Result<Vec<usize>> {
    model
        .iter()
        .filter(|&&literal| literal > 0)
        .map(|&literal| translator.subset_index(literal))
        .collect()
}
