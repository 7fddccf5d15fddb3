//! CNF encoding of exact cover constraints

use super::formula::{Clause, CnfFormula};
use super::translator::VariableTranslator;
use crate::cover::ExactCoverProblem;
use itertools::Itertools;
use std::collections::HashSet;

/// Encodes an exact cover instance as a CNF formula
///
/// Subset i is modeled by one Boolean variable meaning "subset i is part of
/// the cover". For every universe element two families of clauses are
/// emitted over the subsets containing it:
///
/// 1. a coverage clause requiring that at least one of them is chosen
/// 2. one disjointness clause per unordered pair, forbidding both
///
/// An element no subset contains yields an empty coverage clause, which
/// leaves the formula unsatisfiable. That is the correct verdict: no
/// selection can ever cover that element.
pub struct CnfEncoder {
    translator: VariableTranslator,
}

impl CnfEncoder {
    /// Create a new encoder with a fresh variable translator
    pub fn new() -> Self {
        Self {
            translator: VariableTranslator::new(),
        }
    }

    /// Encode the problem into a CNF formula
    ///
    /// Variables are allocated in first-reference order, so encoding the
    /// same problem twice with fresh encoders produces identical formulas.
    pub fn encode(&mut self, problem: &ExactCoverProblem) -> CnfFormula {
        let mut clauses = Vec::new();

        for element in problem.universe() {
            let members = problem.subsets_containing(element);

            // 1. Coverage: at least one containing subset is selected
            let coverage = members
                .iter()
                .map(|&subset| self.translator.subset_variable(subset))
                .collect();
            clauses.push(Clause::new(coverage));

            // 2. Disjointness: no two containing subsets are both selected
            for (&first, &second) in members.iter().tuple_combinations() {
                let first_var = self.translator.subset_variable(first);
                let second_var = self.translator.subset_variable(second);
                clauses.push(Clause::binary(-first_var, -second_var));
            }
        }

        CnfFormula::new(clauses, self.translator.variable_count())
    }

    /// Get the variable translator built up by encoding
    pub fn translator(&self) -> &VariableTranslator {
        &self.translator
    }
}

impl Default for CnfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact size of the encoding, computed without building it
///
/// An element contained in k subsets costs one coverage clause plus
/// k * (k - 1) / 2 disjointness clauses, so the clause count grows
/// quadratically in the largest overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingEstimate {
    pub variable_count: usize,
    pub coverage_clause_count: usize,
    pub disjointness_clause_count: usize,
    pub literal_count: usize,
    /// Largest number of subsets sharing a single universe element
    pub max_overlap: usize,
}

impl EncodingEstimate {
    /// Total number of clauses the encoding produces
    pub fn clause_count(&self) -> usize {
        self.coverage_clause_count + self.disjointness_clause_count
    }
}

impl std::fmt::Display for EncodingEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding Estimate:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Coverage clauses: {}", self.coverage_clause_count)?;
        writeln!(f, "  Disjointness clauses: {}", self.disjointness_clause_count)?;
        writeln!(f, "  Total literals: {}", self.literal_count)?;
        writeln!(f, "  Largest element overlap: {}", self.max_overlap)?;
        Ok(())
    }
}

/// Compute the exact encoding size for a problem
///
/// Matches [`CnfEncoder::encode`] clause for clause; only the counting is
/// done here, no formula is materialized.
pub fn estimate_encoding(problem: &ExactCoverProblem) -> EncodingEstimate {
    let mut referenced: HashSet<usize> = HashSet::new();
    let mut coverage_clause_count = 0;
    let mut disjointness_clause_count = 0;
    let mut literal_count = 0;
    let mut max_overlap = 0;

    for element in problem.universe() {
        let members = problem.subsets_containing(element);
        let k = members.len();
        referenced.extend(members);

        coverage_clause_count += 1;
        disjointness_clause_count += k * k.saturating_sub(1) / 2;
        // k coverage literals plus 2 per disjointness pair sum to k * k
        literal_count += k * k;
        max_overlap = max_overlap.max(k);
    }

    EncodingEstimate {
        variable_count: referenced.len(),
        coverage_clause_count,
        disjointness_clause_count,
        literal_count,
        max_overlap,
    }
}
