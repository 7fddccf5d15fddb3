//! Clause and formula types for the CNF encoding

/// Represents a SAT clause (disjunction of literals)
///
/// The empty clause is representable on purpose: it is unconditionally
/// false, and the encoder emits it for a universe element no subset covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Number of literals in the clause
    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

/// A propositional formula in conjunctive normal form
///
/// Variables live in the contiguous range 1..=variable_count that a
/// [`VariableTranslator`](super::VariableTranslator) produced. The clause
/// order is the order the encoder emitted them in and is preserved all the
/// way into the DIMACS output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    clauses: Vec<Clause>,
    variable_count: usize,
}

impl CnfFormula {
    /// Create a formula from its clauses and the size of its variable space
    pub fn new(clauses: Vec<Clause>, variable_count: usize) -> Self {
        Self { clauses, variable_count }
    }

    /// All clauses in emission order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Number of variables
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Check whether the formula contains an empty clause, which makes it
    /// unsatisfiable no matter what the other clauses say
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_creation() {
        let clause = Clause::new(vec![1, -2, 3]);
        assert_eq!(clause.literals, vec![1, -2, 3]);
        assert_eq!(clause.len(), 3);
        assert!(!clause.is_empty());

        let binary_clause = Clause::binary(-4, 7);
        assert_eq!(binary_clause.literals, vec![-4, 7]);
    }

    #[test]
    fn test_empty_clause() {
        let clause = Clause::new(vec![]);
        assert!(clause.is_empty());
        assert_eq!(clause.len(), 0);
    }

    #[test]
    fn test_formula_accessors() {
        let formula = CnfFormula::new(vec![Clause::new(vec![1, 2]), Clause::binary(-1, -2)], 2);

        assert_eq!(formula.clause_count(), 2);
        assert_eq!(formula.variable_count(), 2);
        assert_eq!(formula.clauses()[0].literals, vec![1, 2]);
        assert!(!formula.has_empty_clause());
    }

    #[test]
    fn test_empty_clause_detection() {
        let formula = CnfFormula::new(vec![Clause::new(vec![1]), Clause::new(vec![])], 1);
        assert!(formula.has_empty_clause());
    }
}
