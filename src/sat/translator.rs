//! Variable translation between subset indices and SAT variables

use anyhow::Result;
use std::collections::HashMap;

/// Maps subset indices to the contiguous variable range 1..=n that the
/// DIMACS format expects, and back.
///
/// Variables are handed out in first-encounter order and never reclaimed,
/// so the mapping stays a bijection over every subset the encoder touched.
/// Each encoding run owns a fresh translator; reusing one across problems
/// would mix up their variable spaces.
#[derive(Debug, Default)]
pub struct VariableTranslator {
    /// Map from subset index to its SAT variable (positive integer)
    by_subset: HashMap<usize, i32>,
    /// Inverse map; variable v is stored at position v - 1
    by_variable: Vec<usize>,
}

impl VariableTranslator {
    /// Create an empty translator
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the SAT variable for a subset index, allocating the next free
    /// variable on first encounter
    pub fn subset_variable(&mut self, subset_index: usize) -> i32 {
        if let Some(&variable) = self.by_subset.get(&subset_index) {
            return variable;
        }

        // SAT variables start from 1
        let variable = self.by_variable.len() as i32 + 1;
        self.by_subset.insert(subset_index, variable);
        self.by_variable.push(subset_index);
        variable
    }

    /// Look up the subset index a SAT variable stands for
    ///
    /// An unknown variable means the model belongs to a different formula
    /// than this translator produced, so it is reported as an error rather
    /// than guessed around.
    pub fn subset_index(&self, variable: i32) -> Result<usize> {
        if variable < 1 || variable as usize > self.by_variable.len() {
            anyhow::bail!(
                "variable {} was never allocated (allocated variables: 1..={})",
                variable,
                self.by_variable.len()
            );
        }
        Ok(self.by_variable[variable as usize - 1])
    }

    /// Get the total number of variables allocated
    pub fn variable_count(&self) -> usize {
        self.by_variable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_start_at_one() {
        let mut translator = VariableTranslator::new();

        assert_eq!(translator.subset_variable(7), 1);
        assert_eq!(translator.subset_variable(0), 2);
        assert_eq!(translator.subset_variable(42), 3);
        assert_eq!(translator.variable_count(), 3);
    }

    #[test]
    fn test_same_subset_returns_same_variable() {
        let mut translator = VariableTranslator::new();

        let first = translator.subset_variable(5);
        let again = translator.subset_variable(5);

        assert_eq!(first, again);
        assert_eq!(translator.variable_count(), 1);
    }

    #[test]
    fn test_round_trip() {
        let mut translator = VariableTranslator::new();

        for subset_index in [3, 1, 4, 1, 5, 9, 2, 6] {
            let variable = translator.subset_variable(subset_index);
            assert_eq!(translator.subset_index(variable).unwrap(), subset_index);
        }
    }

    #[test]
    fn test_unknown_variable_is_an_error() {
        let mut translator = VariableTranslator::new();
        translator.subset_variable(0);

        assert!(translator.subset_index(2).is_err()); // never allocated
        assert!(translator.subset_index(0).is_err()); // not a valid variable
        assert!(translator.subset_index(-1).is_err());
        assert!(translator.subset_index(1).is_ok());
    }

    #[test]
    fn test_empty_translator() {
        let translator = VariableTranslator::new();

        assert_eq!(translator.variable_count(), 0);
        assert!(translator.subset_index(1).is_err());
    }
}
