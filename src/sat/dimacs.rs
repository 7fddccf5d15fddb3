//! DIMACS CNF text output

use super::formula::CnfFormula;
use crate::error::SolveError;
use anyhow::{Context, Result};
use std::path::Path;

/// Render a formula in the DIMACS CNF text convention
///
/// One header line `p cnf <variables> <clauses>`, then one line per clause
/// with its literals separated by spaces and terminated by `0`. The empty
/// clause renders as a bare `0` line. Output is deterministic: the same
/// formula always produces byte-identical text.
pub fn to_dimacs(formula: &CnfFormula) -> String {
    // Rough guess: most clauses here are short
    let mut result = String::with_capacity(16 + formula.clause_count() * 12);

    result.push_str(&format!(
        "p cnf {} {}\n",
        formula.variable_count(),
        formula.clause_count()
    ));

    for clause in formula.clauses() {
        for literal in &clause.literals {
            result.push_str(&format!("{} ", literal));
        }
        result.push_str("0\n");
    }

    result
}

/// Write a formula to a DIMACS CNF file
///
/// Parent directories are created as needed. The file is left in place
/// after solving so it can be inspected or re-run by hand.
pub fn write_dimacs_file<P: AsRef<Path>>(formula: &CnfFormula, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(path, to_dimacs(formula)).map_err(|source| SolveError::CnfWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::formula::Clause;
    use tempfile::tempdir;

    #[test]
    fn test_dimacs_layout() {
        let formula = CnfFormula::new(
            vec![
                Clause::new(vec![1, 2]),
                Clause::binary(-1, -2),
                Clause::new(vec![3]),
            ],
            3,
        );

        assert_eq!(to_dimacs(&formula), "p cnf 3 3\n1 2 0\n-1 -2 0\n3 0\n");
    }

    #[test]
    fn test_empty_clause_renders_as_bare_terminator() {
        let formula = CnfFormula::new(vec![Clause::new(vec![])], 0);
        assert_eq!(to_dimacs(&formula), "p cnf 0 1\n0\n");
    }

    #[test]
    fn test_empty_formula() {
        let formula = CnfFormula::new(vec![], 0);
        assert_eq!(to_dimacs(&formula), "p cnf 0 0\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let formula = CnfFormula::new(
            vec![Clause::new(vec![2, -3, 1]), Clause::binary(-2, -1)],
            3,
        );

        assert_eq!(to_dimacs(&formula), to_dimacs(&formula));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let cnf_path = temp_dir.path().join("formula.cnf");

        let formula = CnfFormula::new(vec![Clause::binary(1, -2)], 2);
        write_dimacs_file(&formula, &cnf_path).unwrap();

        let written = std::fs::read_to_string(&cnf_path).unwrap();
        assert_eq!(written, "p cnf 2 1\n1 -2 0\n");
    }

    #[test]
    fn test_write_failure_reports_cnf_error() {
        let temp_dir = tempdir().unwrap();
        // A directory cannot be written to as if it were a file
        let formula = CnfFormula::new(vec![], 0);
        let err = write_dimacs_file(&formula, temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SolveError>(),
            Some(SolveError::CnfWrite { .. })
        ));
    }
}
