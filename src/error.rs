//! Error types for the solve pipeline

use std::path::PathBuf;
use thiserror::Error;

/// The ways a solve run can fail.
///
/// Every variant is fatal for the call that produced it; nothing is retried.
/// Errors usually travel inside [`anyhow::Error`] chains, so callers that
/// care about the exact kind can recover it with
/// `err.downcast_ref::<SolveError>()`.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The problem file could not be read.
    #[error("failed to load problem from {}", path.display())]
    InputFormat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SAT solver process could not be started.
    #[error("failed to execute SAT solver `{}`", solver.display())]
    ProcessExecution {
        solver: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The solver ran but printed neither verdict marker, so no answer can
    /// be reported.
    #[error("solver output contained neither `s SATISFIABLE` nor `s UNSATISFIABLE`")]
    IndeterminateResult,

    /// The DIMACS CNF file could not be written.
    #[error("failed to write CNF formula to {}", path.display())]
    CnfWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = SolveError::InputFormat {
            path: PathBuf::from("missing.in"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.in"));

        let err = SolveError::IndeterminateResult;
        assert!(err.to_string().contains("s SATISFIABLE"));
        assert!(err.to_string().contains("s UNSATISFIABLE"));
    }

    #[test]
    fn test_errors_survive_anyhow_downcast() {
        let err: anyhow::Error = SolveError::IndeterminateResult.into();
        assert!(matches!(
            err.downcast_ref::<SolveError>(),
            Some(SolveError::IndeterminateResult)
        ));
    }

    #[test]
    fn test_io_source_is_preserved() {
        let err = SolveError::CnfWrite {
            path: PathBuf::from("out.cnf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
