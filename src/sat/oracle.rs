//! External SAT solver process integration

use crate::config::Verbosity;
use crate::error::SolveError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Marker line prefixes in solver output
const SATISFIABLE_MARKER: &str = "s SATISFIABLE";
const UNSATISFIABLE_MARKER: &str = "s UNSATISFIABLE";
const MODEL_MARKER: &str = "v ";

/// Verdict reported by the external solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverVerdict {
    pub satisfiable: bool,
    /// Satisfying assignment, one signed literal per variable; present
    /// whenever the solver printed a model line
    pub model: Option<Vec<i32>>,
}

/// Adapter around a glucose-style SAT solver executable
///
/// The solver runs as a separate process and its standard output is the only
/// channel read back. Exit codes are deliberately ignored: the glucose
/// family encodes the verdict in them, other solvers do not, and the `s `
/// marker lines are the one convention they all share.
pub struct GlucoseOracle {
    executable: PathBuf,
}

impl GlucoseOracle {
    /// Create an oracle for the given solver executable
    pub fn new<P: Into<PathBuf>>(executable: P) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Path of the wrapped solver executable
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run the solver on a CNF file and parse its verdict
    ///
    /// Blocks until the solver process exits; no timeout is applied, so a
    /// hung solver hangs the caller. With `get_model` set the solver is
    /// asked to print a satisfying assignment. Unless the verbosity is
    /// silent, every solver output line is echoed to stdout after the run;
    /// the solver's stderr passes through untouched either way.
    pub fn run_from_file(
        &self,
        cnf_path: &Path,
        verbosity: Verbosity,
        get_model: bool,
    ) -> Result<SolverVerdict> {
        let mut command = Command::new(&self.executable);
        if get_model {
            command.arg("-model");
        }
        command.arg(format!("-verb={}", verbosity.flag()));
        command.arg(cnf_path);

        let output = command
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| SolveError::ProcessExecution {
                solver: self.executable.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if verbosity != Verbosity::Silent {
            for line in stdout.lines() {
                println!("{}", line);
            }
        }

        parse_verdict(&stdout)
    }
}

/// Scan solver output for the verdict and model lines
///
/// The whole stream is scanned and later marker lines win over earlier
/// ones. Only after the stream is exhausted without a satisfiability marker
/// does the indeterminate error fire; defaulting to a verdict here would
/// turn a crashed solver run into a silently wrong answer.
pub fn parse_verdict(output: &str) -> Result<SolverVerdict> {
    let mut satisfiable = None;
    let mut model = None;

    for line in output.lines() {
        if let Some(literals) = line.strip_prefix(MODEL_MARKER) {
            model = Some(
                parse_model_line(literals)
                    .with_context(|| format!("Malformed model line in solver output: {:?}", line))?,
            );
        } else if line.starts_with(SATISFIABLE_MARKER) {
            satisfiable = Some(true);
        } else if line.starts_with(UNSATISFIABLE_MARKER) {
            satisfiable = Some(false);
        }
    }

    match satisfiable {
        Some(satisfiable) => Ok(SolverVerdict { satisfiable, model }),
        None => Err(SolveError::IndeterminateResult.into()),
    }
}

/// Parse the literals of a model line, dropping the trailing `0` terminator
/// when present
fn parse_model_line(literals: &str) -> Result<Vec<i32>, std::num::ParseIntError> {
    let mut parsed = literals
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<i32>, _>>()?;

    if parsed.last() == Some(&0) {
        parsed.pop();
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_satisfiable_with_model() {
        let output = "c restarts: 1\ns SATISFIABLE\nv 1 -2 3 0\n";
        let verdict = parse_verdict(output).unwrap();

        assert!(verdict.satisfiable);
        assert_eq!(verdict.model, Some(vec![1, -2, 3]));
    }

    #[test]
    fn test_parse_unsatisfiable() {
        let output = "c conflicts: 42\ns UNSATISFIABLE\n";
        let verdict = parse_verdict(output).unwrap();

        assert!(!verdict.satisfiable);
        assert_eq!(verdict.model, None);
    }

    #[test]
    fn test_missing_verdict_is_indeterminate() {
        let output = "c the solver crashed before printing anything useful\n";
        let err = parse_verdict(output).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SolveError>(),
            Some(SolveError::IndeterminateResult)
        ));
    }

    #[test]
    fn test_marker_must_start_the_line() {
        let output = "c not a verdict: s SATISFIABLE\n";
        assert!(parse_verdict(output).is_err());
    }

    #[test]
    fn test_later_model_line_wins() {
        let output = "v 1 0\nv -1 2 0\ns SATISFIABLE\n";
        let verdict = parse_verdict(output).unwrap();

        assert_eq!(verdict.model, Some(vec![-1, 2]));
    }

    #[test]
    fn test_model_without_terminator() {
        let output = "s SATISFIABLE\nv 4 5\n";
        let verdict = parse_verdict(output).unwrap();

        assert_eq!(verdict.model, Some(vec![4, 5]));
    }

    #[test]
    fn test_empty_model_line() {
        let output = "s SATISFIABLE\nv 0\n";
        let verdict = parse_verdict(output).unwrap();

        assert_eq!(verdict.model, Some(vec![]));
    }

    #[test]
    fn test_malformed_model_line() {
        let output = "s SATISFIABLE\nv 1 two 3 0\n";
        let err = parse_verdict(output).unwrap_err();

        assert!(err.to_string().contains("model line"));
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Verbosity::Silent.flag(), 0);
        assert_eq!(Verbosity::Normal.flag(), 1);
        assert_eq!(Verbosity::Verbose.flag(), 2);

        for verbosity in [Verbosity::Silent, Verbosity::Normal, Verbosity::Verbose] {
            assert_eq!(Verbosity::from_flag(verbosity.flag()), Some(verbosity));
        }
        assert_eq!(Verbosity::from_flag(3), None);
    }
}
