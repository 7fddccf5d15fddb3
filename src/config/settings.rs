//! Configuration settings for the exact cover solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub solver: SolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Problem file: first line is the universe, each later line one subset
    pub problem_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the DIMACS CNF formula is written; the file is kept after
    /// solving so it can be inspected or re-run by hand
    pub cnf_file: PathBuf,
    /// Optional JSON export of the found solution
    pub solution_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Path to a glucose-style SAT solver executable
    pub executable: PathBuf,
    /// Verbosity level passed to the solver
    pub verbosity: Verbosity,
    /// Suppress the solver output passthrough entirely
    pub quiet: bool,
}

/// Verbosity levels understood by the glucose solver family
///
/// The numeric `-verb=` levels 0, 1 and 2 map to silent, normal and
/// verbose. At silent the solver output passthrough is muted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
}

impl Verbosity {
    /// The numeric level passed to the solver via `-verb=`
    pub fn flag(self) -> u8 {
        match self {
            Verbosity::Silent => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }

    /// Map a numeric `-verb=` level back to a verbosity
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Verbosity::Silent),
            1 => Some(Verbosity::Normal),
            2 => Some(Verbosity::Verbose),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                problem_file: PathBuf::from("problem.in"),
            },
            output: OutputConfig {
                cnf_file: PathBuf::from("dimacs_cnf.out"),
                solution_file: None,
            },
            solver: SolverConfig {
                executable: PathBuf::from("glucose-syrup"),
                verbosity: Verbosity::Normal,
                quiet: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    ///
    /// Only the shape is checked here. Whether the problem file or the
    /// solver binary actually exist is decided when they are used, so those
    /// failures carry their own error kinds.
    pub fn validate(&self) -> Result<()> {
        if self.input.problem_file.as_os_str().is_empty() {
            anyhow::bail!("Problem file path must not be empty");
        }

        if self.output.cnf_file.as_os_str().is_empty() {
            anyhow::bail!("CNF output path must not be empty");
        }

        if self.solver.executable.as_os_str().is_empty() {
            anyhow::bail!("Solver executable must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref problem_file) = cli_overrides.problem_file {
            self.input.problem_file = problem_file.clone();
        }
        if let Some(ref cnf_file) = cli_overrides.cnf_file {
            self.output.cnf_file = cnf_file.clone();
        }
        if let Some(ref solution_file) = cli_overrides.solution_file {
            self.output.solution_file = Some(solution_file.clone());
        }
        if let Some(ref executable) = cli_overrides.solver {
            self.solver.executable = executable.clone();
        }
        if let Some(verbosity) = cli_overrides.verbosity {
            self.solver.verbosity = verbosity;
        }
        if cli_overrides.quiet {
            self.solver.quiet = true;
        }
    }

    /// The verbosity the oracle should actually run at
    pub fn effective_verbosity(&self) -> Verbosity {
        if self.solver.quiet {
            Verbosity::Silent
        } else {
            self.solver.verbosity
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub problem_file: Option<PathBuf>,
    pub cnf_file: Option<PathBuf>,
    pub solution_file: Option<PathBuf>,
    pub solver: Option<PathBuf>,
    pub verbosity: Option<Verbosity>,
    pub quiet: bool,
}
