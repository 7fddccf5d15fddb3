//! Configuration management for the exact cover solver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, Settings, SolverConfig, Verbosity,
};
